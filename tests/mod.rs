//! Test suite for Benevits
//!
//! This module organizes all tests

pub mod integration;
pub mod property;
