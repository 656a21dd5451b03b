//! Property-based tests

mod login_proptest;
