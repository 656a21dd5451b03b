//! Integration tests
//!
//! View-models driven through the public API, and the real HTTP path against
//! a local wiremock server.

mod benevits_test;
mod login_test;
mod network_test;
mod session_test;
