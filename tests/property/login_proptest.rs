//! Property-based tests for login input validation

use benevits::egui_app::viewmodels::login::{is_valid_password, is_valid_username, validate_username_input};
use proptest::prelude::*;

proptest! {
    #[test]
    fn test_sanitized_username_is_digits(input in ".{0,40}") {
        let sanitized = validate_username_input(&input);
        prop_assert!(sanitized.len() <= 11);
        prop_assert!(sanitized.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_eleven_digits_are_valid(username in "[0-9]{11}") {
        prop_assert!(is_valid_username(&username));
        prop_assert_eq!(validate_username_input(&username), username);
    }

    #[test]
    fn test_wrong_length_is_invalid(username in "[0-9]{1,10}|[0-9]{12,20}") {
        prop_assert!(!is_valid_username(&username));
    }

    #[test]
    fn test_password_length(password in ".{1,30}") {
        prop_assert_eq!(is_valid_password(&password), password.chars().count() >= 8);
    }
}
