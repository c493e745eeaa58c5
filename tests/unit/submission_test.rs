//! Tests for submission validation and name shaping

use rollcall::core::models::{IDENTIFIER_LEN, IdentitySubmission, title_case};

fn sub(first: &str, last: &str, identifier: &str) -> IdentitySubmission {
    IdentitySubmission::new(first, last, identifier)
}

mod well_formed {
    use super::*;

    #[test]
    fn accepts_alphabetic_names_and_nine_digits() {
        assert!(sub("John", "Doe", "123456789").is_well_formed());
    }

    #[test]
    fn accepts_mixed_case_names() {
        assert!(sub("jOhN", "dOE", "123456789").is_well_formed());
    }

    #[test]
    fn trims_surrounding_whitespace() {
        assert!(sub("  John ", " Doe ", " 123456789 ").is_well_formed());
    }

    #[test]
    fn rejects_short_identifier() {
        assert!(!sub("Jane", "Doe", "12345").is_well_formed());
    }

    #[test]
    fn rejects_long_identifier() {
        assert!(!sub("Jane", "Doe", "1234567890").is_well_formed());
    }

    #[test]
    fn rejects_non_numeric_identifier() {
        assert!(!sub("Jane", "Doe", "12345678a").is_well_formed());
    }

    #[test]
    fn rejects_digits_in_name() {
        assert!(!sub("J4ne", "Doe", "123456789").is_well_formed());
    }

    #[test]
    fn rejects_empty_name() {
        assert!(!sub("", "Doe", "123456789").is_well_formed());
        assert!(!sub("Jane", "", "123456789").is_well_formed());
    }

    #[test]
    fn rejects_name_with_spaces() {
        assert!(!sub("Mary Jane", "Doe", "123456789").is_well_formed());
    }

    #[test]
    fn identifier_length_is_nine() {
        assert_eq!(IDENTIFIER_LEN, 9);
    }
}

mod display_name {
    use super::*;

    #[test]
    fn title_cases_both_names() {
        assert_eq!(sub("john", "doe", "123456789").display_name(), "John Doe");
    }

    #[test]
    fn normalizes_shouting() {
        assert_eq!(sub("JOHN", "DOE", "123456789").display_name(), "John Doe");
    }

    #[test]
    fn title_case_handles_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn title_case_single_char() {
        assert_eq!(title_case("j"), "J");
    }
}
