//! Form field rules shared by the create and edit flows.

use crate::error::AppError;
use regex::Regex;
use std::sync::OnceLock;

/// Exactly ten ASCII digits. `\d` would also admit other Unicode digits.
const MOBILE_PATTERN: &str = r"^[0-9]{10}$";

pub const INVALID_MOBILE: &str = "Invalid mobile number! Enter 10 digits.";

fn mobile_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern compiles"))
}

/// True iff `mobile` is exactly ten decimal digits with nothing around them.
pub fn is_valid_mobile(mobile: &str) -> bool {
    mobile_regex().is_match(mobile)
}

pub struct RequestValidator;

impl RequestValidator {
    /// Every `(field, value)` pair must be non-blank.
    pub fn require_filled(fields: &[(&str, &str)]) -> Result<(), AppError> {
        for (col, value) in fields {
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{} is required", col)));
            }
        }
        Ok(())
    }

    pub fn mobile(mobile: &str) -> Result<(), AppError> {
        if is_valid_mobile(mobile) {
            Ok(())
        } else {
            Err(AppError::Validation(INVALID_MOBILE.into()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries() {
        assert!(is_valid_mobile("1234567890"));
        assert!(is_valid_mobile("0000000000"));
        assert!(!is_valid_mobile("123456789"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("+123456789"));
        assert!(!is_valid_mobile("+1234567890"));
        assert!(!is_valid_mobile(" 1234567890"));
        assert!(!is_valid_mobile("1234567890\n"));
        assert!(!is_valid_mobile("12345-7890"));
        assert!(!is_valid_mobile(""));
        // Arabic-Indic digits are decimal digits in Unicode, not in a phone number.
        assert!(!is_valid_mobile("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn require_filled_names_the_field() {
        assert!(RequestValidator::require_filled(&[("name", "Ana"), ("course", "CS")]).is_ok());
        let err = RequestValidator::require_filled(&[("name", "Ana"), ("course", "  ")]).unwrap_err();
        assert_eq!(err.user_message(), Some("course is required"));
    }

    proptest! {
        #[test]
        fn ten_digits_accepted(mobile in "[0-9]{10}") {
            prop_assert!(is_valid_mobile(&mobile));
        }

        #[test]
        fn other_lengths_rejected(mobile in "[0-9]{0,9}|[0-9]{11,20}") {
            prop_assert!(!is_valid_mobile(&mobile));
        }

        #[test]
        fn any_non_digit_rejected(prefix in "[0-9]{0,9}", bad in "[^0-9]", suffix in "[0-9]{0,9}") {
            let mobile = format!("{prefix}{bad}{suffix}");
            prop_assert!(!is_valid_mobile(&mobile));
        }
    }
}
