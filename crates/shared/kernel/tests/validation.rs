use amia_kernel::validation::{FieldErrors, is_valid_email};
use proptest::prelude::*;

proptest! {
    #[test]
    fn whitespace_only_values_are_rejected(value in "[ \t\n]{0,12}") {
        let mut errors = FieldErrors::new();
        prop_assert!(!errors.check_required("name", &value, "required"));
        prop_assert_eq!(errors.get("name"), Some("required"));
    }

    #[test]
    fn values_with_content_pass_required(value in "[ ]{0,3}[a-zA-Z0-9]{1,16}[ ]{0,3}") {
        let mut errors = FieldErrors::new();
        prop_assert!(errors.check_required("name", &value, "required"));
        prop_assert!(errors.is_empty());
    }

    #[test]
    fn well_formed_addresses_match(
        local in "[a-z0-9._+-]{1,16}",
        domain in "[a-z0-9-]{1,16}",
        tld in "[a-z]{2,6}",
    ) {
        let address = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&address));
    }

    #[test]
    fn addresses_without_at_never_match(value in "[^@]{0,32}") {
        prop_assert!(!is_valid_email(&value));
    }

    #[test]
    fn addresses_without_dot_after_at_never_match(
        local in "[a-z0-9]{1,16}",
        domain in "[a-z0-9]{1,16}",
    ) {
        let address = format!("{local}@{domain}");
        prop_assert!(!is_valid_email(&address));
    }
}
