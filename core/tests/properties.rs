use proptest::prelude::*;
use serde_json::json;
use todo_core::{text_len, validate, ValidationError, TEXT_MAX_LEN};

proptest! {
    #[test]
    fn accepts_every_bmp_text_within_bounds(s in "[ -\u{D7FF}]{1,50}") {
        let input = validate(&json!({ "text": s.clone() })).unwrap();
        prop_assert_eq!(input.text(), s.as_str());
    }

    #[test]
    fn rejects_every_text_over_max(s in "\\PC{51,120}") {
        let err = validate(&json!({ "text": s.clone() })).unwrap_err();
        prop_assert_eq!(
            err,
            ValidationError::TooLong { max: TEXT_MAX_LEN, actual: text_len(&s) }
        );
    }

    #[test]
    fn outcome_depends_only_on_utf16_len(s in "\\PC{0,80}") {
        let len = text_len(&s);
        let ok = validate(&json!({ "text": s })).is_ok();
        prop_assert_eq!(ok, (1..=TEXT_MAX_LEN).contains(&len));
    }

    #[test]
    fn astral_text_counts_two_units_per_char(n in 1usize..40) {
        let s = "😀".repeat(n);
        prop_assert_eq!(validate(&json!({ "text": s })).is_ok(), 2 * n <= TEXT_MAX_LEN);
    }

    #[test]
    fn non_string_text_is_always_required(n in any::<i64>()) {
        prop_assert_eq!(
            validate(&json!({ "text": n })).unwrap_err(),
            ValidationError::Required
        );
    }
}
