//! Property-based checks for the signup form.
//!
//! Verifies:
//! 1. Blank input always yields the empty-input error and never notifies
//! 2. Input containing inner whitespace is never accepted
//! 3. Shaped addresses are always accepted, with one reset and one notice
//! 4. Padding an input with whitespace never changes the outcome
//! 5. The validity flag always mirrors the error text

mod common;

use common::{assert_flag_mirrors_error, memory_validator, EMPTY_INPUT, INVALID_FORMAT, SUCCESS};
use launchform::surface::PlainSubmit;
use launchform::validation::{validate_email, Rejection};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_blank() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            Just(' '),
            Just('\t'),
            Just('\n'),
            Just('\r'),
            Just('\u{00A0}'),
            Just('\u{000B}'),
            Just('\u{1680}'),
            Just('\u{2003}'),
            Just('\u{2028}'),
            Just('\u{FEFF}'),
        ],
        0..8,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// One or more characters that are neither whitespace nor `@`.
fn arb_part() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9._%+-]{1,12}"
}

fn arb_shaped_email() -> impl Strategy<Value = String> {
    (arb_part(), arb_part(), "[a-z]{1,6}")
        .prop_map(|(local, domain, tld)| format!("{local}@{domain}.{tld}"))
}

fn arb_any_input() -> impl Strategy<Value = String> {
    prop_oneof![
        arb_blank(),
        arb_shaped_email(),
        "[ a-z@.]{0,20}",
        any::<String>(),
    ]
}

proptest! {
    #[test]
    fn blank_input_is_empty_error(blank in arb_blank()) {
        let mut validator = memory_validator();
        validator.handle_submit(&mut PlainSubmit::default(), &blank);

        prop_assert_eq!(&validator.surface().error_text, EMPTY_INPUT);
        prop_assert_eq!(validator.surface().resets, 0);
        prop_assert!(validator.sink().messages.is_empty());
    }

    #[test]
    fn inner_whitespace_is_invalid(
        left in arb_part(),
        right in arb_shaped_email(),
        gap in prop_oneof![Just(" "), Just("\t"), Just("\u{00A0}")],
    ) {
        let value = format!("{left}{gap}{right}");
        prop_assert_eq!(validate_email(&value), Err(Rejection::InvalidFormat));

        let mut validator = memory_validator();
        validator.handle_submit(&mut PlainSubmit::default(), &value);
        prop_assert_eq!(&validator.surface().error_text, INVALID_FORMAT);
        prop_assert!(validator.sink().messages.is_empty());
    }

    #[test]
    fn shaped_email_is_accepted(email in arb_shaped_email()) {
        let mut validator = memory_validator();
        validator.show_error(INVALID_FORMAT);
        validator.handle_submit(&mut PlainSubmit::default(), &email);

        prop_assert_eq!(&validator.surface().error_text, "");
        prop_assert!(!validator.surface().invalid);
        prop_assert_eq!(validator.surface().resets, 1);
        prop_assert_eq!(&validator.sink().messages, &vec![SUCCESS.to_string()]);
    }

    #[test]
    fn padding_does_not_change_outcome(
        value in arb_any_input(),
        before in arb_blank(),
        after in arb_blank(),
    ) {
        let mut plain = memory_validator();
        let plain_outcome = plain.handle_submit(&mut PlainSubmit::default(), &value);
        let mut padded = memory_validator();
        let padded_outcome =
            padded.handle_submit(&mut PlainSubmit::default(), &format!("{before}{value}{after}"));

        prop_assert_eq!(plain_outcome, padded_outcome);
        prop_assert_eq!(plain.surface(), padded.surface());
        prop_assert_eq!(plain.sink(), padded.sink());
    }

    #[test]
    fn flag_mirrors_error_after_any_sequence(
        steps in prop::collection::vec(
            prop_oneof![
                arb_any_input().prop_map(Some),
                Just(None),
            ],
            1..12,
        ),
    ) {
        let mut validator = memory_validator();
        for step in steps {
            match step {
                Some(value) => {
                    validator.handle_submit(&mut PlainSubmit::default(), &value);
                }
                None => validator.handle_input_change(),
            }
            assert_flag_mirrors_error(&validator);
        }
    }
}
