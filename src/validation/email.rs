//! Email shape check.
//!
//! This is a structural check only: `local@domain.tld` with no whitespace and
//! no second `@`. It says nothing about deliverability.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Characters a browser strips with `trim()` and matches with `\s`:
/// ECMAScript WhiteSpace plus LineTerminator. Narrower than Unicode
/// White_Space (U+0085 is not in it) and wider by U+FEFF.
const BROWSER_SPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^[^@{space}]+@[^@{space}]+\.[^@{space}]+$",
        space = BROWSER_SPACE_CLASS
    );
    Regex::new(&pattern).expect("email shape pattern is built from literals")
});

fn is_browser_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Why a submission was rejected.
///
/// `Display` yields the default user-facing message; hosts may substitute
/// their own text through [`crate::config::Messages`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    /// Nothing left after trimming.
    #[error("Oops! Please add your email")]
    EmptyInput,

    /// Non-empty, but not shaped like an address.
    #[error("Oops! Please check your email")]
    InvalidFormat,
}

/// Strips leading and trailing whitespace the way a browser `trim()` does.
pub fn trim_input(raw: &str) -> &str {
    raw.trim_matches(is_browser_space)
}

/// Returns true if the whole string is `local@domain.tld`-shaped.
///
/// No trimming happens here; surrounding whitespace fails the check.
pub fn is_email_shaped(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// Trims `raw` and checks it.
///
/// Emptiness is checked first, so a blank submission never reaches the
/// shape pattern. On success the trimmed address is returned.
pub fn validate_email(raw: &str) -> Result<&str, Rejection> {
    let email = trim_input(raw);

    if email.is_empty() {
        return Err(Rejection::EmptyInput);
    }

    if !is_email_shaped(email) {
        return Err(Rejection::InvalidFormat);
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_address() {
        assert_eq!(validate_email("user@example.com"), Ok("user@example.com"));
    }

    #[test]
    fn accepts_dotted_local_part_and_multi_label_domain() {
        assert_eq!(
            validate_email("test.user@domain.co.kr"),
            Ok("test.user@domain.co.kr")
        );
    }

    #[test]
    fn trims_before_checking() {
        assert_eq!(
            validate_email("  user@example.com\t\n"),
            Ok("user@example.com")
        );
    }

    #[test]
    fn empty_and_blank_are_empty_input() {
        for raw in ["", " ", "\t\n", "\u{00A0}", "\u{FEFF}", "\u{3000}  "] {
            assert_eq!(validate_email(raw), Err(Rejection::EmptyInput), "{raw:?}");
        }
    }

    #[test]
    fn malformed_addresses_are_invalid_format() {
        for raw in [
            "user@",
            "@example.com",
            "user@domain",
            "user @domain.com",
            "plainstring",
            "user@@example.com",
            "user@exa@mple.com",
            "user@.",
            "user@example.",
            "a@b\u{FEFF}.c",
        ] {
            assert_eq!(validate_email(raw), Err(Rejection::InvalidFormat), "{raw:?}");
        }
    }

    #[test]
    fn next_line_is_not_whitespace() {
        assert_eq!(validate_email("\u{85}"), Err(Rejection::InvalidFormat));
        assert_eq!(validate_email("a\u{85}b@c.d"), Ok("a\u{85}b@c.d"));
        assert_eq!(trim_input("\u{85}x\u{85}"), "\u{85}x\u{85}");
    }

    #[test]
    fn trim_set_and_pattern_class_agree() {
        let spaces = ('\0'..=char::MAX).filter(|c| is_browser_space(*c));
        let mut count = 0;
        for c in spaces {
            count += 1;
            assert_eq!(trim_input(&c.to_string()), "", "U+{:04X}", c as u32);
            let inner = format!("a{c}b@c.d");
            assert!(!is_email_shaped(&inner), "U+{:04X}", c as u32);
        }
        assert_eq!(count, 25);
    }

    #[test]
    fn domain_dot_may_be_any_later_dot() {
        // The domain part may itself contain dots before the final one.
        assert!(is_email_shaped("a@b.c.d"));
        assert!(is_email_shaped("a.b@c.d"));
        // A dot right after `@` still leaves a non-empty domain before the next one.
        assert!(is_email_shaped("a@.b.c"));
    }

    #[test]
    fn shape_check_does_not_trim() {
        assert!(!is_email_shaped(" user@example.com"));
        assert!(!is_email_shaped("user@example.com "));
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::EmptyInput.to_string(), "Oops! Please add your email");
        assert_eq!(
            Rejection::InvalidFormat.to_string(),
            "Oops! Please check your email"
        );
    }
}
