//! Numeric option-value parsing.
//!
//! The `-u`/`-l` options accept unsigned integers in the common C bases:
//! plain decimal, `0x`/`0X` hexadecimal, and leading-`0` octal (the
//! `strtoul` base-0 convention). Anything else — trailing garbage, signs,
//! values too large for `u64` — is rejected with the exact message the CLI
//! shows the user.

use crate::error::{Error, Result};

/// Parses a non-negative integer option value.
///
/// Accepts `"42"`, `"0x2a"`, `"0X2A"`, and `"052"` as the same number.
/// A bare `"0"` is decimal zero, not an octal prefix.
///
/// # Errors
///
/// Returns [`Error::InvalidCount`] carrying the offending token when the
/// value is malformed or does not fit in a `u64`.
pub fn parse_count(token: &str) -> Result<u64> {
    let parsed = if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        u64::from_str_radix(hex, 16)
    } else if token.len() > 1 && token.starts_with('0') {
        u64::from_str_radix(&token[1..], 8)
    } else {
        token.parse::<u64>()
    };

    parsed.map_err(|_| Error::invalid_count(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_count("0").unwrap(), 0);
        assert_eq!(parse_count("42").unwrap(), 42);
        assert_eq!(parse_count("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_hex_prefix() {
        assert_eq!(parse_count("0x1f").unwrap(), 31);
        assert_eq!(parse_count("0X1F").unwrap(), 31);
        assert_eq!(parse_count("0x0").unwrap(), 0);
    }

    #[test]
    fn test_octal_prefix() {
        assert_eq!(parse_count("017").unwrap(), 15);
        assert_eq!(parse_count("0777").unwrap(), 511);
    }

    #[test]
    fn test_rejects_malformed() {
        for token in ["", "abc", "12abc", "0x", "0xzz", "08", "-1", "1 2"] {
            let err = parse_count(token).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!("'{token}' is not a non-negative integer")
            );
        }
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_count("18446744073709551616").is_err());
        assert!(parse_count("0xffffffffffffffffff").is_err());
    }
}
