//! # Input Masks
//!
//! Reshapes raw keystrokes into the masked strings shown in the CEP, CPF and
//! phone inputs.
//!
//! ## Masking Is Not Incremental
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Every keystroke re-masks the WHOLE input:                              │
//! │                                                                         │
//! │   "111.444.77"  + '7'  ──► "111.444.777"                               │
//! │        │                        │                                       │
//! │        ▼                        ▼                                       │
//! │   digits: 11144477  ──►  digits: 111444777  ──► "111.444.777"          │
//! │                                                                         │
//! │  Separators typed by the user are discarded, so pasting                 │
//! │  "111 444 777 35" yields the same result as typing the digits.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All functions are total: any input, including the empty string, produces
//! a defined output. Re-applying a mask to its own output is a no-op.
//!
//! ## Usage
//! ```rust
//! use cadastro_core::mask::{format_phone, format_postal_code, format_tax_id};
//!
//! assert_eq!(format_postal_code("01310100"), "01310-100");
//! assert_eq!(format_tax_id("11144477735"), "111.444.777-35");
//! assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Longest masked CEP: `12345-678`.
pub const POSTAL_CODE_MAX_LEN: usize = 9;

/// Longest masked CPF: `123.456.789-01`.
pub const TAX_ID_MAX_LEN: usize = 14;

/// Longest masked phone input.
pub const PHONE_MAX_LEN: usize = 16;

// =============================================================================
// Mask
// =============================================================================

/// The masks available to form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Mask {
    PostalCode,
    TaxId,
    Phone,
}

impl Mask {
    /// Applies this mask to the full raw input.
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Mask::PostalCode => format_postal_code(raw),
            Mask::TaxId => format_tax_id(raw),
            Mask::Phone => format_phone(raw),
        }
    }

    /// Maximum length of the masked output.
    pub const fn max_len(&self) -> usize {
        match self {
            Mask::PostalCode => POSTAL_CODE_MAX_LEN,
            Mask::TaxId => TAX_ID_MAX_LEN,
            Mask::Phone => PHONE_MAX_LEN,
        }
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Keeps only the ASCII digits of `raw`.
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Clamped substring over an ASCII digit string.
fn span(digits: &str, start: usize, end: usize) -> &str {
    let end = end.min(digits.len());
    &digits[start.min(end)..end]
}

fn truncate(masked: String, max: usize) -> String {
    masked.chars().take(max).collect()
}

// =============================================================================
// Formatters
// =============================================================================

/// Masks a CEP as `ddddd-ddd`.
///
/// The dash appears once a sixth digit is typed; digits beyond the eighth
/// are dropped.
pub fn format_postal_code(raw: &str) -> String {
    let digits = digits_only(raw);
    let masked = if digits.len() > 5 {
        format!("{}-{}", span(&digits, 0, 5), span(&digits, 5, 8))
    } else {
        digits
    };
    truncate(masked, POSTAL_CODE_MAX_LEN)
}

/// Masks a CPF progressively as `ddd.ddd.ddd-dd`.
///
/// ```text
/// digits   1..=3   4..=6     7..=9         10+
/// output   ddd     ddd.d     ddd.ddd.d     ddd.ddd.ddd-d
/// ```
pub fn format_tax_id(raw: &str) -> String {
    let digits = digits_only(raw);
    let masked = match digits.len() {
        n if n > 9 => format!(
            "{}.{}.{}-{}",
            span(&digits, 0, 3),
            span(&digits, 3, 6),
            span(&digits, 6, 9),
            span(&digits, 9, 11)
        ),
        n if n > 6 => format!(
            "{}.{}.{}",
            span(&digits, 0, 3),
            span(&digits, 3, 6),
            span(&digits, 6, n)
        ),
        n if n > 3 => format!("{}.{}", span(&digits, 0, 3), span(&digits, 3, n)),
        _ => digits,
    };
    truncate(masked, TAX_ID_MAX_LEN)
}

/// Masks a Brazilian phone number.
///
/// ```text
/// digits   1..=2   3..=6       7..=10            11+
/// output   (dd     (dd) dddd   (dd) dddd-dddd    (dd) ddddd-dddd
/// ```
pub fn format_phone(raw: &str) -> String {
    let digits = digits_only(raw);
    let masked = match digits.len() {
        n if n > 10 => format!(
            "({}) {}-{}",
            span(&digits, 0, 2),
            span(&digits, 2, 7),
            span(&digits, 7, 11)
        ),
        n if n > 6 => format!(
            "({}) {}-{}",
            span(&digits, 0, 2),
            span(&digits, 2, 6),
            span(&digits, 6, n)
        ),
        n if n > 2 => format!("({}) {}", span(&digits, 0, 2), span(&digits, 2, n)),
        n if n > 0 => format!("({digits}"),
        _ => digits,
    };
    truncate(masked, PHONE_MAX_LEN)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("111.444.777-35"), "11144477735");
        assert_eq!(digits_only("abc"), "");
        assert_eq!(digits_only("١٢٣4"), "4"); // non-ASCII digits are stripped
    }

    #[test]
    fn test_format_postal_code() {
        assert_eq!(format_postal_code(""), "");
        assert_eq!(format_postal_code("0131"), "0131");
        assert_eq!(format_postal_code("01310"), "01310");
        assert_eq!(format_postal_code("013101"), "01310-1");
        assert_eq!(format_postal_code("01310100"), "01310-100");
        assert_eq!(format_postal_code("01310-1009999"), "01310-100");
        assert_eq!(format_postal_code("cep: 01310 100"), "01310-100");
    }

    #[test]
    fn test_format_tax_id_progressive() {
        assert_eq!(format_tax_id(""), "");
        assert_eq!(format_tax_id("111"), "111");
        assert_eq!(format_tax_id("1114"), "111.4");
        assert_eq!(format_tax_id("111444"), "111.444");
        assert_eq!(format_tax_id("1114447"), "111.444.7");
        assert_eq!(format_tax_id("111444777"), "111.444.777");
        assert_eq!(format_tax_id("1114447773"), "111.444.777-3");
        assert_eq!(format_tax_id("11144477735"), "111.444.777-35");
        assert_eq!(format_tax_id("111444777350000"), "111.444.777-35");
    }

    #[test]
    fn test_format_phone_progressive() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("119876"), "(11) 9876");
        assert_eq!(format_phone("1198765"), "(11) 9876-5");
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
        assert_eq!(format_phone("1198765432199"), "(11) 98765-4321");
    }

    #[test]
    fn test_masks_are_idempotent() {
        let inputs = [
            "", "1", "12", "123", "1234", "123456", "1234567", "123456789", "1234567890",
            "12345678901", "123456789012345", "(11) 9", "abc-12.3",
        ];
        for mask in [Mask::PostalCode, Mask::TaxId, Mask::Phone] {
            for raw in inputs {
                let once = mask.apply(raw);
                assert_eq!(mask.apply(&once), once, "{mask:?} on {raw:?}");
                assert!(once.len() <= mask.max_len());
            }
        }
    }
}
