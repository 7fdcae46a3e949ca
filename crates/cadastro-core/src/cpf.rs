//! # CPF Check Digits
//!
//! Validates the two mod-11 verifier digits embedded in a CPF.
//!
//! ## Algorithm
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  CPF: 1 1 1 4 4 4 7 7 7 │ 3 │ 5                                        │
//! │       ───────────────── │ ─ │ ─                                        │
//! │        base (9 digits)  │ D1│ D2                                       │
//! │                                                                         │
//! │  D1: Σ digit[i] × (10 - i)  for i in 0..9    → 162                      │
//! │      11 - (162 mod 11) = 3                   → D1 = 3  ✓               │
//! │                                                                         │
//! │  D2: Σ digit[i] × (11 - i)  for i in 0..10   → 204                      │
//! │      11 - (204 mod 11) = 5                   → D2 = 5  ✓               │
//! │                                                                         │
//! │  A result of 10 or 11 maps to 0.                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Numbers made of one repeated digit (`000.000.000-00` … `999.999.999-99`)
//! pass the arithmetic but are rejected explicitly.

/// Number of digits in a CPF.
pub const CPF_LEN: usize = 11;

/// Returns `true` if `digits` is an 11-digit CPF with matching check digits.
///
/// Input must be bare digits; anything else (including masked input) is
/// rejected rather than cleaned.
///
/// ## Example
/// ```rust
/// use cadastro_core::cpf::is_valid_cpf;
///
/// assert!(is_valid_cpf("11144477735"));
/// assert!(!is_valid_cpf("11111111111"));
/// assert!(!is_valid_cpf("12345678900"));
/// ```
pub fn is_valid_cpf(digits: &str) -> bool {
    let Some(values) = parse_digits(digits) else {
        return false;
    };

    if values.iter().all(|d| *d == values[0]) {
        return false;
    }

    check_digit(&values[..9]) == values[9] && check_digit(&values[..10]) == values[10]
}

/// Computes both verifier digits for a 9-digit CPF base.
///
/// Returns `None` unless `base` is exactly nine ASCII digits.
///
/// ## Example
/// ```rust
/// use cadastro_core::cpf::check_digits;
///
/// assert_eq!(check_digits("111444777"), Some((3, 5)));
/// ```
pub fn check_digits(base: &str) -> Option<(u32, u32)> {
    if base.len() != 9 || !base.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut values: Vec<u32> = base.bytes().map(|b| u32::from(b - b'0')).collect();
    let first = check_digit(&values);
    values.push(first);
    let second = check_digit(&values);
    Some((first, second))
}

fn parse_digits(digits: &str) -> Option<[u32; CPF_LEN]> {
    if digits.len() != CPF_LEN {
        return None;
    }
    let mut values = [0u32; CPF_LEN];
    for (slot, byte) in values.iter_mut().zip(digits.bytes()) {
        if !byte.is_ascii_digit() {
            return None;
        }
        *slot = u32::from(byte - b'0');
    }
    Some(values)
}

/// Weighted mod-11 digit over `prefix`; weights run from `len + 1` down to 2.
fn check_digit(prefix: &[u32]) -> u32 {
    let top = prefix.len() as u32 + 1;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, d)| d * (top - i as u32))
        .sum();
    match 11 - sum % 11 {
        10 | 11 => 0,
        digit => digit,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
