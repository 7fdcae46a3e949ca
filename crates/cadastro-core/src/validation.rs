//! # Validation Module
//!
//! Field-level validation for the registration form.
//!
//! ## When Validation Runs
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Triggers                                │
//! │                                                                         │
//! │  Keystroke ──► mask ──► FormState                                       │
//! │                             │                                           │
//! │                             ├── field touched? ──► validate_field      │
//! │                             │                                           │
//! │  Blur ──► touch field ──────┴───────────────────► validate_field        │
//! │                                                                         │
//! │  Submit ──► touch all ──► validate_form (every field, no short-circuit) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Within one field the rules run in a fixed order and the first failure
//! wins, so a field reports exactly one message at a time.
//!
//! ## Usage
//! ```rust
//! use cadastro_core::validation::validate_field;
//! use cadastro_core::{Field, FieldError};
//!
//! assert!(validate_field(Field::PostalCode, "01310-100").is_ok());
//! assert_eq!(
//!     validate_field(Field::PostalCode, "0131010"),
//!     Err(FieldError::PostalCodeLength)
//! );
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cpf::{is_valid_cpf, CPF_LEN};
use crate::error::FieldError;
use crate::mask::digits_only;
use crate::types::{ErrorState, Field, FormState};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, FieldError>;

/// Required password length, in characters.
pub const PASSWORD_LEN: usize = 8;

/// Digits in a CEP.
pub const POSTAL_CODE_DIGITS: usize = 8;

/// Symbols accepted as the password's special character.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("static pattern"));

// =============================================================================
// Dispatch
// =============================================================================

/// Validates one field's current value.
pub fn validate_field(field: Field, value: &str) -> ValidationResult<()> {
    match field {
        Field::FullName => validate_full_name(value),
        Field::PostalCode => validate_postal_code(value),
        Field::TaxId => validate_tax_id(value),
        Field::MobilePhone => validate_mobile_phone(value),
        Field::Email => validate_email(value),
        Field::Password => validate_password(value),
    }
}

/// Returns `true` if every field of `form` is valid.
///
/// Every field is checked even after one fails; use
/// [`ErrorState::from_form`] to get the individual messages.
pub fn validate_form(form: &FormState) -> bool {
    ErrorState::from_form(form).is_empty()
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the full name.
///
/// ## Rules
/// - Must not be blank
/// - Must contain at least two words separated by a space
pub fn validate_full_name(value: &str) -> ValidationResult<()> {
    let name = value.trim();

    if name.is_empty() {
        return Err(FieldError::Required(Field::FullName));
    }

    if name.split(' ').count() < 2 {
        return Err(FieldError::MissingSurname);
    }

    Ok(())
}

/// Validates a CEP, masked or not.
pub fn validate_postal_code(value: &str) -> ValidationResult<()> {
    let digits = digits_only(value);

    if digits.is_empty() {
        return Err(FieldError::Required(Field::PostalCode));
    }

    if digits.len() != POSTAL_CODE_DIGITS {
        return Err(FieldError::PostalCodeLength);
    }

    Ok(())
}

/// Validates a CPF, masked or not, including its check digits.
///
/// ## Example
/// ```rust
/// use cadastro_core::validation::validate_tax_id;
/// use cadastro_core::FieldError;
///
/// assert!(validate_tax_id("111.444.777-35").is_ok());
/// assert_eq!(validate_tax_id("111.444.777-36"), Err(FieldError::TaxIdChecksum));
/// ```
pub fn validate_tax_id(value: &str) -> ValidationResult<()> {
    let digits = digits_only(value);

    if digits.is_empty() {
        return Err(FieldError::Required(Field::TaxId));
    }

    if digits.len() != CPF_LEN {
        return Err(FieldError::TaxIdLength);
    }

    if !is_valid_cpf(&digits) {
        return Err(FieldError::TaxIdChecksum);
    }

    Ok(())
}

/// Validates a phone number: area code plus 8 (landline) or 9 (mobile) digits.
pub fn validate_mobile_phone(value: &str) -> ValidationResult<()> {
    let digits = digits_only(value);

    if digits.is_empty() {
        return Err(FieldError::Required(Field::MobilePhone));
    }

    if !(10..=11).contains(&digits.len()) {
        return Err(FieldError::PhoneLength);
    }

    Ok(())
}

/// Structural e-mail check: `local@domain.tld`, no whitespace, one `@`.
///
/// This is deliberately loose; it is not RFC 5322 validation.
pub fn validate_email(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(FieldError::Required(Field::Email));
    }

    if !EMAIL_RE.is_match(value) {
        return Err(FieldError::EmailFormat);
    }

    Ok(())
}

/// Validates the password.
///
/// ## Rules (checked in this order)
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. not empty                       → "Senha é obrigatória"            │
/// │  2. exactly 8 characters            → "Senha deve ter exatamente 8…"   │
/// │  3. has a-z                         → "Deve conter letra minúscula"    │
/// │  4. has A-Z                         → "Deve conter letra maiúscula"    │
/// │  5. has 0-9                         → "Deve conter número"             │
/// │  6. has one of !@#$%^&*(),.?":{}|<> → "Deve conter caractere especial" │
/// │  7. no À-ž, no ç/Ç                  → "Não pode conter acentos nem ç"  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// Length counts UTF-16 code units, as a browser input does. `"Abcdé12!"`
/// is 8 and fails on rule 7; an emoji counts as 2.
pub fn validate_password(value: &str) -> ValidationResult<()> {
    if value.is_empty() {
        return Err(FieldError::Required(Field::Password));
    }

    let checks = PasswordChecklist::evaluate(value);

    if !checks.exact_length {
        return Err(FieldError::PasswordLength);
    }
    if !checks.lowercase {
        return Err(FieldError::PasswordMissingLowercase);
    }
    if !checks.uppercase {
        return Err(FieldError::PasswordMissingUppercase);
    }
    if !checks.digit {
        return Err(FieldError::PasswordMissingDigit);
    }
    if !checks.special {
        return Err(FieldError::PasswordMissingSpecial);
    }
    if !checks.no_accents {
        return Err(FieldError::PasswordAccent);
    }

    Ok(())
}

// =============================================================================
// Password Checklist
// =============================================================================

/// Per-requirement status of a password, for the live checklist under the
/// password input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct PasswordChecklist {
    pub exact_length: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
    pub no_accents: bool,
}

impl PasswordChecklist {
    /// Evaluates every requirement independently.
    ///
    /// Unlike [`validate_password`], nothing short-circuits here: an empty
    /// password satisfies `no_accents` and nothing else.
    pub fn evaluate(password: &str) -> Self {
        PasswordChecklist {
            exact_length: password.encode_utf16().count() == PASSWORD_LEN,
            lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            digit: password.chars().any(|c| c.is_ascii_digit()),
            special: password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
            no_accents: !password.chars().any(is_accented),
        }
    }

    /// True when every requirement is met.
    pub fn all_met(&self) -> bool {
        self.exact_length
            && self.lowercase
            && self.uppercase
            && self.digit
            && self.special
            && self.no_accents
    }
}

/// Latin-1 Supplement and Latin Extended-A letters from `À` to `ž`; the
/// range includes ç/Ç.
fn is_accented(c: char) -> bool {
    matches!(c, 'À'..='ž')
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_full_name() {
        assert!(validate_full_name("Maria Silva").is_ok());
        assert!(validate_full_name("  João da Silva  ").is_ok());

        assert_eq!(
            validate_full_name("   "),
            Err(FieldError::Required(Field::FullName))
        );
        assert_eq!(validate_full_name("Maria"), Err(FieldError::MissingSurname));
        // only the space character separates words
        assert_eq!(validate_full_name("Maria\tSilva"), Err(FieldError::MissingSurname));
    }

    #[test]
    fn test_validate_postal_code() {
        assert!(validate_postal_code("01310100").is_ok());
        assert!(validate_postal_code("01310-100").is_ok());

        assert_eq!(
            validate_postal_code("---"),
            Err(FieldError::Required(Field::PostalCode))
        );
        let err = validate_postal_code("0131010").unwrap_err();
        assert_eq!(err.to_string(), "CEP deve ter 8 dígitos");
    }

    #[test]
    fn test_validate_tax_id() {
        assert!(validate_tax_id("11144477735").is_ok());
        assert!(validate_tax_id("111.444.777-35").is_ok());

        assert_eq!(validate_tax_id(""), Err(FieldError::Required(Field::TaxId)));
        assert_eq!(validate_tax_id("111.444.777-3"), Err(FieldError::TaxIdLength));
        assert_eq!(validate_tax_id("11111111111"), Err(FieldError::TaxIdChecksum));
        assert_eq!(validate_tax_id("12345678900"), Err(FieldError::TaxIdChecksum));
    }

    #[test]
    fn test_validate_mobile_phone() {
        assert!(validate_mobile_phone("(11) 3333-4444").is_ok());
        assert!(validate_mobile_phone("(11) 98765-4321").is_ok());

        assert_eq!(
            validate_mobile_phone("()"),
            Err(FieldError::Required(Field::MobilePhone))
        );
        assert_eq!(validate_mobile_phone("(11) 9876-54"), Err(FieldError::PhoneLength));
        assert_eq!(validate_mobile_phone("119876543210"), Err(FieldError::PhoneLength));
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.c").is_ok());
        assert!(validate_email("maria.silva@exemplo.com.br").is_ok());

        assert_eq!(validate_email(""), Err(FieldError::Required(Field::Email)));
        assert_eq!(validate_email("a@b"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("a b@c.d"), Err(FieldError::EmailFormat));
        assert_eq!(validate_email("a@@b.c"), Err(FieldError::EmailFormat));
        // blank input is not "required": it fails the pattern instead
        assert_eq!(validate_email("  "), Err(FieldError::EmailFormat));
    }

    #[test]
    fn test_validate_password_order() {
        assert!(validate_password("Abcde12!").is_ok());

        assert_eq!(
            validate_password(""),
            Err(FieldError::Required(Field::Password))
        );
        assert_eq!(
            validate_password("Abc123456").unwrap_err().to_string(),
            "Senha deve ter exatamente 8 caracteres"
        );
        assert_eq!(validate_password("ABCDE12!"), Err(FieldError::PasswordMissingLowercase));
        assert_eq!(validate_password("abcde12!"), Err(FieldError::PasswordMissingUppercase));
        assert_eq!(validate_password("Abcdefg!"), Err(FieldError::PasswordMissingDigit));
        assert_eq!(validate_password("Abc12345"), Err(FieldError::PasswordMissingSpecial));
    }

    #[test]
    fn test_validate_password_rejects_accents_last() {
        assert_eq!(
            validate_password("Abcdé12!").unwrap_err().to_string(),
            "Não pode conter acentos nem ç"
        );
        assert_eq!(validate_password("Abcdç12!"), Err(FieldError::PasswordAccent));
        // an earlier rule wins over the accent rule
        assert_eq!(validate_password("ÀBCDE12!"), Err(FieldError::PasswordMissingLowercase));
    }

    #[test]
    fn test_password_length_counts_utf16_units() {
        // 7 ASCII characters plus one astral-plane emoji: 8 scalars, 9 units
        assert_eq!(
            validate_password("Abcde1!\u{1F600}"),
            Err(FieldError::PasswordLength)
        );
        assert!(!PasswordChecklist::evaluate("Abcde1!\u{1F600}").exact_length);
        assert!(PasswordChecklist::evaluate("Abcdé12!").exact_length);
    }

    #[test]
    fn test_password_checklist() {
        let empty = PasswordChecklist::evaluate("");
        assert!(empty.no_accents);
        assert!(!empty.exact_length && !empty.lowercase && !empty.special);

        let good = PasswordChecklist::evaluate("Abcde12!");
        assert!(good.all_met());

        let accented = PasswordChecklist::evaluate("Ção");
        assert!(!accented.no_accents);
        assert!(accented.lowercase);
    }

    #[test]
    fn test_validate_field_dispatch() {
        assert!(validate_field(Field::Email, "a@b.c").is_ok());
        assert_eq!(
            validate_field(Field::Password, ""),
            Err(FieldError::Required(Field::Password))
        );
    }

    #[test]
    fn test_validate_form_checks_every_field() {
        let mut form = FormState {
            full_name: "Maria Silva".to_string(),
            postal_code: "01310-100".to_string(),
            tax_id: "111.444.777-35".to_string(),
            mobile_phone: "(11) 98765-4321".to_string(),
            email: "maria@exemplo.com".to_string(),
            password: "Abcde12!".to_string(),
        };
        assert!(validate_form(&form));

        form.full_name = "Maria".to_string();
        form.password = "abc".to_string();
        assert!(!validate_form(&form));

        let errors = ErrorState::from_form(&form);
        assert_eq!(errors.get(Field::FullName), Some(FieldError::MissingSurname));
        assert_eq!(errors.get(Field::Password), Some(FieldError::PasswordLength));
        assert_eq!(errors.len(), 2);
    }
}
