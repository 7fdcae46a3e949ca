//! # Error Types
//!
//! Domain-specific error types for cadastro-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  cadastro-core errors (this file)                                      │
//! │  ├── FieldError   - One failed rule on one field (user-facing text)    │
//! │  └── CoreError    - Bad input from outside the form (unknown field)    │
//! │                                                                         │
//! │  cadastro-form errors (separate crate)                                 │
//! │  ├── SubmitError  - Submission lifecycle failures                      │
//! │  └── ConfigError  - Bad configuration values                           │
//! │                                                                         │
//! │  Flow: FieldError → ErrorState → UI shows message under the input      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The `Display` of a [`FieldError`] IS the message shown to the user

use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::types::Field;

// =============================================================================
// Field Error
// =============================================================================

/// A validation failure on a single form field.
///
/// Only the first failing rule of a field is ever reported, so a field
/// carries at most one `FieldError` at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field is empty.
    #[error("{}", .0.required_message())]
    Required(Field),

    /// Full name has a single word.
    #[error("Digite nome e sobrenome")]
    MissingSurname,

    /// CEP digit count is not 8.
    #[error("CEP deve ter 8 dígitos")]
    PostalCodeLength,

    /// CPF digit count is not 11.
    #[error("CPF deve ter 11 dígitos")]
    TaxIdLength,

    /// CPF check digits do not match.
    #[error("CPF inválido")]
    TaxIdChecksum,

    /// Phone has fewer than 10 or more than 11 digits.
    #[error("Telefone inválido")]
    PhoneLength,

    /// E-mail fails the structural `local@domain.tld` check.
    #[error("E-mail inválido")]
    EmailFormat,

    /// Password is not exactly 8 characters long.
    #[error("Senha deve ter exatamente 8 caracteres")]
    PasswordLength,

    #[error("Deve conter letra minúscula")]
    PasswordMissingLowercase,

    #[error("Deve conter letra maiúscula")]
    PasswordMissingUppercase,

    #[error("Deve conter número")]
    PasswordMissingDigit,

    #[error("Deve conter caractere especial")]
    PasswordMissingSpecial,

    /// Password contains an accented Latin letter or ç/Ç.
    #[error("Não pode conter acentos nem ç")]
    PasswordAccent,
}

/// Serialized as the plain message so the UI can render it directly.
impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A field name coming from the UI does not name any form field.
    ///
    /// ## When This Occurs
    /// - The UI sends `"cpf"` instead of `"taxId"`
    /// - A typo in a TypeScript binding that bypassed the generated types
    #[error("Unknown form field: {0}")]
    UnknownField(String),
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_message_depends_on_field() {
        assert_eq!(
            FieldError::Required(Field::FullName).to_string(),
            "Nome completo é obrigatório"
        );
        assert_eq!(
            FieldError::Required(Field::PostalCode).to_string(),
            "CEP é obrigatório"
        );
        assert_eq!(
            FieldError::Required(Field::Password).to_string(),
            "Senha é obrigatória"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FieldError::PostalCodeLength.to_string(), "CEP deve ter 8 dígitos");
        assert_eq!(
            FieldError::PasswordLength.to_string(),
            "Senha deve ter exatamente 8 caracteres"
        );
        assert_eq!(FieldError::PasswordAccent.to_string(), "Não pode conter acentos nem ç");
    }

    #[test]
    fn test_field_error_serializes_as_message() {
        let json = serde_json::to_string(&FieldError::TaxIdChecksum).unwrap();
        assert_eq!(json, "\"CPF inválido\"");
    }

    #[test]
    fn test_unknown_field_message() {
        let err = CoreError::UnknownField("cpf".to_string());
        assert_eq!(err.to_string(), "Unknown form field: cpf");
    }
}
