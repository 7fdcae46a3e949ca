//! # Domain Types
//!
//! Core domain types used throughout the registration form.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   FormState     │   │  TouchedState   │   │   ErrorState    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  full_name      │   │  full_name      │   │  full_name      │       │
//! │  │  postal_code    │   │  postal_code    │   │  postal_code    │       │
//! │  │  ...  String    │   │  ...  bool      │   │  ... FieldError?│       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           ▲                     ▲                     ▲                 │
//! │           └──────────── indexed by Field ─────────────┘                 │
//! │                                                                         │
//! │  Field: FullName │ PostalCode │ TaxId │ MobilePhone │ Email │ Password  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why Structs Instead of Maps?
//! Every state type has exactly one slot per [`Field`], so an error can never
//! be recorded for a field the form does not have, and a typo in a field
//! name is a compile error rather than a silently ignored key.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, FieldError};
use crate::mask::Mask;

// =============================================================================
// Field
// =============================================================================

/// One of the six inputs of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FullName,
    PostalCode,
    TaxId,
    MobilePhone,
    Email,
    Password,
}

impl Field {
    /// All fields in the order they appear on screen.
    pub const ALL: [Field; 6] = [
        Field::FullName,
        Field::PostalCode,
        Field::TaxId,
        Field::MobilePhone,
        Field::Email,
        Field::Password,
    ];

    /// The camelCase name used by the UI layer.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::FullName => "fullName",
            Field::PostalCode => "postalCode",
            Field::TaxId => "taxId",
            Field::MobilePhone => "mobilePhone",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Label rendered above the input.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::FullName => "Nome completo",
            Field::PostalCode => "CEP",
            Field::TaxId => "CPF",
            Field::MobilePhone => "Telefone celular",
            Field::Email => "E-mail",
            Field::Password => "Senha (8 caracteres)",
        }
    }

    /// Placeholder shown while the input is empty.
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Field::FullName => "Ex: João Silva",
            Field::PostalCode => "12345-678",
            Field::TaxId => "123.456.789-01",
            Field::MobilePhone => "(99) 99999-9999",
            Field::Email => "email@exemplo.com",
            Field::Password => "Sua senha",
        }
    }

    /// Maximum number of characters the input accepts, for masked fields.
    pub const fn max_length(&self) -> Option<usize> {
        match self.mask() {
            Some(mask) => Some(mask.max_len()),
            None => None,
        }
    }

    /// Soft keyboard the UI should open for this field.
    pub const fn keyboard(&self) -> Keyboard {
        match self {
            Field::PostalCode | Field::TaxId => Keyboard::Numeric,
            Field::MobilePhone => Keyboard::PhonePad,
            Field::Email => Keyboard::EmailAddress,
            Field::FullName | Field::Password => Keyboard::Default,
        }
    }

    /// Input mask applied on every keystroke, if any.
    pub const fn mask(&self) -> Option<Mask> {
        match self {
            Field::PostalCode => Some(Mask::PostalCode),
            Field::TaxId => Some(Mask::TaxId),
            Field::MobilePhone => Some(Mask::Phone),
            _ => None,
        }
    }

    /// Message used when the field is left empty.
    pub const fn required_message(&self) -> &'static str {
        match self {
            Field::FullName => "Nome completo é obrigatório",
            Field::PostalCode => "CEP é obrigatório",
            Field::TaxId => "CPF é obrigatório",
            Field::MobilePhone => "Telefone é obrigatório",
            Field::Email => "E-mail é obrigatório",
            Field::Password => "Senha é obrigatória",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}

/// Soft keyboard hint for an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum Keyboard {
    Default,
    Numeric,
    PhonePad,
    EmailAddress,
}

// =============================================================================
// Form State
// =============================================================================

/// Current value of every input, as displayed (masked fields hold the mask).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub full_name: String,
    pub postal_code: String,
    pub tax_id: String,
    pub mobile_phone: String,
    pub email: String,
    pub password: String,
}

impl FormState {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::PostalCode => &self.postal_code,
            Field::TaxId => &self.tax_id,
            Field::MobilePhone => &self.mobile_phone,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    /// Replaces the value of a field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::FullName => &mut self.full_name,
            Field::PostalCode => &mut self.postal_code,
            Field::TaxId => &mut self.tax_id,
            Field::MobilePhone => &mut self.mobile_phone,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }

    /// Iterates `(field, value)` pairs in screen order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// True when every value is non-blank after trimming.
    pub fn all_filled(&self) -> bool {
        self.iter().all(|(_, value)| !value.trim().is_empty())
    }

    /// Empties every field.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Touched State
// =============================================================================

/// Which fields have lost focus at least once.
///
/// Errors are computed for untouched fields too, but only shown once the
/// field is touched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TouchedState {
    pub full_name: bool,
    pub postal_code: bool,
    pub tax_id: bool,
    pub mobile_phone: bool,
    pub email: bool,
    pub password: bool,
}

impl TouchedState {
    fn slot_mut(&mut self, field: Field) -> &mut bool {
        match field {
            Field::FullName => &mut self.full_name,
            Field::PostalCode => &mut self.postal_code,
            Field::TaxId => &mut self.tax_id,
            Field::MobilePhone => &mut self.mobile_phone,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::FullName => self.full_name,
            Field::PostalCode => self.postal_code,
            Field::TaxId => self.tax_id,
            Field::MobilePhone => self.mobile_phone,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    pub fn touch(&mut self, field: Field) {
        *self.slot_mut(field) = true;
    }

    pub fn touch_all(&mut self) {
        for field in Field::ALL {
            self.touch(field);
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// =============================================================================
// Error State
// =============================================================================

/// The current error of every field; `None` means the field has no error.
///
/// ## Replace, Never Merge
/// [`ErrorState::record`] overwrites a field's slot with the result of its
/// latest validation, so a fixed field loses its old error immediately.
///
/// ## Serialization
/// Serialized as a map containing only failing fields:
/// ```json
/// { "taxId": "CPF inválido", "password": "Deve conter número" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ErrorState {
    full_name: Option<FieldError>,
    postal_code: Option<FieldError>,
    tax_id: Option<FieldError>,
    mobile_phone: Option<FieldError>,
    email: Option<FieldError>,
    password: Option<FieldError>,
}

impl ErrorState {
    /// Creates an error state with no errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates every field of `form`, without short-circuiting.
    pub fn from_form(form: &FormState) -> Self {
        let mut errors = Self::default();
        for (field, value) in form.iter() {
            errors.record(field, crate::validation::validate_field(field, value));
        }
        errors
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::FullName => &mut self.full_name,
            Field::PostalCode => &mut self.postal_code,
            Field::TaxId => &mut self.tax_id,
            Field::MobilePhone => &mut self.mobile_phone,
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Returns the current error of a field.
    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::FullName => self.full_name,
            Field::PostalCode => self.postal_code,
            Field::TaxId => self.tax_id,
            Field::MobilePhone => self.mobile_phone,
            Field::Email => self.email,
            Field::Password => self.password,
        }
    }

    /// Replaces a field's error with the outcome of its latest validation.
    pub fn record(&mut self, field: Field, result: Result<(), FieldError>) {
        *self.slot_mut(field) = result.err();
    }

    pub fn set(&mut self, field: Field, error: FieldError) {
        *self.slot_mut(field) = Some(error);
    }

    /// Iterates over the fields that currently have an error.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(move |field| self.get(field).map(|error| (field, error)))
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl Serialize for ErrorState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.as_str(), &error)?;
        }
        map.end()
    }
}

// =============================================================================
// Submission Receipt
// =============================================================================

/// Proof that a submission was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    /// Unique identifier (UUID v4).
    #[ts(as = "String")]
    pub id: Uuid,

    /// When the submission completed.
    #[ts(as = "String")]
    pub submitted_at: DateTime<Utc>,
}

impl SubmissionReceipt {
    /// Creates a receipt stamped with a fresh id and the current time.
    pub fn new() -> Self {
        SubmissionReceipt {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }
}

impl Default for SubmissionReceipt {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> FormState {
        FormState {
            full_name: "Maria Silva".to_string(),
            postal_code: "01310-100".to_string(),
            tax_id: "111.444.777-35".to_string(),
            mobile_phone: "(11) 98765-4321".to_string(),
            email: "maria@exemplo.com".to_string(),
            password: "Abcde12!".to_string(),
        }
    }

    #[test]
    fn test_field_round_trips_through_name() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>().unwrap(), field);
        }
        assert!(matches!("cpf".parse::<Field>(), Err(CoreError::UnknownField(_))));
    }

    #[test]
    fn test_field_metadata() {
        assert_eq!(Field::PostalCode.max_length(), Some(9));
        assert_eq!(Field::TaxId.max_length(), Some(14));
        assert_eq!(Field::MobilePhone.max_length(), Some(16));
        assert_eq!(Field::Email.max_length(), None);
        assert_eq!(Field::MobilePhone.keyboard(), Keyboard::PhonePad);
        assert_eq!(Field::TaxId.placeholder(), "123.456.789-01");
    }

    #[test]
    fn test_form_state_accessors() {
        let mut form = FormState::new();
        form.set(Field::Email, "a@b.c");
        assert_eq!(form.get(Field::Email), "a@b.c");
        assert_eq!(form.email, "a@b.c");
        assert_eq!(form.get(Field::Password), "");
    }

    #[test]
    fn test_all_filled_ignores_whitespace_only() {
        let mut form = filled_form();
        assert!(form.all_filled());

        form.set(Field::FullName, "   ");
        assert!(!form.all_filled());

        form.reset();
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn test_touched_state() {
        let mut touched = TouchedState::default();
        assert!(!touched.is_touched(Field::TaxId));

        touched.touch(Field::TaxId);
        assert!(touched.is_touched(Field::TaxId));
        assert!(!touched.is_touched(Field::Email));

        touched.touch_all();
        assert!(Field::ALL.iter().all(|f| touched.is_touched(*f)));

        touched.clear();
        assert_eq!(touched, TouchedState::default());
    }

    #[test]
    fn test_error_state_record_replaces() {
        let mut errors = ErrorState::new();
        errors.record(Field::TaxId, Err(FieldError::TaxIdLength));
        assert_eq!(errors.get(Field::TaxId), Some(FieldError::TaxIdLength));

        errors.record(Field::TaxId, Err(FieldError::TaxIdChecksum));
        assert_eq!(errors.get(Field::TaxId), Some(FieldError::TaxIdChecksum));
        assert_eq!(errors.len(), 1);

        errors.record(Field::TaxId, Ok(()));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_error_state_from_form() {
        assert!(ErrorState::from_form(&filled_form()).is_empty());

        let errors = ErrorState::from_form(&FormState::new());
        assert_eq!(errors.len(), 6);
        assert_eq!(
            errors.get(Field::Email),
            Some(FieldError::Required(Field::Email))
        );
    }

    #[test]
    fn test_error_state_serializes_present_entries_only() {
        let mut errors = ErrorState::new();
        errors.set(Field::PostalCode, FieldError::PostalCodeLength);

        let json = serde_json::to_value(errors).unwrap();
        assert_eq!(json, serde_json::json!({ "postalCode": "CEP deve ter 8 dígitos" }));
    }

    #[test]
    fn test_form_state_serializes_camel_case() {
        let json = serde_json::to_value(filled_form()).unwrap();
        assert_eq!(json["taxId"], "111.444.777-35");
        assert_eq!(json["mobilePhone"], "(11) 98765-4321");
    }
}
