//! # cadastro-core: Pure Form Logic
//!
//! This crate is the **heart** of the registration form. It contains the
//! input masks, the field validators and the CPF checksum as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cadastro Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Form UI (any renderer)                       │   │
//! │  │   inputs ──► onChange / onBlur ──► render errors ──► Enviar     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              cadastro-form (FormController)                     │   │
//! │  │   touched / errors bookkeeping, submit lifecycle, config        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ cadastro-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   mask    │  │    cpf    │  │ validation│  │   │
//! │  │   │ FormState │  │ CEP / CPF │  │  mod-11   │  │  per-field│  │   │
//! │  │   │ErrorState │  │  phone    │  │  digits   │  │   rules   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO TIMERS • NO LOGGING • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Field, FormState, TouchedState, ErrorState, receipts
//! - [`mask`] - Live input masks for CEP, CPF and phone
//! - [`cpf`] - CPF check digit algorithm
//! - [`validation`] - Per-field rules and whole-form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use cadastro_core::mask::format_tax_id;
//! use cadastro_core::validation::validate_field;
//! use cadastro_core::Field;
//!
//! let masked = format_tax_id("11144477735");
//! assert_eq!(masked, "111.444.777-35");
//! assert!(validate_field(Field::TaxId, &masked).is_ok());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cpf;
pub mod error;
pub mod mask;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, FieldError};
pub use mask::Mask;
pub use types::*;
pub use validation::{validate_field, validate_form, PasswordChecklist};
