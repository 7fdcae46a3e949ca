//! # Form State
//!
//! Owns the three per-field mappings (values, touched, errors) and the
//! submission lifecycle.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Form Controller Operations                           │
//! │                                                                         │
//! │  UI Event                 Controller Call          State Change         │
//! │  ────────                 ───────────────          ────────────         │
//! │                                                                         │
//! │  Keystroke ─────────────► handle_change() ───────► value = mask(raw)    │
//! │                                                   (+ error if touched)  │
//! │                                                                         │
//! │  Leave input ───────────► handle_blur() ─────────► touched, error       │
//! │                                                                         │
//! │  Press "Enviar" ────────► submit() ──────────────► loading ... outcome  │
//! │                                                                         │
//! │  Press "OK" on success ─► acknowledge_success() ─► everything reset     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submission Lifecycle
//! ```text
//!                    begin_submit()
//!   Idle ───────────────────────────────────► Loading
//!    ▲   (touch all + validate: any error?)      │
//!    │          │ yes                            │ finish_submit()
//!    │          ▼                                ▼
//!    │   Invalid alert, values kept     Ok  ──► Submitted (awaiting ack)
//!    │                                  Err ──► Failed alert ──► Idle
//!    │                                           │
//!    └──────── acknowledge_success() ◄───────────┘
//! ```
//!
//! All mutation happens sequentially in response to discrete UI events, so
//! the controller needs no locking.

use cadastro_core::validation::validate_field;
use cadastro_core::{
    ErrorState, Field, FieldError, FormState, PasswordChecklist, SubmissionReceipt, TouchedState,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::{SubmitError, SubmitResult};
use crate::submit::Submitter;

/// Button text when the form can be sent.
pub const SUBMIT_LABEL_READY: &str = "Enviar";

/// Button text while fields are missing or invalid.
pub const SUBMIT_LABEL_INCOMPLETE: &str = "Preencha todos os campos corretamente";

// =============================================================================
// Alerts & Outcomes
// =============================================================================

/// A blocking dialog the UI must show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: &'static str,
    pub message: &'static str,
}

impl Alert {
    pub const fn validation_failed() -> Self {
        Alert {
            title: "Erro de validação",
            message: "Por favor, corrija os erros destacados antes de enviar.",
        }
    }

    pub const fn submitted() -> Self {
        Alert {
            title: "Sucesso!",
            message: "Seus dados foram enviados com sucesso.",
        }
    }

    pub const fn submission_failed() -> Self {
        Alert {
            title: "Erro",
            message: "Ocorreu um erro ao enviar os dados. Tente novamente.",
        }
    }
}

/// How a submit attempt ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Client-side validation failed; nothing was sent.
    Invalid { alert: Alert },

    /// Sent successfully. The form resets once the user acknowledges.
    Submitted {
        receipt: SubmissionReceipt,
        alert: Alert,
    },

    /// The request failed; values are kept so the user can retry.
    Failed { alert: Alert },
}

impl SubmitOutcome {
    pub fn alert(&self) -> Alert {
        match self {
            SubmitOutcome::Invalid { alert }
            | SubmitOutcome::Submitted { alert, .. }
            | SubmitOutcome::Failed { alert } => *alert,
        }
    }
}

/// Snapshot of a validated form on its way to the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub form: FormState,
}

/// Everything the UI needs to render the form.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormView {
    pub form: FormState,
    pub touched: TouchedState,
    pub errors: ErrorState,
    pub loading: bool,
    pub all_fields_filled: bool,
    pub can_submit: bool,
    pub submit_label: &'static str,
    pub password_visible: bool,
    pub password_checklist: PasswordChecklist,
}

// =============================================================================
// In-flight Guard
// =============================================================================

/// Clears the loading flag when dropped, so a cancelled submission never
/// leaves the button stuck in its spinner state.
struct InFlight<'a>(&'a mut bool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        *self.0 = false;
    }
}

// =============================================================================
// Form Controller
// =============================================================================

/// The registration form's state machine.
///
/// ## Invariants
/// - An error is only ever recorded for one of the six fields
/// - A field's error is replaced on every re-validation, never merged
/// - `loading` is true only between `begin_submit` and `finish_submit`
#[derive(Debug, Clone, Default)]
pub struct FormController {
    form: FormState,
    touched: TouchedState,
    errors: ErrorState,
    loading: bool,
    awaiting_ack: bool,
    password_visible: bool,
}

impl FormController {
    /// Creates a controller with every field empty.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn touched(&self) -> &TouchedState {
        &self.touched
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn value(&self, field: Field) -> &str {
        self.form.get(field)
    }

    /// The field's current error, whether or not it is shown yet.
    pub fn error(&self, field: Field) -> Option<FieldError> {
        self.errors.get(field)
    }

    /// The error to render under the input: only once the field is touched.
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        self.error(field)
            .filter(|_| self.touched.is_touched(field))
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True between a successful submission and its acknowledgment.
    pub fn is_awaiting_ack(&self) -> bool {
        self.awaiting_ack
    }

    pub fn all_fields_filled(&self) -> bool {
        self.form.all_filled()
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.all_fields_filled() && self.errors.is_empty() && !self.loading && !self.awaiting_ack
    }

    pub fn submit_label(&self) -> &'static str {
        if self.all_fields_filled() && self.errors.is_empty() {
            SUBMIT_LABEL_READY
        } else {
            SUBMIT_LABEL_INCOMPLETE
        }
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn password_checklist(&self) -> PasswordChecklist {
        PasswordChecklist::evaluate(&self.form.password)
    }

    /// Builds a render snapshot.
    pub fn view(&self) -> FormView {
        FormView {
            form: self.form.clone(),
            touched: self.touched,
            errors: self.errors,
            loading: self.loading,
            all_fields_filled: self.all_fields_filled(),
            can_submit: self.can_submit(),
            submit_label: self.submit_label(),
            password_visible: self.password_visible,
            password_checklist: self.password_checklist(),
        }
    }

    // -------------------------------------------------------------------------
    // Input events
    // -------------------------------------------------------------------------

    /// Handles a keystroke: stores the (masked) value and, if the field was
    /// already touched, re-validates it immediately.
    pub fn handle_change(&mut self, field: Field, raw: &str) {
        let value = match (field.mask(), field) {
            (Some(mask), _) => mask.apply(raw),
            (None, Field::Email) => raw.to_lowercase(),
            (None, _) => raw.to_string(),
        };

        debug!(field = %field, len = value.chars().count(), "Field changed");
        self.form.set(field, value);

        if self.touched.is_touched(field) {
            self.revalidate(field);
        }
    }

    /// Handles focus leaving a field: marks it touched and validates it.
    pub fn handle_blur(&mut self, field: Field) {
        debug!(field = %field, "Field blurred");
        self.touched.touch(field);
        self.revalidate(field);
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    fn revalidate(&mut self, field: Field) {
        let result = validate_field(field, self.form.get(field));
        if let Err(error) = &result {
            debug!(field = %field, %error, "Field invalid");
        }
        self.errors.record(field, result);
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Starts a submission.
    ///
    /// Marks every field touched and re-validates all of them. On any error
    /// the values are left as they are and `SubmitError::Invalid` is
    /// returned; otherwise `loading` is set and a snapshot is handed back for
    /// the submitter.
    pub fn begin_submit(&mut self) -> SubmitResult<PendingSubmission> {
        if self.loading {
            return Err(SubmitError::InFlight);
        }
        if self.awaiting_ack {
            return Err(SubmitError::AwaitingAck);
        }

        self.touched.touch_all();
        self.errors = ErrorState::from_form(&self.form);

        if !self.errors.is_empty() {
            let count = self.errors.len();
            warn!(invalid_fields = count, "Submission blocked by validation");
            return Err(SubmitError::Invalid { count });
        }

        info!("Submitting form");
        self.loading = true;
        Ok(PendingSubmission {
            form: self.form.clone(),
        })
    }

    /// Completes a submission started by [`begin_submit`](Self::begin_submit).
    ///
    /// `loading` is cleared whatever the result.
    pub fn finish_submit(&mut self, result: SubmitResult<SubmissionReceipt>) -> SubmitOutcome {
        self.loading = false;

        match result {
            Ok(receipt) => {
                info!(receipt_id = %receipt.id, "Form submitted");
                self.awaiting_ack = true;
                SubmitOutcome::Submitted {
                    receipt,
                    alert: Alert::submitted(),
                }
            }
            Err(error) => {
                warn!(%error, "Form submission failed");
                SubmitOutcome::Failed {
                    alert: Alert::submission_failed(),
                }
            }
        }
    }

    /// Runs the whole submit flow against `submitter`.
    ///
    /// Validation failures resolve immediately to [`SubmitOutcome::Invalid`]
    /// without calling the submitter. Errors are [`SubmitError::InFlight`]
    /// and [`SubmitError::AwaitingAck`].
    pub async fn submit(&mut self, submitter: &dyn Submitter) -> SubmitResult<SubmitOutcome> {
        let pending = match self.begin_submit() {
            Ok(pending) => pending,
            Err(SubmitError::Invalid { .. }) => {
                return Ok(SubmitOutcome::Invalid {
                    alert: Alert::validation_failed(),
                })
            }
            Err(error) => return Err(error),
        };

        let result = {
            let _in_flight = InFlight(&mut self.loading);
            submitter.submit(&pending.form).await
        };

        Ok(self.finish_submit(result))
    }

    /// Handles "OK" on the success alert: resets values, touched and errors.
    ///
    /// Returns `false` (and changes nothing) if there is no successful
    /// submission waiting for acknowledgment.
    pub fn acknowledge_success(&mut self) -> bool {
        if !self.awaiting_ack {
            return false;
        }

        info!("Resetting form after successful submission");
        self.form.reset();
        self.touched.clear();
        self.errors.clear();
        self.awaiting_ack = false;
        true
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
