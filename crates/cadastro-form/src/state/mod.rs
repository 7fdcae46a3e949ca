//! # State Module
//!
//! Form state and configuration.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │       FormController         │   │        FormConfig            │   │
//! │  │                              │   │                              │   │
//! │  │  FormState    (values)       │   │  submit_delay_ms             │   │
//! │  │  TouchedState (gates errors) │   │  simulate_failure            │   │
//! │  │  ErrorState   (messages)     │   │                              │   │
//! │  │  loading / awaiting ack      │   │  Read-only after load        │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod form;

pub use config::{FormConfig, ENV_SIMULATE_FAILURE, ENV_SUBMIT_DELAY_MS};
pub use form::{
    Alert, FormController, FormView, PendingSubmission, SubmitOutcome, SUBMIT_LABEL_INCOMPLETE,
    SUBMIT_LABEL_READY,
};
