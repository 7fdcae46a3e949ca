//! # cadastro-form
//!
//! Orchestration layer for the registration form: turns UI events into
//! masked values, validation results and a submission lifecycle.
//!
//! ## Module Organization
//! ```text
//! cadastro_form/
//! ├── lib.rs          ◄─── You are here (re-exports, logging setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── form.rs     ◄─── FormController, alerts, outcomes
//! │   └── config.rs   ◄─── FormConfig (file + env)
//! ├── submit.rs       ◄─── Submitter trait, MockSubmitter
//! ├── error.rs        ◄─── SubmitError, ConfigError
//! └── bin/demo.rs     ◄─── Scripted walkthrough
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use cadastro_core::Field;
//! use cadastro_form::{FormConfig, FormController, SubmitOutcome};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FormConfig::load(None)?;
//! let submitter = config.mock_submitter();
//! let mut form = FormController::new();
//!
//! form.handle_change(Field::TaxId, "11144477735");
//! form.handle_blur(Field::TaxId);
//! assert_eq!(form.value(Field::TaxId), "111.444.777-35");
//!
//! if let SubmitOutcome::Invalid { alert } = form.submit(&submitter).await? {
//!     println!("{}: {}", alert.title, alert.message);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod state;
pub mod submit;

use tracing_subscriber::EnvFilter;

pub use error::{ConfigError, SubmitError, SubmitResult};
pub use state::{Alert, FormConfig, FormController, FormView, SubmitOutcome};
pub use submit::{MockSubmitter, Submitter};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every change/blur event
/// - `RUST_LOG=cadastro_form=trace` - Trace this crate only
/// - Default: INFO, DEBUG for the cadastro crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,cadastro_form=debug,cadastro_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
