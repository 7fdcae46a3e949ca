//! # Form Walkthrough
//!
//! Drives the form the way a user would: types each field, leaves it, tries
//! to submit an incomplete form, fixes it, submits, and acknowledges.
//!
//! ## Usage
//! ```bash
//! cargo run -p cadastro-form --bin demo
//!
//! # Faster, failing backend
//! CADASTRO_SUBMIT_DELAY_MS=100 CADASTRO_SIMULATE_FAILURE=1 \
//!     cargo run -p cadastro-form --bin demo
//!
//! # Settings from a file
//! cargo run -p cadastro-form --bin demo -- --config ./cadastro.toml
//! ```

use std::env;
use std::path::PathBuf;

use cadastro_core::{Field, FormState};
use cadastro_form::{init_tracing, FormConfig, FormController, SubmitOutcome};
use tracing::info;

/// What a user types into each field, keystroke by keystroke.
const ENTRIES: &[(Field, &str)] = &[
    (Field::FullName, "Maria Silva"),
    (Field::PostalCode, "01310100"),
    (Field::TaxId, "11144477735"),
    (Field::MobilePhone, "11987654321"),
    (Field::Email, "Maria@Exemplo.com"),
    (Field::Password, "Abcde12!"),
];

/// Feeds `text` one character at a time, like a soft keyboard would.
fn type_into(form: &mut FormController, field: Field, text: &str) {
    let mut typed = form.value(field).to_string();
    for ch in text.chars() {
        typed.push(ch);
        form.handle_change(field, &typed);
        typed = form.value(field).to_string();
    }
    form.handle_blur(field);
}

fn print_outcome(outcome: &SubmitOutcome) {
    let alert = outcome.alert();
    println!("[{}] {}", alert.title, alert.message);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .map(PathBuf::from);

    let config = FormConfig::load(config_path.as_deref())?;
    info!(?config, "Configuration loaded");
    let submitter = config.mock_submitter();

    let mut form = FormController::new();

    // First attempt: only half the form is filled.
    for (field, text) in &ENTRIES[..3] {
        type_into(&mut form, *field, text);
    }
    print_outcome(&form.submit(&submitter).await?);
    for (field, error) in form.errors().iter() {
        println!("  {:<12} {}", field.label(), error);
    }

    // Second attempt: complete the form.
    for (field, text) in &ENTRIES[3..] {
        type_into(&mut form, *field, text);
    }
    let view = form.view();
    println!("can submit: {} ({})", view.can_submit, view.submit_label);
    println!("{}", serde_json::to_string_pretty(&view.password_checklist)?);

    let outcome = form.submit(&submitter).await?;
    print_outcome(&outcome);

    if let SubmitOutcome::Submitted { receipt, .. } = &outcome {
        println!("  receipt {} at {}", receipt.id, receipt.submitted_at);
        form.acknowledge_success();
        println!("  form reset: {}", form.form() == &FormState::default());
    }

    Ok(())
}
