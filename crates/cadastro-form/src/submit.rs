//! # Submission
//!
//! The asynchronous seam between the form and whatever receives the data.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FormController::submit                                                 │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  dyn Submitter ──► MockSubmitter: sleep(delay) ──► Ok(receipt)          │
//! │                                               └──► Err(Simulated)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no real backend: [`MockSubmitter`] stands in for the remote call
//! with a fixed delay. There is no retry and no timeout beyond that delay.

use std::time::Duration;

use async_trait::async_trait;
use cadastro_core::{FormState, SubmissionReceipt};
use tracing::debug;

use crate::error::{SubmitError, SubmitResult};

/// Default simulated request latency.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1000);

/// Receives a validated form.
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Sends the form and returns a receipt on success.
    async fn submit(&self, form: &FormState) -> SubmitResult<SubmissionReceipt>;
}

/// Fake backend that waits a fixed delay and then succeeds (or fails, when
/// configured to).
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    delay: Duration,
    fail: bool,
}

impl MockSubmitter {
    /// Creates a submitter that succeeds after `delay`.
    pub fn new(delay: Duration) -> Self {
        MockSubmitter { delay, fail: false }
    }

    /// Creates a submitter that fails after `delay`.
    pub fn failing(delay: Duration) -> Self {
        MockSubmitter { delay, fail: true }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

#[async_trait]
impl Submitter for MockSubmitter {
    async fn submit(&self, _form: &FormState) -> SubmitResult<SubmissionReceipt> {
        debug!(delay_ms = self.delay.as_millis() as u64, "Simulating remote submission");
        tokio::time::sleep(self.delay).await;

        if self.fail {
            return Err(SubmitError::Simulated);
        }

        Ok(SubmissionReceipt::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn test_mock_submitter_waits_then_succeeds() {
        let submitter = MockSubmitter::default();
        let start = Instant::now();

        let receipt = submitter.submit(&FormState::new()).await.unwrap();

        assert!(start.elapsed() >= DEFAULT_SUBMIT_DELAY);
        assert!(!receipt.id.is_nil());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failing_mock_submitter() {
        let submitter = MockSubmitter::failing(Duration::from_millis(10));

        let result = submitter.submit(&FormState::new()).await;

        assert_eq!(result, Err(SubmitError::Simulated));
    }
}
