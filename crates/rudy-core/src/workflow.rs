//! Waitlist Submission Workflow
//!
//! ```text
//!            begin_submit            finish(Ok)
//!   Idle ────────────────▶ Submitting ─────────▶ Succeeded (form cleared)
//!     ▲                        │
//!     │                        │ finish(Err)
//!     └── next begin_submit ◀──┴──────────────▶ Failed (form kept)
//! ```
//!
//! The page only observes two things: whether a request is pending and the
//! message to display. Both are derived from [`SubmissionState`].

use thiserror::Error;

use crate::client::ApiClient;
use crate::error::{ApiError, ValidationError};
use crate::model::{FormField, WaitlistForm, WaitlistReceipt};

/// Shown after a successful submission
pub const THANK_YOU_MESSAGE: &str = "Thank you! Your early access request has been submitted. \
     We'll invite you to try Rudy as soon as possible.";

/// Submit button text when idle
pub const SUBMIT_LABEL: &str = "Request Early Access";

/// Submit button text while the request is in flight
pub const PENDING_LABEL: &str = "Submitting...";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(String),
    Failed(String),
}

/// Styling hint for the status banner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageTone {
    Success,
    Error,
}

impl MessageTone {
    /// Thank-you messages are green, anything else is red
    pub fn of(message: &str) -> Self {
        if message.contains("Thank you") {
            Self::Success
        } else {
            Self::Error
        }
    }

    pub const fn css_class(self) -> &'static str {
        match self {
            Self::Success => "bg-green-100 text-green-700",
            Self::Error => "bg-red-100 text-red-700",
        }
    }
}

/// Reasons `begin_submit` refuses to start a request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    #[error("a submission is already in progress")]
    AlreadySubmitting,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Form contents plus submission status for one page visit
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WaitlistWorkflow {
    form: WaitlistForm,
    state: SubmissionState,
}

impl WaitlistWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: FormField) -> &str {
        self.form.get(field)
    }

    /// Input change handler: update the field named by the input
    pub fn update(&mut self, name: &str, value: impl Into<String>) {
        if !self.form.set_by_name(name, value) {
            tracing::debug!(name, "ignoring change for unknown waitlist field");
        }
    }

    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    pub fn message(&self) -> Option<&str> {
        match &self.state {
            SubmissionState::Succeeded(msg) | SubmissionState::Failed(msg) => Some(msg),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        }
    }

    pub fn tone(&self) -> Option<MessageTone> {
        self.message().map(MessageTone::of)
    }

    pub const fn button_label(&self) -> &'static str {
        if self.is_submitting() { PENDING_LABEL } else { SUBMIT_LABEL }
    }

    /// Enter `Submitting` and return the form snapshot to send.
    ///
    /// Any previous message is cleared. Invalid forms never leave the page.
    pub fn begin_submit(&mut self) -> Result<WaitlistForm, WorkflowError> {
        if self.is_submitting() {
            return Err(WorkflowError::AlreadySubmitting);
        }
        if let Err(err) = self.form.validate() {
            tracing::debug!(error = %err, "waitlist form rejected");
            self.state = SubmissionState::Failed(err.user_message().to_string());
            return Err(err.into());
        }
        self.state = SubmissionState::Submitting;
        Ok(self.form.clone())
    }

    /// Apply the outcome of the request started by `begin_submit`
    pub fn finish(&mut self, outcome: Result<WaitlistReceipt, ApiError>) {
        match outcome {
            Ok(receipt) => {
                if !receipt.success {
                    tracing::warn!("waitlist endpoint answered without success flag");
                }
                self.form.clear();
                self.state = SubmissionState::Succeeded(THANK_YOU_MESSAGE.to_string());
            }
            Err(err) => {
                tracing::warn!(error = %err, "waitlist submission failed");
                self.state = SubmissionState::Failed(err.user_message());
            }
        }
    }

    /// Run one full submission against `client`
    pub async fn run<C: ApiClient + ?Sized>(&mut self, client: &C) -> Result<(), WorkflowError> {
        let form = self.begin_submit()?;
        let outcome = client.join_waitlist(&form).await;
        self.finish(outcome);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use serde_json::{Value, json};

    use super::*;
    use crate::client::MockApiClient;
    use crate::error::{GENERIC_FAILURE_MESSAGE, Result};

    fn filled() -> WaitlistWorkflow {
        let mut workflow = WaitlistWorkflow::new();
        workflow.update("name", "Ada Lovelace");
        workflow.update("email", "ada@example.com");
        workflow.update("company", "Analytical Engines");
        workflow.update("account_spent", "10000");
        workflow
    }

    /// Always fails with a fixed error
    struct FailingClient {
        detail: Option<&'static str>,
    }

    #[async_trait(?Send)]
    impl ApiClient for FailingClient {
        async fn get(&self, _url: &str) -> Result<Value> {
            Ok(json!({}))
        }

        async fn post(&self, _url: &str, _body: &Value) -> Result<Value> {
            Err(ApiError::Response {
                status: 400,
                detail: self.detail.map(str::to_string),
            })
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[tokio::test]
    async fn test_successful_submission_clears_form() {
        let client = MockApiClient::default().with_latency(Duration::ZERO);
        let mut workflow = filled();

        workflow.run(&client).await.unwrap();

        let message = workflow.message().unwrap();
        assert!(message.contains("Thank you"));
        assert_eq!(workflow.tone(), Some(MessageTone::Success));
        assert!(!workflow.is_submitting());
        for field in FormField::ALL {
            assert!(workflow.value(field).is_empty(), "{} not cleared", field.as_str());
        }
    }

    #[test]
    fn test_pending_state() {
        let mut workflow = filled();
        assert_eq!(workflow.button_label(), SUBMIT_LABEL);

        let snapshot = workflow.begin_submit().unwrap();
        assert_eq!(snapshot.name, "Ada Lovelace");
        assert!(workflow.is_submitting());
        assert_eq!(workflow.button_label(), PENDING_LABEL);
        assert_eq!(workflow.message(), None);

        assert_eq!(workflow.begin_submit(), Err(WorkflowError::AlreadySubmitting));
        assert!(workflow.is_submitting());
    }

    #[test]
    fn test_new_submit_clears_previous_message() {
        let mut workflow = filled();
        workflow.begin_submit().unwrap();
        workflow.finish(Err(ApiError::Network("offline".into())));
        assert!(workflow.message().is_some());

        workflow.begin_submit().unwrap();
        assert_eq!(workflow.message(), None);
    }

    #[test]
    fn test_required_fields_block_submission() {
        let mut workflow = WaitlistWorkflow::new();
        workflow.update("email", "ada@example.com");
        assert_eq!(
            workflow.begin_submit(),
            Err(WorkflowError::Invalid(ValidationError::MissingName))
        );
        assert!(!workflow.is_submitting());

        let mut workflow = WaitlistWorkflow::new();
        workflow.update("name", "Ada");
        assert_eq!(
            workflow.begin_submit(),
            Err(WorkflowError::Invalid(ValidationError::MissingEmail))
        );
        assert_eq!(workflow.tone(), Some(MessageTone::Error));
        assert_eq!(workflow.value(FormField::Name), "Ada");
    }

    #[test]
    fn test_dotless_domain_is_submitted() {
        let mut workflow = filled();
        workflow.update("email", "ada@localhost");

        let snapshot = workflow.begin_submit().unwrap();
        assert_eq!(snapshot.email, "ada@localhost");
        assert!(workflow.is_submitting());
    }

    #[test]
    fn test_malformed_email_blocks_submission() {
        let mut workflow = filled();
        workflow.update("email", "ada@example.");

        assert_eq!(
            workflow.begin_submit(),
            Err(WorkflowError::Invalid(ValidationError::InvalidEmail("ada@example.".into())))
        );
        assert_eq!(workflow.message(), Some("Please enter a valid email address."));
    }

    #[tokio::test]
    async fn test_failure_shows_server_detail_and_keeps_form() {
        let client = FailingClient { detail: Some("This email is already on the waiting list.") };
        let mut workflow = filled();

        workflow.run(&client).await.unwrap();

        assert_eq!(workflow.message(), Some("This email is already on the waiting list."));
        assert_eq!(workflow.tone(), Some(MessageTone::Error));
        assert!(!workflow.is_submitting());
        assert_eq!(workflow.value(FormField::Email), "ada@example.com");
    }

    #[tokio::test]
    async fn test_failure_without_detail_is_generic() {
        let client = FailingClient { detail: None };
        let mut workflow = filled();

        workflow.run(&client).await.unwrap();

        assert_eq!(workflow.message(), Some(GENERIC_FAILURE_MESSAGE));
        assert_eq!(workflow.button_label(), SUBMIT_LABEL);
    }

    #[test]
    fn test_tone_follows_message_text() {
        assert_eq!(MessageTone::of(THANK_YOU_MESSAGE), MessageTone::Success);
        assert_eq!(MessageTone::of("Nope"), MessageTone::Error);
    }
}
