//! Registration use case: the step wizard plus whatever receives the form.

use std::sync::Arc;

use async_trait::async_trait;

use nandi_core::error::Result;
use nandi_core::wizard::{FieldValues, StepWizard, WizardSchema, registration_schema};

/// Message shown after a successful registration.
pub const REGISTRATION_CONFIRMATION: &str = "Registration successful! Welcome to Nandi family.";

/// Receives a completed registration form.
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Handles the submitted values and returns a message for the farmer.
    async fn submit(&self, values: &FieldValues) -> Result<String>;
}

/// Handler that only logs the form.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSubmissionHandler;

#[async_trait]
impl SubmissionHandler for LoggingSubmissionHandler {
    async fn submit(&self, values: &FieldValues) -> Result<String> {
        let payload = serde_json::to_string(values)?;
        tracing::info!(form = %payload, "registration submitted");
        Ok(REGISTRATION_CONFIRMATION.to_string())
    }
}

pub struct RegistrationFlow {
    wizard: StepWizard,
    handler: Arc<dyn SubmissionHandler>,
}

impl RegistrationFlow {
    /// Creates a flow over the farmer registration form.
    pub fn new(handler: Arc<dyn SubmissionHandler>) -> Result<Self> {
        Ok(Self::with_schema(registration_schema()?, handler))
    }

    pub fn with_schema(schema: WizardSchema, handler: Arc<dyn SubmissionHandler>) -> Self {
        Self {
            wizard: StepWizard::new(schema),
            handler,
        }
    }

    pub fn wizard(&self) -> &StepWizard {
        &self.wizard
    }

    /// Field edits and navigation go through the wizard directly.
    pub fn wizard_mut(&mut self) -> &mut StepWizard {
        &mut self.wizard
    }

    /// Submits the wizard and hands the values to the handler.
    ///
    /// Returns `Ok(None)` when the wizard is not ready. The handler runs at
    /// most once per flow because the wizard rejects a second submit with
    /// `AlreadySubmitted`. A handler failure is returned as-is and the
    /// wizard stays terminal.
    pub async fn submit(&mut self) -> Result<Option<String>> {
        let Some(values) = self.wizard.submit()? else {
            return Ok(None);
        };
        let message = self.handler.submit(&values).await?;
        Ok(Some(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nandi_core::NandiError;
    use nandi_core::wizard::{FieldSpec, FieldValue, StepSpec};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        received: Mutex<Vec<FieldValues>>,
    }

    #[async_trait]
    impl SubmissionHandler for RecordingHandler {
        async fn submit(&self, values: &FieldValues) -> Result<String> {
            self.received.lock().unwrap().push(values.clone());
            Ok("stored".to_string())
        }
    }

    struct FailingHandler;

    #[async_trait]
    impl SubmissionHandler for FailingHandler {
        async fn submit(&self, _values: &FieldValues) -> Result<String> {
            Err(NandiError::io("backend unreachable"))
        }
    }

    fn single_step() -> WizardSchema {
        WizardSchema::new(vec![StepSpec::new(
            "Consent",
            vec![FieldSpec::flag("agree", "Agree").required()],
        )])
        .unwrap()
    }

    #[tokio::test]
    async fn test_handler_called_once() {
        let handler = Arc::new(RecordingHandler::default());
        let mut flow = RegistrationFlow::with_schema(single_step(), handler.clone());

        assert_eq!(flow.submit().await.unwrap(), None);
        assert!(handler.received.lock().unwrap().is_empty());

        flow.wizard_mut()
            .update_field(0, "agree", FieldValue::Flag(true))
            .unwrap();
        assert_eq!(flow.submit().await.unwrap().as_deref(), Some("stored"));
        assert!(flow.wizard().is_terminal());

        let err = flow.submit().await.unwrap_err();
        assert!(err.is_already_submitted());

        let received = handler.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert!(received[0].flag("agree"));
    }

    #[tokio::test]
    async fn test_handler_error_propagates() {
        let mut flow = RegistrationFlow::with_schema(single_step(), Arc::new(FailingHandler));
        flow.wizard_mut()
            .update_field(0, "agree", FieldValue::Flag(true))
            .unwrap();

        let err = flow.submit().await.unwrap_err();
        assert!(matches!(err, NandiError::Io { .. }));
        assert!(flow.wizard().is_terminal());
    }

    #[tokio::test]
    async fn test_logging_handler_confirms() {
        let message = LoggingSubmissionHandler
            .submit(&FieldValues::new())
            .await
            .unwrap();
        assert_eq!(message, REGISTRATION_CONFIRMATION);
    }

    #[test]
    fn test_registration_flow_starts_on_first_step() {
        let flow = RegistrationFlow::new(Arc::new(LoggingSubmissionHandler)).unwrap();
        assert_eq!(flow.wizard().current_step(), 0);
        assert_eq!(flow.wizard().total_steps(), 4);
    }
}
