use crate::domain::model::{ContactField, ContactForm, SubmissionStatus};
use crate::domain::ports::BackendApi;
use crate::utils::error::{Result, SubmitError};

/// Contact form fields plus the status of the last submission.
///
/// The view-model does not guard against re-entrant submits. Callers must
/// not submit while [`is_busy`](Self::is_busy) is true (the page disables
/// its send button for that).
#[derive(Debug, Clone, Default)]
pub struct ContactFormViewModel {
    form: ContactForm,
    status: SubmissionStatus,
}

impl ContactFormViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_loading()
    }

    /// Set one field. A settled status (success / error) goes back to idle.
    pub fn update_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.form.set(field, value);
        if self.status.is_settled() {
            self.status = SubmissionStatus::Idle;
        }
    }

    pub fn update_field_by_name(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let field: ContactField = name.parse()?;
        self.update_field(field, value);
        Ok(())
    }

    /// First phase of a submit: status goes to loading and the payload is
    /// snapshotted.
    pub fn begin_submit(&mut self) -> ContactForm {
        self.status = SubmissionStatus::Loading;
        self.form.clone()
    }

    /// Second phase: map the request outcome onto the status.
    pub fn finish_submit(
        &mut self,
        outcome: std::result::Result<(), SubmitError>,
    ) -> std::result::Result<(), SubmitError> {
        match outcome {
            Ok(()) => {
                tracing::info!("Contact message sent");
                self.status = SubmissionStatus::Success(SubmissionStatus::THANKS.to_string());
                self.form.clear();
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Contact submission failed: {}", e);
                self.status = SubmissionStatus::Error(e.user_message().to_string());
                Err(e)
            }
        }
    }

    pub async fn submit<A: BackendApi + ?Sized>(
        &mut self,
        api: &A,
    ) -> std::result::Result<(), SubmitError> {
        let payload = self.begin_submit();
        let outcome = api.submit_contact(&payload).await;
        self.finish_submit(outcome)
    }
}
