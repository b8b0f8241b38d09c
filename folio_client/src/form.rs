use tracing::{debug, warn};

use crate::api::{ContactApi, ContactApiResponse, ContactForm};

const SUCCESS_FALLBACK: &str = "Thank you for your message! I'll get back to you within 24 hours.";
const FAILURE_FALLBACK: &str = "Failed to send message. Please try again.";
const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success {
        message: String,
    },
    Error {
        message: String,
    },
}

impl SubmissionStatus {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success { message } | Self::Error { message } => Some(message),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Holds the contact form fields and the state of the last submission.
#[derive(Debug)]
pub struct ContactFormController<Api> {
    api: Api,
    form: ContactForm,
    status: SubmissionStatus,
}

impl<Api: ContactApi> ContactFormController<Api> {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            form: ContactForm::default(),
            status: SubmissionStatus::Idle,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    /// Send the current form to the backend.
    ///
    /// On success all fields are cleared. The status is never left at
    /// [`SubmissionStatus::Submitting`].
    pub async fn submit(&mut self) -> &SubmissionStatus {
        let form = self.begin();
        let result = self.api.submit(&form).await;
        self.finish(result)
    }

    /// First half of [`submit`](Self::submit): switches to
    /// [`SubmissionStatus::Submitting`] and returns the fields to send.
    ///
    /// Must be followed by [`finish`](Self::finish) with the outcome of the
    /// request.
    pub fn begin(&mut self) -> ContactForm {
        self.status = SubmissionStatus::Submitting;
        self.form.clone()
    }

    /// Second half of [`submit`](Self::submit): records the outcome of the
    /// request started by [`begin`](Self::begin).
    pub fn finish(&mut self, result: anyhow::Result<ContactApiResponse>) -> &SubmissionStatus {
        self.status = match result {
            Ok(response) if response.is_success() => {
                debug!(status = response.status, "contact form submitted");
                self.form = ContactForm::default();
                SubmissionStatus::Success {
                    message: response.message.unwrap_or_else(|| SUCCESS_FALLBACK.into()),
                }
            }
            Ok(response) => {
                debug!(status = response.status, error = ?response.error, "contact form rejected");
                SubmissionStatus::Error {
                    message: response.error.unwrap_or_else(|| FAILURE_FALLBACK.into()),
                }
            }
            Err(err) => {
                warn!("Failed to submit contact form: {err:#}");
                SubmissionStatus::Error {
                    message: NETWORK_ERROR.into(),
                }
            }
        };

        &self.status
    }
}
