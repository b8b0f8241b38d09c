pub mod email_relay;
pub mod webhook;

use thiserror::Error;

/// Failure of a single outbound call to an external HTTP service.
#[derive(Debug, Error)]
pub enum ExternApiError {
    #[error("Remote service responded with status {status}")]
    Status {
        status: u16,
        reason: Option<&'static str>,
    },
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
