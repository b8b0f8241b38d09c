use folio_extern_contracts::ExternApiError;
use reqwest::Response;

pub mod email_relay;
pub mod http;
pub mod webhook;

fn check_status(response: Response) -> Result<Response, ExternApiError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ExternApiError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason(),
        })
    }
}
