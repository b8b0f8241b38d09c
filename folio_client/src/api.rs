use std::future::Future;

use anyhow::Context;
use folio_utils::folio_version;
use serde::{Deserialize, Serialize};
use url::Url;

/// Contact form fields in the shape expected by `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub company: String,
}

#[cfg_attr(test, mockall::automock)]
pub trait ContactApi: Send + Sync + 'static {
    /// Submit the form once.
    ///
    /// Returns an error only if no response body could be decoded.
    fn submit(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = anyhow::Result<ContactApiResponse>> + Send;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactApiResponse {
    pub status: u16,
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

impl ContactApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status) && self.success
    }
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub struct HttpContactApi {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpContactApi {
    /// Create a client for the backend at `base`, e.g. `http://localhost:8000/`.
    ///
    /// A base path without a trailing slash is treated as a directory, so
    /// `http://host/app` resolves to `http://host/app/api/contact`.
    pub fn new(base: &Url) -> anyhow::Result<Self> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        let endpoint = base
            .join("api/contact")
            .context("Failed to build contact endpoint url")?;
        let client = reqwest::Client::builder()
            .user_agent(format!("folio-client/{}", folio_version()))
            .build()
            .context("Failed to build http client")?;
        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl ContactApi for HttpContactApi {
    async fn submit(&self, form: &ContactForm) -> anyhow::Result<ContactApiResponse> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .json(form)
            .send()
            .await
            .context("Failed to send contact request")?;

        let status = response.status().as_u16();
        let body = response
            .json::<ResponseBody>()
            .await
            .context("Failed to decode contact response")?;

        Ok(ContactApiResponse {
            status,
            success: body.success,
            message: body.message,
            error: body.error,
        })
    }
}
