use std::net::SocketAddr;

use anyhow::bail;
use clap::Args;
use folio_client::{ContactForm, ContactFormController, HttpContactApi, SubmissionStatus};
use folio_config::Config;
use url::Url;

#[derive(Debug, Args)]
pub struct SubmitCommand {
    /// Base url of the backend [default: the configured http address]
    #[arg(long)]
    endpoint: Option<Url>,
    #[arg(long)]
    name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long)]
    subject: String,
    #[arg(long)]
    message: String,
}

impl SubmitCommand {
    pub async fn invoke(self, config: Config) -> anyhow::Result<()> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => {
                let addr = SocketAddr::from((config.http.host, config.http.port));
                format!("http://{addr}/").parse()?
            }
        };

        let mut controller = ContactFormController::new(HttpContactApi::new(&endpoint)?);
        *controller.form_mut() = ContactForm {
            name: self.name,
            email: self.email,
            phone: self.phone,
            subject: self.subject,
            message: self.message,
            company: self.company,
        };

        match controller.submit().await {
            SubmissionStatus::Success { message } => {
                println!("{message}");
                Ok(())
            }
            SubmissionStatus::Error { message } => bail!("{message}"),
            status @ (SubmissionStatus::Idle | SubmissionStatus::Submitting) => {
                bail!("Unexpected submission status: {status:?}")
            }
        }
    }
}
