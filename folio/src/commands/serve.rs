use folio_config::Config;
use folio_di::Provide;
use tracing::info;

use crate::environment::{types::RestServer, Provider};

pub async fn serve(config: Config) -> anyhow::Result<()> {
    match (&config.webhook.url, &config.webhook.alt_url) {
        (Some(_), _) | (None, Some(_)) => info!("Webhook notifications enabled"),
        (None, None) => info!("No webhook configured, webhook notifications disabled"),
    }
    match (&config.email_relay.url, &config.email_relay.api_key) {
        (Some(_), Some(_)) => info!("Email relay notifications enabled"),
        _ => info!("Email relay not configured, email notifications disabled"),
    }

    let mut provider = Provider::new(&config);
    let server: RestServer = provider.provide();
    server.serve().await
}
