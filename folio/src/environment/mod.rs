use std::sync::Arc;

use folio_api_rest::{RealIpConfig, RestServerConfig};
use folio_config::Config;
use folio_core_contact_impl::ContactFeatureConfig;
use folio_di::provider;

pub mod types;

provider! {
    /// The default provider, capable of providing all the dependencies
    pub Provider {
        // API
        rest_server_config: RestServerConfig,

        // Core
        contact_feature_config: ContactFeatureConfig,
    }
}

impl Provider {
    pub fn new(config: &Config) -> Self {
        // API
        let rest_server_config = RestServerConfig {
            addr: config.http.host,
            port: config.http.port,
            real_ip_config: config.http.real_ip.as_ref().map(|real_ip_config| {
                Arc::new(RealIpConfig {
                    header: real_ip_config.header.clone(),
                    set_from: real_ip_config.set_from,
                })
            }),
            expose_error_details: config.http.expose_error_details,
        };

        // Core
        let contact_feature_config = ContactFeatureConfig {
            recipient: config.contact.recipient.clone().into(),
            sender: config.contact.sender.clone().into(),
            webhook_url: config.webhook.url.clone().map(Into::into),
            alt_webhook_url: config.webhook.alt_url.clone().map(Into::into),
            email_relay_url: config.email_relay.url.clone().map(Into::into),
            email_relay_key: config.email_relay.api_key.as_deref().map(Into::into),
        };

        Self {
            _cache: Default::default(),

            // API
            rest_server_config,

            // Core
            contact_feature_config,
        }
    }
}
