use std::{net::IpAddr, path::Path};

use anyhow::Context;
use config::{File, FileFormat};
use folio_models::email_address::EmailAddress;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../config.toml");

/// Environment variables that override config keys. Empty values are
/// ignored.
pub const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DISCORD_WEBHOOK_URL", "webhook.url"),
    ("WEBHOOK_URL", "webhook.alt_url"),
    ("EMAIL_SERVICE_URL", "email_relay.url"),
    ("EMAIL_API_KEY", "email_relay.api_key"),
];

/// Colon separated list of additional config files, applied on top of the
/// default config.
pub const CONFIG_PATHS_ENV: &str = "FOLIO_CONFIG";

/// Load the default config, the files listed in `FOLIO_CONFIG` and the
/// environment overrides.
pub fn load_default() -> anyhow::Result<Config> {
    let extra = std::env::var(CONFIG_PATHS_ENV).unwrap_or_default();
    let paths = std::iter::once(DEFAULT_CONFIG_PATH)
        .chain(extra.split(':').filter(|x| !x.is_empty()))
        .collect::<Vec<_>>();
    load(&paths)
}

/// Load the config from the given files (later files take precedence) and
/// apply the overrides from the process environment.
pub fn load(paths: &[impl AsRef<Path>]) -> anyhow::Result<Config> {
    load_with_env(paths, |key| std::env::var(key).ok())
}

pub fn load_with_env(
    paths: &[impl AsRef<Path>],
    env: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Config> {
    let builder = paths
        .iter()
        .try_fold(config::Config::builder(), |builder, path| {
            let path = path.as_ref();
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file at {}", path.display()))?;
            let source = File::from_str(&content, FileFormat::Toml);
            anyhow::Ok(builder.add_source(source))
        })?;

    ENV_OVERRIDES
        .iter()
        .try_fold(builder, |builder, &(var, key)| {
            let value = env(var).filter(|x| !x.trim().is_empty());
            builder
                .set_override_option(key, value)
                .with_context(|| format!("Failed to apply {var}"))
        })?
        .build()?
        .try_deserialize()
        .context("Failed to load config")
}

#[derive(Debug, Deserialize)]
pub struct Config {
    pub http: HttpConfig,
    pub contact: ContactConfig,
    #[serde(default)]
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub email_relay: EmailRelayConfig,
    pub channels: ChannelsConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub host: IpAddr,
    pub port: u16,
    /// Include internal error messages in error responses. Must be disabled
    /// in production.
    #[serde(default)]
    pub expose_error_details: bool,
    pub real_ip: Option<HttpRealIpConfig>,
}

#[derive(Debug, Deserialize)]
pub struct HttpRealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

#[derive(Debug, Deserialize)]
pub struct ContactConfig {
    pub recipient: EmailAddress,
    pub sender: EmailAddress,
}

#[derive(Debug, Default, Deserialize)]
pub struct WebhookConfig {
    pub url: Option<Url>,
    pub alt_url: Option<Url>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EmailRelayConfig {
    pub url: Option<Url>,
    pub api_key: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ChannelsConfig {
    pub owner_name: String,
    pub email: EmailAddress,
    pub whatsapp_number: String,
    pub profile_url: Url,
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn load_default_config() {
        let config = load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |_| None).unwrap();
        assert!(config.webhook.url.is_none());
        assert!(config.email_relay.url.is_none());
        assert!(!config.http.expose_error_details);
    }

    #[test]
    fn env_overrides() {
        let env = HashMap::from([
            (
                "DISCORD_WEBHOOK_URL",
                "https://discord.com/api/webhooks/1/token",
            ),
            ("WEBHOOK_URL", ""),
            ("EMAIL_SERVICE_URL", "https://relay.example.com/send"),
            ("EMAIL_API_KEY", "secret"),
        ]);

        let config = load_with_env(&[Path::new(DEFAULT_CONFIG_PATH)], |key| {
            env.get(key).map(|&x| x.into())
        })
        .unwrap();

        assert_eq!(
            config.webhook.url.unwrap().as_str(),
            "https://discord.com/api/webhooks/1/token"
        );
        assert_eq!(config.webhook.alt_url, None);
        assert_eq!(
            config.email_relay.url.unwrap().as_str(),
            "https://relay.example.com/send"
        );
        assert_eq!(config.email_relay.api_key.as_deref(), Some("secret"));
    }

    #[test]
    fn later_files_take_precedence() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("override.toml");
        std::fs::write(
            &path,
            "[http]\nport = 9000\n\n[webhook]\nalt_url = \"http://localhost:8001/webhook\"\n",
        )
        .unwrap();

        let config =
            load_with_env(&[Path::new(DEFAULT_CONFIG_PATH), path.as_path()], |_| None).unwrap();

        std::fs::remove_dir_all(&dir).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(
            config.webhook.alt_url.unwrap().as_str(),
            "http://localhost:8001/webhook"
        );
    }

    #[test]
    fn missing_file() {
        let err = load_with_env(&["/nonexistent/folio.toml"], |_| None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/folio.toml"));
    }
}
