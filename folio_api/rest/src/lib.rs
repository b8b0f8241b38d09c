use std::{
    net::{IpAddr, SocketAddr},
    sync::Arc,
};

use axum::{Extension, Router};
use folio_core_contact_contracts::ContactFeatureService;
use folio_di::Build;
use tokio::net::TcpListener;
use tracing::info;

use crate::routes::ErrorReporting;

mod extractors;
mod middlewares;
mod models;
mod routes;

#[derive(Debug, Clone, Build)]
pub struct RestServer<Contact> {
    contact: Contact,
    config: RestServerConfig,
}

#[derive(Debug, Clone)]
pub struct RestServerConfig {
    pub addr: IpAddr,
    pub port: u16,
    pub real_ip_config: Option<Arc<RealIpConfig>>,
    /// Include internal error messages in 500 responses.
    pub expose_error_details: bool,
}

/// Trust the client address given in `header`, but only for requests coming
/// directly from `set_from` (e.g. a reverse proxy).
#[derive(Debug, Clone)]
pub struct RealIpConfig {
    pub header: String,
    pub set_from: IpAddr,
}

impl<Contact> RestServer<Contact>
where
    Contact: ContactFeatureService,
{
    pub async fn serve(self) -> anyhow::Result<()> {
        let RestServerConfig { addr, port, .. } = self.config;
        let listener = TcpListener::bind((addr, port)).await?;
        info!("Starting HTTP server on {addr}:{port}");

        let router = self.router();
        axum::serve(
            listener,
            router.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .await
        .map_err(Into::into)
    }

    fn router(self) -> Router<()> {
        let reporting = ErrorReporting {
            expose_details: self.config.expose_error_details,
        };

        let router = Router::new().merge(routes::contact::router(self.contact.into()));
        let router = middlewares::panic_handler::add(router);
        let router = middlewares::trace::add(router);
        let router = middlewares::client_ip::add(self.config.real_ip_config)(router);
        router.layer(Extension(reporting))
    }
}
