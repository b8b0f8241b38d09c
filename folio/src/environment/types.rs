use folio_core_contact_impl::ContactFeatureServiceImpl;
use folio_extern_impl::{email_relay::EmailRelayApiServiceImpl, webhook::WebhookApiServiceImpl};
use folio_shared_impl::time::TimeServiceImpl;
use folio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = folio_api_rest::RestServer<ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<Time, Template, WebhookApi, EmailRelayApi>;

// Extern
pub type WebhookApi = WebhookApiServiceImpl;
pub type EmailRelayApi = EmailRelayApiServiceImpl;

// Shared
pub type Time = TimeServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;
