use url::Url;
use urlencoding::encode;

use crate::api::ContactForm;

const DEFAULT_SUBJECT: &str = "Portfolio Contact";
const DEFAULT_WHATSAPP_MESSAGE: &str = "I would like to discuss a potential opportunity with you.";

/// Ways to reach the site owner without going through the backend.
#[derive(Debug, Clone)]
pub struct DirectChannels {
    /// Name used in greetings.
    pub owner_name: String,
    pub email: String,
    /// International format without `+` or separators, e.g. `15551234567`.
    pub whatsapp_number: String,
    pub profile_url: Url,
}

impl DirectChannels {
    /// `mailto:` link prefilled with the current form fields.
    pub fn mailto_link(&self, form: &ContactForm) -> String {
        let subject = non_empty(&form.subject).unwrap_or(DEFAULT_SUBJECT);
        let body = format!(
            "Hi {owner},\n\nName: {name}\nCompany: {company}\nPhone: {phone}\n\nMessage:\n{message}\n\nBest regards,\n{name}",
            owner = self.owner_name,
            name = form.name,
            company = form.company,
            phone = form.phone,
            message = form.message,
        );

        format!(
            "mailto:{}?subject={}&body={}",
            self.email,
            encode(subject),
            encode(&body)
        )
    }

    /// WhatsApp chat link with a short introduction built from the form.
    pub fn whatsapp_link(&self, form: &ContactForm) -> String {
        let company = non_empty(&form.company)
            .map(|company| format!(" from {company}"))
            .unwrap_or_default();
        let message = non_empty(&form.message).unwrap_or(DEFAULT_WHATSAPP_MESSAGE);
        let text = format!(
            "Hi {}! I'm {}{company}. {message}",
            self.owner_name, form.name
        );

        format!("https://wa.me/{}?text={}", self.whatsapp_number, encode(&text))
    }

    pub fn profile_link(&self) -> &Url {
        &self.profile_url
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}
