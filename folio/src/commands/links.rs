use clap::Args;
use folio_client::{ContactForm, DirectChannels};
use folio_config::Config;

#[derive(Debug, Args)]
pub struct LinksCommand {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    company: String,
    #[arg(long, default_value = "")]
    subject: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl LinksCommand {
    pub fn invoke(self, config: Config) {
        let channels = DirectChannels {
            owner_name: config.channels.owner_name,
            email: config.channels.email.into_inner(),
            whatsapp_number: config.channels.whatsapp_number,
            profile_url: config.channels.profile_url,
        };

        let form = ContactForm {
            name: self.name,
            company: self.company,
            subject: self.subject,
            message: self.message,
            ..Default::default()
        };

        println!("Email:    {}", channels.mailto_link(&form));
        println!("WhatsApp: {}", channels.whatsapp_link(&form));
        println!("Profile:  {}", channels.profile_link());
    }
}
