use std::time::Duration;

pub const OWNER_NAME: &str = "Jordan Avery";
pub const OWNER_EMAIL: &str = "hello@jordanavery.dev";

pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const AUTO_REPLY_SUBJECT: &str = "Thanks for reaching out!";

/// Upper bound on each outbound relay call.
pub const SUBMIT_TIMEOUT: Duration = Duration::from_secs(15);

/// Everything the contact form needs to talk to the mail relay.
///
/// The keys are public client keys and ship inside the wasm bundle. They can be
/// swapped at build time through the `PORTFOLIO_EMAILJS_*` environment
/// variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: String,
    pub contact_template_id: String,
    pub auto_reply_template_id: String,
    pub public_key: String,
    pub owner_name: String,
    pub owner_email: String,
    pub auto_reply_subject: String,
    pub timeout: Duration,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            endpoint: EMAILJS_ENDPOINT.to_string(),
            service_id: option_env!("PORTFOLIO_EMAILJS_SERVICE_ID")
                .unwrap_or("service_portfolio")
                .to_string(),
            contact_template_id: option_env!("PORTFOLIO_EMAILJS_CONTACT_TEMPLATE")
                .unwrap_or("template_contact")
                .to_string(),
            auto_reply_template_id: option_env!("PORTFOLIO_EMAILJS_REPLY_TEMPLATE")
                .unwrap_or("template_autoreply")
                .to_string(),
            public_key: option_env!("PORTFOLIO_EMAILJS_PUBLIC_KEY")
                .unwrap_or("portfolio_public_key")
                .to_string(),
            owner_name: OWNER_NAME.to_string(),
            owner_email: OWNER_EMAIL.to_string(),
            auto_reply_subject: AUTO_REPLY_SUBJECT.to_string(),
            timeout: SUBMIT_TIMEOUT,
        }
    }
}
