use std::{future::Future, time::Duration};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::RelayConfig;

/// Template parameters of the message delivered to the site owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    pub to_email: String,
}

/// Template parameters of the thank-you mail sent back to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoReply {
    pub to_name: String,
    pub to_email: String,
    pub from_name: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateParams {
    Contact(ContactMessage),
    AutoReply(AutoReply),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("mail relay unreachable: {0}")]
    Network(String),
    #[error("mail relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("mail relay did not answer within {0:?}")]
    Timeout(Duration),
}

impl From<crate::timer::Elapsed> for RelayError {
    fn from(e: crate::timer::Elapsed) -> Self {
        Self::Timeout(e.0)
    }
}

/// A templated mail-delivery service.
pub trait MailRelay {
    fn send(
        &self,
        template_id: &str,
        params: &TemplateParams,
    ) -> impl Future<Output = Result<(), RelayError>>;
}

/// Request body of the EmailJS REST `send` endpoint.
#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

pub struct EmailJsRelay {
    client: reqwest::Client,
    endpoint: String,
    service_id: String,
    public_key: String,
}

impl EmailJsRelay {
    pub fn new(config: &RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            service_id: config.service_id.clone(),
            public_key: config.public_key.clone(),
        }
    }

    fn request_body<'a>(&'a self, template_id: &'a str, params: &'a TemplateParams) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.service_id,
            template_id,
            user_id: &self.public_key,
            template_params: params,
        }
    }
}

impl MailRelay for EmailJsRelay {
    async fn send(&self, template_id: &str, params: &TemplateParams) -> Result<(), RelayError> {
        let body = self.request_body(template_id, params);
        let res = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Network(e.to_string()))?;

        let status = res.status();
        if status == http::StatusCode::OK {
            log::debug!("mail relay accepted template {template_id}");
            return Ok(());
        }
        let body = res.text().await.unwrap_or_default();
        Err(RelayError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
