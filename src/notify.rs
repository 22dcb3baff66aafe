use crate::config::WebhookConfig;
use crate::errors::NotifyError;
use crate::models::{NotificationReport, Ticket};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use tracing::{debug, warn};

#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn notify(&self, ticket: &Ticket) -> Result<(), NotifyError>;
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct WebhookPayload {
    pub ticket_id: String,
    pub problema: String,
    pub estado: String,
    pub prioridad: String,
    pub fecha_envio: String,
}

impl From<&Ticket> for WebhookPayload {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket_id: ticket.id().to_string(),
            problema: ticket.description().to_string(),
            estado: ticket.status().spanish_label().to_string(),
            prioridad: ticket.priority().spanish_label().to_string(),
            fecha_envio: ticket.submitted_date().format("%d-%m-%Y").to_string(),
        }
    }
}

pub struct WebhookSink {
    client: Client,
    config: WebhookConfig,
}

impl WebhookSink {
    pub fn new(config: WebhookConfig) -> Result<Self, NotifyError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn notify(&self, ticket: &Ticket) -> Result<(), NotifyError> {
        debug!("posting {} to webhook {}", ticket.id(), self.config.url);

        let mut request = self
            .client
            .post(&self.config.url)
            .json(&WebhookPayload::from(ticket));
        if let Some(user) = &self.config.username {
            request = request.basic_auth(user, self.config.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("webhook rejected {}: HTTP {}", ticket.id(), status.as_u16());
            return Err(NotifyError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

/// Never retried; the ticket is already stored when this runs.
pub async fn deliver(sink: Option<&dyn NotificationSink>, ticket: &Ticket) -> NotificationReport {
    let Some(sink) = sink else {
        return NotificationReport::Skipped;
    };

    match sink.notify(ticket).await {
        Ok(()) => NotificationReport::Delivered,
        Err(err) => NotificationReport::Failed {
            http_status: err.http_status(),
            reason: err.to_string(),
        },
    }
}
