//! Delivery sinks: where the rendered workout document ends up.
//!
//! A sink accepts a (title, body) pair and pushes it over its transport.
//! Sinks hold credentials, not connections; the network session is opened
//! and closed inside `deliver`, so a failure partway through never leaks it.

use crate::exercise::Markup;
use crate::Result;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub const DEFAULT_SMTP_RELAY: &str = "smtp.gmail.com";
pub const DEFAULT_TODOIST_API_URL: &str = "https://api.todoist.com/rest/v2/tasks";

/// Delivery sink trait for the rendered workout document
pub trait DeliverySink {
    /// The markup dialect the sink expects for the body.
    fn markup(&self) -> Markup;

    /// Deliver the document. No retries; errors surface to the caller.
    fn deliver(&self, title: &str, body: &str) -> Result<()>;
}

/// Email sink: sends the workout as an HTML email to each recipient.
pub struct EmailSink {
    username: String,
    app_password: String,
    recipients: Vec<String>,
    relay: String,
}

impl EmailSink {
    pub fn new(
        username: impl Into<String>,
        app_password: impl Into<String>,
        recipients: Vec<String>,
        relay: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            app_password: app_password.into(),
            recipients,
            relay: relay.into(),
        }
    }
}

impl DeliverySink for EmailSink {
    fn markup(&self) -> Markup {
        Markup::Html
    }

    fn deliver(&self, title: &str, body: &str) -> Result<()> {
        let sender: lettre::message::Mailbox = self.username.parse()?;

        let mailer = SmtpTransport::relay(&self.relay)?
            .credentials(Credentials::new(
                self.username.clone(),
                self.app_password.clone(),
            ))
            .build();

        for recipient in &self.recipients {
            let message = Message::builder()
                .from(sender.clone())
                .to(recipient.trim().parse()?)
                .subject(title)
                .header(ContentType::TEXT_HTML)
                .body(body.to_string())?;

            mailer.send(&message)?;
            tracing::info!("Sent workout email to {}", recipient.trim());
        }

        // Connection closes when the transport is dropped.
        Ok(())
    }
}

/// Todoist sink: creates a task in the inbox with the workout as its
/// Markdown description.
pub struct TodoistSink {
    api_token: String,
    api_url: String,
    client: reqwest::blocking::Client,
}

impl TodoistSink {
    pub fn new(api_token: impl Into<String>, api_url: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
            api_url: api_url.into(),
            client: reqwest::blocking::Client::new(),
        }
    }
}

impl DeliverySink for TodoistSink {
    fn markup(&self) -> Markup {
        Markup::Markdown
    }

    fn deliver(&self, title: &str, body: &str) -> Result<()> {
        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(&serde_json::json!({
                "content": title,
                "description": body,
            }))
            .send()?;

        response.error_for_status()?;
        tracing::info!("Created Todoist task '{}'", title);
        Ok(())
    }
}
