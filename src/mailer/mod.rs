//! Mail transport seam.
//!
//! The dispatcher hands every rendered message to a [`Mailer`]; backends are
//! swappable:
//! - [`ConsoleMailer`] prints mail metadata to stdout (development)
//! - [`SmtpMailer`] delivers via SMTP using lettre
//!
//! # Example
//!
//! ```rust,ignore
//! use worklog::mailer::{Email, Mailer, SmtpConfig, SmtpMailer};
//!
//! let mailer = SmtpMailer::new(SmtpConfig::new("smtp.example.com"))?;
//! let email = Email::new("noreply@example.com", "Daily report")
//!     .to("lead@example.com")
//!     .html("<p>…</p>");
//! mailer.send(&email).await?;
//! ```

mod console;
mod smtp;

pub use console::ConsoleMailer;
pub use smtp::{SmtpConfig, SmtpMailer};

use async_trait::async_trait;

use crate::error::{Result, WorklogError};

/// A message handed to the transport.
///
/// `to` may be empty: the dispatcher forwards whatever recipient list it
/// resolved, and whether a zero-recipient send is an error is the transport's
/// call.
#[derive(Debug, Clone)]
pub struct Email {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: Option<String>,
    pub html: Option<String>,
}

impl Email {
    pub fn new(from: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: Vec::new(),
            subject: subject.into(),
            text: None,
            html: None,
        }
    }

    /// Add one recipient.
    pub fn to(mut self, recipient: impl Into<String>) -> Self {
        self.to.push(recipient.into());
        self
    }

    /// Add every recipient from an iterator.
    pub fn to_many(mut self, recipients: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.to.extend(recipients.into_iter().map(|r| r.into()));
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.text = Some(body.into());
        self
    }

    pub fn html(mut self, body: impl Into<String>) -> Self {
        self.html = Some(body.into());
        self
    }

    /// Check the fields the dispatcher is responsible for. Recipient-list
    /// emptiness is deliberately not checked here.
    pub fn validate(&self) -> Result<()> {
        if self.from.is_empty() {
            return Err(WorklogError::bad_request("email 'from' is required"));
        }
        if self.subject.is_empty() {
            return Err(WorklogError::bad_request("email 'subject' is required"));
        }
        if self.text.is_none() && self.html.is_none() {
            return Err(WorklogError::bad_request(
                "email must have either a text or an html body",
            ));
        }
        Ok(())
    }
}

/// Mail sending backend.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver one message. All-or-nothing across its recipients; there is no
    /// per-recipient partial success.
    async fn send(&self, email: &Email) -> Result<()>;

    /// Whether the backend is ready to accept sends.
    fn is_healthy(&self) -> bool;
}
