//! Console mailer for development.
//!
//! Prints mail metadata to stdout instead of sending. Body content is
//! redacted unless full output is explicitly enabled, since stdout is often
//! captured by log collectors and report mail can contain account data.

use async_trait::async_trait;

use crate::error::Result;
use crate::mailer::{Email, Mailer};

/// A mailer that prints messages to stdout instead of sending them.
#[derive(Debug, Clone)]
pub struct ConsoleMailer {
    prefix: String,
    show_full_content: bool,
}

impl ConsoleMailer {
    pub fn new() -> Self {
        Self {
            prefix: "[MAIL]".to_string(),
            show_full_content: false,
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            show_full_content: false,
        }
    }

    /// Print full bodies instead of redacted lengths. Development only.
    pub fn with_full_output(mut self, enabled: bool) -> Self {
        if enabled {
            tracing::warn!("ConsoleMailer: full output enabled, mail bodies will appear in logs");
        }
        self.show_full_content = enabled;
        self
    }
}

impl Default for ConsoleMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for ConsoleMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        email.validate()?;

        println!("{} ──────────────────────────────", self.prefix);
        println!("{} From:    {}", self.prefix, email.from);
        println!("{} To:      {}", self.prefix, email.to.join(", "));
        println!("{} Subject: {}", self.prefix, email.subject);
        if let Some(ref text) = email.text {
            if self.show_full_content {
                println!("{} [text] {}", self.prefix, text);
            } else {
                println!("{} [text] {} bytes", self.prefix, text.len());
            }
        }
        if let Some(ref html) = email.html {
            if self.show_full_content {
                println!("{} [html] {}", self.prefix, html);
            } else {
                println!("{} [html] {} bytes", self.prefix, html.len());
            }
        }
        println!("{} ──────────────────────────────", self.prefix);

        Ok(())
    }

    fn is_healthy(&self) -> bool {
        true
    }
}
