//! SMTP mailer backed by lettre.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::error::{Result, WorklogError};
use crate::mailer::{Email, Mailer};

/// SMTP connection settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    /// Default 587 (STARTTLS submission port).
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub starttls: bool,
}

impl SmtpConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: 587,
            username: None,
            password: None,
            starttls: true,
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn credentials(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn no_starttls(mut self) -> Self {
        self.starttls = false;
        self
    }

    /// Read settings from `SMTP_HOST` (required), `SMTP_PORT`,
    /// `SMTP_USERNAME`, `SMTP_PASSWORD` and `SMTP_STARTTLS`.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("SMTP_HOST")
            .map_err(|_| WorklogError::internal("SMTP_HOST environment variable not set"))?;

        let port = std::env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587);

        let username = std::env::var("SMTP_USERNAME").ok();
        let password = std::env::var("SMTP_PASSWORD").ok();
        let starttls = std::env::var("SMTP_STARTTLS")
            .map(|v| v != "false" && v != "0")
            .unwrap_or(true);

        Ok(Self {
            host,
            port,
            username,
            password,
            starttls,
        })
    }
}

/// Mailer delivering over SMTP via lettre's async transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Result<Self> {
        let mut builder = if config.starttls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
                .map_err(|e| WorklogError::mail(format!("failed to create SMTP transport: {e}")))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
                .map_err(|e| WorklogError::mail(format!("failed to create SMTP transport: {e}")))?
        };

        builder = builder.port(config.port);

        if let (Some(username), Some(password)) = (&config.username, &config.password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            config,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SmtpConfig::from_env()?)
    }

    fn build_message(&self, email: &Email) -> Result<Message> {
        let from: Mailbox = email
            .from
            .parse()
            .map_err(|e| WorklogError::bad_request(format!("invalid 'from' address: {e}")))?;

        let mut builder = Message::builder().from(from).subject(&email.subject);

        for to in &email.to {
            let mailbox: Mailbox = to
                .parse()
                .map_err(|e| WorklogError::bad_request(format!("invalid 'to' address '{to}': {e}")))?;
            builder = builder.to(mailbox);
        }

        let message = match (&email.text, &email.html) {
            (Some(text), Some(html)) => builder
                .multipart(
                    MultiPart::alternative()
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_PLAIN)
                                .body(text.clone()),
                        )
                        .singlepart(
                            SinglePart::builder()
                                .header(ContentType::TEXT_HTML)
                                .body(html.clone()),
                        ),
                )
                .map_err(|e| WorklogError::mail(format!("failed to build email: {e}")))?,
            (Some(text), None) => builder
                .header(ContentType::TEXT_PLAIN)
                .body(text.clone())
                .map_err(|e| WorklogError::mail(format!("failed to build email: {e}")))?,
            (None, Some(html)) => builder
                .header(ContentType::TEXT_HTML)
                .body(html.clone())
                .map_err(|e| WorklogError::mail(format!("failed to build email: {e}")))?,
            (None, None) => {
                return Err(WorklogError::bad_request(
                    "email must have either a text or an html body",
                ))
            }
        };

        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &Email) -> Result<()> {
        email.validate()?;

        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| WorklogError::mail(format!("failed to send email: {e}")))?;

        Ok(())
    }

    fn is_healthy(&self) -> bool {
        // Connection state is not tracked; the pool reconnects on demand.
        true
    }
}

impl std::fmt::Debug for SmtpMailer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmtpMailer")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .finish()
    }
}
