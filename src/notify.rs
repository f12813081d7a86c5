//! Notification dispatch.
//!
//! [`MailService`] is the orchestrator: it binds a template to its recipients
//! and subject, renders, and hands the message to the mail transport as a
//! spawned task. The returned [`JoinHandle`] is the completion signal; it
//! resolves to `Ok(())` after the transport accepts the message or to the
//! transport/render error otherwise.
//!
//! The dispatcher deliberately adds no resiliency: no retry, no timeout, no
//! catch. A failed send is observable only through the handle, and a caller
//! that drops the handle has chosen fire-and-forget. If retries are ever
//! wanted they belong in a wrapper around this service, not inside it.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::MailConfig;
use crate::domain::User;
use crate::dto::{DayReportDto, TimeLogReportDto};
use crate::error::Result;
use crate::mailer::{Email, Mailer};
use crate::recipients;
use crate::templates::MailTemplate;

const ACTIVATION_SUBJECT: &str = "worklog account activation is required";
// The creation mail carries the same subject text as the activation mail.
const CREATION_SUBJECT: &str = "worklog account activation is required";
const PASSWORD_RESET_SUBJECT: &str = "worklog password reset";

/// Renders and sends templated mail asynchronously.
///
/// Cheap to share: concurrent dispatch calls coordinate nothing and mutate
/// nothing, so completion order across calls is unspecified.
pub struct MailService {
    config: MailConfig,
    mailer: Arc<dyn Mailer>,
}

impl MailService {
    pub fn new(config: MailConfig, mailer: Arc<dyn Mailer>) -> Self {
        Self { config, mailer }
    }

    /// Render `template` and send it to `recipients` under `subject`.
    ///
    /// Rendering and message construction happen synchronously; only the
    /// transport hand-off runs on the spawned task. A render failure still
    /// surfaces through the returned handle so callers observe every failure
    /// class in one place.
    ///
    /// The recipient list is forwarded as-is, empty lists included; whether
    /// a zero-recipient send fails is up to the transport.
    pub fn dispatch(
        &self,
        template: MailTemplate<'_>,
        recipients: Vec<String>,
        subject: impl Into<String>,
    ) -> JoinHandle<Result<()>> {
        let body = template.render();
        let email = Email::new(self.config.from.clone(), subject).to_many(recipients);
        let mailer = Arc::clone(&self.mailer);

        tokio::spawn(async move {
            let email = email.html(body?);
            mailer.send(&email).await?;
            tracing::debug!(to = ?email.to, subject = %email.subject, "sent email");
            Ok(())
        })
    }

    fn send_lifecycle_mail(
        &self,
        user: &User,
        template: MailTemplate<'_>,
        subject: &str,
    ) -> JoinHandle<Result<()>> {
        self.dispatch(template, vec![user.email.clone()], subject)
    }

    pub fn send_activation_email(&self, user: &User) -> JoinHandle<Result<()>> {
        tracing::debug!(email = %user.email, "sending activation email");
        self.send_lifecycle_mail(
            user,
            MailTemplate::Activation {
                base_url: &self.config.base_url,
                user,
            },
            ACTIVATION_SUBJECT,
        )
    }

    pub fn send_creation_email(&self, user: &User) -> JoinHandle<Result<()>> {
        tracing::debug!(email = %user.email, "sending creation email");
        self.send_lifecycle_mail(
            user,
            MailTemplate::Creation {
                base_url: &self.config.base_url,
                user,
            },
            CREATION_SUBJECT,
        )
    }

    pub fn send_password_reset_mail(&self, user: &User) -> JoinHandle<Result<()>> {
        tracing::debug!(email = %user.email, "sending password reset email");
        self.send_lifecycle_mail(
            user,
            MailTemplate::PasswordReset {
                base_url: &self.config.base_url,
                user,
            },
            PASSWORD_RESET_SUBJECT,
        )
    }

    /// Send a daily report. Recipients come from the project's free-text
    /// `send_reports` field and from nowhere else.
    pub fn send_day_report(&self, report: &DayReportDto) -> JoinHandle<Result<()>> {
        let to = recipients::resolve(&report.project.send_reports);
        self.dispatch(
            MailTemplate::DayReport { report },
            to,
            report.subject.clone(),
        )
    }

    /// Send a time-range report to an explicitly supplied address collection;
    /// the report itself carries no recipient source.
    pub fn send_time_report<I, S>(
        &self,
        report: &TimeLogReportDto,
        addresses: I,
    ) -> JoinHandle<Result<()>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let to = recipients::resolve_all(addresses);
        self.dispatch(
            MailTemplate::TimeReport { report },
            to,
            report.subject.clone(),
        )
    }
}

impl std::fmt::Debug for MailService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailService")
            .field("base_url", &self.config.base_url)
            .field("from", &self.config.from)
            .finish()
    }
}
