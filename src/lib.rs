//! worklog - time tracking report assembly and mail notification dispatch
//!
//! The crate covers the pipeline between stored time entries and outgoing
//! mail: a CRUD/query facade over time entry storage, report payload
//! assembly, recipient resolution from free-text configuration, typed mail
//! templates, and an asynchronous dispatcher with an observable completion
//! handle.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use worklog::{ConsoleMailer, MailConfig, MailService, User};
//!
//! #[tokio::main]
//! async fn main() {
//!     worklog::init_tracing();
//!
//!     let config = MailConfig::new("https://worklog.example.com", "noreply@example.com");
//!     let mail = MailService::new(config, Arc::new(ConsoleMailer::new()));
//!
//!     let user = User::new("jdoe", "jdoe@example.com");
//!     let handle = mail.send_activation_email(&user);
//!
//!     // The handle is the completion signal; await it to observe the result.
//!     handle.await.unwrap().unwrap();
//! }
//! ```

mod config;
mod domain;
mod dto;
mod error;
mod mapper;
pub mod mailer;
mod notify;
pub mod recipients;
pub mod report;
mod repository;
mod service;
mod templates;

// Re-exports for public API
pub use config::MailConfig;
pub use domain::{Member, Project, TimeEntry, User};
pub use dto::{DayReportDto, PageRequest, Paged, TimeEntryDto, TimeLogReportDto};
pub use error::{Result, WorklogError};
pub use mailer::{ConsoleMailer, Email, Mailer, SmtpConfig, SmtpMailer};
pub use mapper::TimeEntryMapper;
pub use notify::MailService;
pub use repository::{InMemoryTimeEntryRepository, TimeEntryRepository};
pub use service::TimeEntryService;
pub use templates::MailTemplate;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging with sensible defaults
///
/// Call early, typically in main() before constructing services.
///
/// # Environment Variables
///
/// - `RUST_LOG`: log level filter (e.g. "info", "worklog=debug")
/// - `WORKLOG_LOG_JSON`: set to "true" for JSON formatted logs
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let json_logs = std::env::var("WORKLOG_LOG_JSON")
        .map(|v| v.parse::<bool>().unwrap_or(false))
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}
