//! Mail-related application configuration.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WorklogError};

/// Settings the dispatcher needs: where links in lifecycle mail point and
/// what sender address outgoing mail carries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Public base URL of the application, injected into every lifecycle
    /// mail context (activation and reset links are built from it).
    pub base_url: String,
    /// Sender address for all outgoing mail.
    pub from: String,
}

impl MailConfig {
    pub fn new(base_url: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            from: from.into(),
        }
    }

    /// Read settings from `WORKLOG_BASE_URL` and `WORKLOG_MAIL_FROM`.
    pub fn from_env() -> Result<Self> {
        let base_url = std::env::var("WORKLOG_BASE_URL")
            .map_err(|_| WorklogError::internal("WORKLOG_BASE_URL environment variable not set"))?;
        let from = std::env::var("WORKLOG_MAIL_FROM")
            .map_err(|_| WorklogError::internal("WORKLOG_MAIL_FROM environment variable not set"))?;
        Ok(Self { base_url, from })
    }
}
