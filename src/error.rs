use std::result;

/// The main error type for worklog services
#[derive(Debug, thiserror::Error)]
pub enum WorklogError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Mail transport error: {0}")]
    Mail(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

pub type Result<T> = result::Result<T, WorklogError>;

impl WorklogError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn repository(msg: impl Into<String>) -> Self {
        Self::Repository(msg.into())
    }

    pub fn template(msg: impl Into<String>) -> Self {
        Self::Template(msg.into())
    }

    pub fn mail(msg: impl Into<String>) -> Self {
        Self::Mail(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Whether this error came from the mail transport or template rendering,
    /// i.e. a failed send rather than a bad request or missing entity.
    pub fn is_delivery_failure(&self) -> bool {
        matches!(self, Self::Mail(_) | Self::Template(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let err = WorklogError::mail("connection refused");
        assert_eq!(err.to_string(), "Mail transport error: connection refused");
    }

    #[test]
    fn test_delivery_failure_classification() {
        assert!(WorklogError::mail("x").is_delivery_failure());
        assert!(WorklogError::template("x").is_delivery_failure());
        assert!(!WorklogError::not_found("x").is_delivery_failure());
    }
}
