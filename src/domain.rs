//! Core domain records: users, members, projects and time entries.
//!
//! These are plain data carriers. Persistence of time entries lives behind
//! [`crate::repository::TimeEntryRepository`]; users, members and projects are
//! managed elsewhere and only referenced here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An application account, the target of lifecycle emails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub login: String,
    pub email: String,
    pub activated: bool,
    /// One-time key embedded in the activation link; empty once consumed.
    pub activation_key: String,
    /// One-time key embedded in the password reset link; empty once consumed.
    pub reset_key: String,
}

impl User {
    pub fn new(login: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            login: login.into(),
            email: email.into(),
            activated: false,
            activation_key: String::new(),
            reset_key: String::new(),
        }
    }
}

/// A person whose work is tracked; referenced by [`TimeEntry`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub id: i64,
    pub name: String,
}

/// A project time is logged against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    /// Free-text list of report recipients, separated by any mixture of
    /// commas, semicolons, colons or whitespace. Parsed by
    /// [`crate::recipients::resolve`], never used raw.
    pub send_reports: String,
}

/// A single unit of logged work.
///
/// `date` carries a full timestamp: upstream clients routinely submit
/// entries with a time-of-day component, so day-scoped queries must use a
/// range rather than an equality check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub id: Option<i64>,
    pub member_id: i64,
    pub project_id: i64,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub description: Option<String>,
}
