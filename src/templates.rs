//! Mail template registry.
//!
//! Each logical template binds a fixed context schema: lifecycle mail renders
//! from `base_url` + `user`, report mail from the whole report DTO. The
//! schemas are enforced at compile time by askama's typed contexts, so a
//! template cannot reference a variable its context does not carry.

use askama::Template;

use crate::domain::User;
use crate::dto::{DayReportDto, TimeLogReportDto};
use crate::error::{Result, WorklogError};

#[derive(Template)]
#[template(path = "mail/activation_email.html")]
struct ActivationEmail<'a> {
    base_url: &'a str,
    user: &'a User,
}

#[derive(Template)]
#[template(path = "mail/creation_email.html")]
struct CreationEmail<'a> {
    base_url: &'a str,
    user: &'a User,
}

#[derive(Template)]
#[template(path = "mail/password_reset_email.html")]
struct PasswordResetEmail<'a> {
    base_url: &'a str,
    user: &'a User,
}

#[derive(Template)]
#[template(path = "mail/day_report.html")]
struct DayReport<'a> {
    report: &'a DayReportDto,
}

#[derive(Template)]
#[template(path = "mail/time_report.html")]
struct TimeReport<'a> {
    report: &'a TimeLogReportDto,
}

/// A logical mail template bound to its context.
///
/// The variant is the template identifier; its fields are the full context
/// schema for that template.
#[derive(Debug, Clone, Copy)]
pub enum MailTemplate<'a> {
    Activation { base_url: &'a str, user: &'a User },
    Creation { base_url: &'a str, user: &'a User },
    PasswordReset { base_url: &'a str, user: &'a User },
    DayReport { report: &'a DayReportDto },
    TimeReport { report: &'a TimeLogReportDto },
}

impl MailTemplate<'_> {
    /// Logical template name, matching the template source under
    /// `templates/mail/`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Activation { .. } => "activation_email",
            Self::Creation { .. } => "creation_email",
            Self::PasswordReset { .. } => "password_reset_email",
            Self::DayReport { .. } => "day_report",
            Self::TimeReport { .. } => "time_report",
        }
    }

    /// Render the HTML body for this template and context.
    pub fn render(&self) -> Result<String> {
        let rendered = match *self {
            Self::Activation { base_url, user } => ActivationEmail { base_url, user }.render(),
            Self::Creation { base_url, user } => CreationEmail { base_url, user }.render(),
            Self::PasswordReset { base_url, user } => {
                PasswordResetEmail { base_url, user }.render()
            }
            Self::DayReport { report } => DayReport { report }.render(),
            Self::TimeReport { report } => TimeReport { report }.render(),
        };
        rendered.map_err(|e| WorklogError::template(format!("{}: {e}", self.name())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Project;
    use crate::dto::TimeEntryDto;
    use chrono::{NaiveDate, Utc};

    fn user() -> User {
        let mut u = User::new("jdoe", "jdoe@test.com");
        u.activation_key = "abc123".to_string();
        u.reset_key = "xyz789".to_string();
        u
    }

    #[test]
    fn test_activation_email_links_activation_key() {
        let u = user();
        let body = MailTemplate::Activation {
            base_url: "https://worklog.test",
            user: &u,
        }
        .render()
        .unwrap();

        assert!(body.contains("jdoe"));
        assert!(body.contains("https://worklog.test/account/activate?key=abc123"));
    }

    #[test]
    fn test_password_reset_email_links_reset_key() {
        let u = user();
        let body = MailTemplate::PasswordReset {
            base_url: "https://worklog.test",
            user: &u,
        }
        .render()
        .unwrap();

        assert!(body.contains("https://worklog.test/account/reset/finish?key=xyz789"));
    }

    #[test]
    fn test_day_report_lists_entries() {
        let report = DayReportDto {
            subject: "Daily".to_string(),
            project: Project {
                id: 1,
                name: "core".to_string(),
                send_reports: String::new(),
            },
            date: NaiveDate::from_ymd_opt(2021, 3, 15).unwrap(),
            entries: vec![TimeEntryDto {
                id: Some(1),
                member_id: 4,
                project_id: 1,
                date: Utc::now(),
                hours: 6.5,
                description: Some("code review".to_string()),
            }],
        };

        let body = MailTemplate::DayReport { report: &report }.render().unwrap();
        assert!(body.contains("core"));
        assert!(body.contains("2021-03-15"));
        assert!(body.contains("6.5"));
        assert!(body.contains("code review"));
    }

    #[test]
    fn test_template_names() {
        let u = user();
        let t = MailTemplate::Creation {
            base_url: "x",
            user: &u,
        };
        assert_eq!(t.name(), "creation_email");
    }
}
