//! Report payload assembly.
//!
//! Pure packaging: the assembler attaches a subject and an entry collection
//! to their context and nothing more. Totals and formatting belong to the
//! mail templates, recipient handling to the dispatcher.

use chrono::NaiveDate;

use crate::domain::Project;
use crate::dto::{DayReportDto, TimeEntryDto, TimeLogReportDto};

/// Package the entries logged against `project` on `date` into a daily
/// report payload. Recipients are later derived from `project.send_reports`.
pub fn build_day_report(
    project: Project,
    date: NaiveDate,
    entries: Vec<TimeEntryDto>,
    subject: impl Into<String>,
) -> DayReportDto {
    DayReportDto {
        subject: subject.into(),
        project,
        date,
        entries,
    }
}

/// Package an arbitrary entry set under an explicit subject. The caller
/// supplies recipients separately when dispatching.
pub fn build_time_log_report(
    subject: impl Into<String>,
    entries: Vec<TimeEntryDto>,
) -> TimeLogReportDto {
    TimeLogReportDto {
        subject: subject.into(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(id: i64) -> TimeEntryDto {
        TimeEntryDto {
            id: Some(id),
            member_id: 1,
            project_id: 1,
            date: Utc::now(),
            hours: 8.0,
            description: None,
        }
    }

    #[test]
    fn test_day_report_packages_without_aggregation() {
        let project = Project {
            id: 1,
            name: "core".to_string(),
            send_reports: "lead@x.com".to_string(),
        };
        let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();

        let dto = build_day_report(project.clone(), date, vec![entry(1), entry(2)], "Daily");

        assert_eq!(dto.subject, "Daily");
        assert_eq!(dto.project, project);
        assert_eq!(dto.date, date);
        assert_eq!(dto.entries.len(), 2);
    }

    #[test]
    fn test_time_log_report_carries_no_recipients() {
        let dto = build_time_log_report("Week 12", vec![entry(1)]);
        assert_eq!(dto.subject, "Week 12");
        assert_eq!(dto.entries.len(), 1);
    }
}
