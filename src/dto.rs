//! Transport-facing DTO shapes and pagination types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Project;

/// Time entry as exchanged with callers and mail templates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntryDto {
    pub id: Option<i64>,
    pub member_id: i64,
    pub project_id: i64,
    pub date: DateTime<Utc>,
    pub hours: f64,
    pub description: Option<String>,
}

/// Payload for a per-project daily report mail.
///
/// Recipients are derived from `project.send_reports` at dispatch time, never
/// stored on the DTO itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayReportDto {
    pub subject: String,
    pub project: Project,
    pub date: NaiveDate,
    pub entries: Vec<TimeEntryDto>,
}

/// Payload for an arbitrary time-range report mail.
///
/// Unlike [`DayReportDto`] this carries no recipient source; the caller
/// supplies addresses explicitly when dispatching.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLogReportDto {
    pub subject: String,
    pub entries: Vec<TimeEntryDto>,
}

/// Pagination request parameters (1-indexed page).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: 20,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Offset into the full result set for this page.
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.per_page as usize
    }

    pub fn limit(&self) -> usize {
        self.per_page as usize
    }
}

/// A bounded slice of a larger collection plus position metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paged<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> Paged<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            items,
            page: request.page,
            per_page: request.per_page,
            total,
        }
    }

    pub fn total_pages(&self) -> u32 {
        if self.per_page == 0 {
            return 0;
        }
        self.total.div_ceil(self.per_page as u64) as u32
    }

    /// Map the page contents while keeping the metadata.
    pub fn map<U, F>(self, f: F) -> Paged<U>
    where
        F: FnMut(T) -> U,
    {
        Paged {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_request_offset() {
        assert_eq!(PageRequest::new(1, 20).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        // Page 0 is treated as page 1 rather than underflowing.
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_paged_total_pages() {
        let page = Paged::new(vec![1, 2, 3], PageRequest::new(1, 3), 7);
        assert_eq!(page.total_pages(), 3);
    }

    #[test]
    fn test_time_entry_dto_serializes_round_trip() {
        let dto = TimeEntryDto {
            id: Some(3),
            member_id: 1,
            project_id: 2,
            date: "2021-03-15T09:30:00Z".parse().unwrap(),
            hours: 7.25,
            description: Some("standup".to_string()),
        };

        let json = serde_json::to_string(&dto).unwrap();
        let back: TimeEntryDto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, dto);
    }

    #[test]
    fn test_paged_map_keeps_metadata() {
        let page = Paged::new(vec![1, 2], PageRequest::new(2, 2), 10);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2"]);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total, 10);
    }
}
