//! Conversion between stored time entries and their DTO shape.

use crate::domain::TimeEntry;
use crate::dto::TimeEntryDto;

/// Bidirectional entity/DTO mapper for time entries.
///
/// Field-for-field today, but kept as an explicit collaborator so the stored
/// shape can diverge from the transport shape without touching the service.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeEntryMapper;

impl TimeEntryMapper {
    pub fn new() -> Self {
        Self
    }

    pub fn to_dto(&self, entry: &TimeEntry) -> TimeEntryDto {
        TimeEntryDto {
            id: entry.id,
            member_id: entry.member_id,
            project_id: entry.project_id,
            date: entry.date,
            hours: entry.hours,
            description: entry.description.clone(),
        }
    }

    pub fn to_entity(&self, dto: TimeEntryDto) -> TimeEntry {
        TimeEntry {
            id: dto.id,
            member_id: dto.member_id,
            project_id: dto.project_id,
            date: dto.date,
            hours: dto.hours,
            description: dto.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_round_trip_preserves_fields() {
        let mapper = TimeEntryMapper::new();
        let entry = TimeEntry {
            id: Some(7),
            member_id: 1,
            project_id: 2,
            date: Utc::now(),
            hours: 1.5,
            description: Some("pairing".to_string()),
        };

        let dto = mapper.to_dto(&entry);
        assert_eq!(mapper.to_entity(dto), entry);
    }
}
