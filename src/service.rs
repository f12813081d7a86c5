//! Time entry CRUD/query facade.

use std::sync::Arc;

use chrono::NaiveDate;

use crate::dto::{PageRequest, Paged, TimeEntryDto};
use crate::error::Result;
use crate::mapper::TimeEntryMapper;
use crate::repository::TimeEntryRepository;

/// Read/write facade over the time entry repository.
///
/// Maps between entity and DTO shapes on every call; holds no state of its
/// own, so it is freely shareable across tasks.
pub struct TimeEntryService {
    repository: Arc<dyn TimeEntryRepository>,
    mapper: TimeEntryMapper,
}

impl TimeEntryService {
    pub fn new(repository: Arc<dyn TimeEntryRepository>) -> Self {
        Self {
            repository,
            mapper: TimeEntryMapper::new(),
        }
    }

    /// Insert-or-update, returning the canonical persisted DTO.
    pub async fn save(&self, dto: TimeEntryDto) -> Result<TimeEntryDto> {
        tracing::debug!(id = ?dto.id, "request to save time entry");
        let entry = self.mapper.to_entity(dto);
        let saved = self.repository.save(entry).await?;
        Ok(self.mapper.to_dto(&saved))
    }

    /// Delete by id; missing ids are a no-op.
    pub async fn delete(&self, id: i64) -> Result<()> {
        tracing::debug!(id, "request to delete time entry");
        self.repository.delete(id).await
    }

    pub async fn find_one(&self, id: i64) -> Result<Option<TimeEntryDto>> {
        tracing::debug!(id, "request to get time entry");
        let entry = self.repository.find_one(id).await?;
        Ok(entry.map(|e| self.mapper.to_dto(&e)))
    }

    pub async fn find_all(&self, page: PageRequest) -> Result<Paged<TimeEntryDto>> {
        tracing::debug!(page = page.page, per_page = page.per_page, "request to get all time entries");
        let entries = self.repository.find_all(page).await?;
        Ok(entries.map(|e| self.mapper.to_dto(&e)))
    }

    /// All entries for `member_id` on the calendar day `date`.
    pub async fn find_by_member_and_date(
        &self,
        member_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntryDto>> {
        tracing::debug!(member_id, %date, "request to find time entries by member and date");
        let entries = self
            .repository
            .find_by_member_and_date(member_id, date)
            .await?;
        Ok(entries.iter().map(|e| self.mapper.to_dto(e)).collect())
    }
}
