//! Time entry persistence seam.
//!
//! The core depends on [`TimeEntryRepository`] only; storage engines plug in
//! behind it. Implementations must make each call atomic: a save or delete
//! either fully applies or leaves the store untouched.
//!
//! [`InMemoryTimeEntryRepository`] is the bundled backend, suitable for tests
//! and development.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::{Days, NaiveDate, NaiveTime};
use tokio::sync::RwLock;

use crate::domain::TimeEntry;
use crate::dto::{PageRequest, Paged};
use crate::error::Result;

/// Repository abstraction over time entry storage.
#[async_trait]
pub trait TimeEntryRepository: Send + Sync {
    /// Insert-or-update. An entry with a known id overwrites the stored
    /// record; an entry without one is assigned a fresh id. Returns the
    /// canonical persisted entry.
    async fn save(&self, entry: TimeEntry) -> Result<TimeEntry>;

    /// Remove the entry with `id`. Missing ids are a silent no-op.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Look up one entry; `None` for a missing id, never an error.
    async fn find_one(&self, id: i64) -> Result<Option<TimeEntry>>;

    /// Page through all entries in stable id order.
    async fn find_all(&self, page: PageRequest) -> Result<Paged<TimeEntry>>;

    /// All entries for `member_id` whose timestamp falls on `date`.
    ///
    /// This is a range query over `[date 00:00, date+1 00:00)`, not an
    /// equality check — stored timestamps carry time-of-day components.
    async fn find_by_member_and_date(
        &self,
        member_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntry>>;
}

/// Map-backed repository with an atomic id sequence.
#[derive(Debug)]
pub struct InMemoryTimeEntryRepository {
    entries: RwLock<HashMap<i64, TimeEntry>>,
    next_id: AtomicI64,
}

impl Default for InMemoryTimeEntryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTimeEntryRepository {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl TimeEntryRepository for InMemoryTimeEntryRepository {
    async fn save(&self, mut entry: TimeEntry) -> Result<TimeEntry> {
        let mut entries = self.entries.write().await;
        let id = match entry.id {
            Some(id) => {
                // Keep the sequence ahead of explicitly supplied ids.
                self.next_id.fetch_max(id + 1, Ordering::SeqCst);
                id
            }
            None => self.next_id.fetch_add(1, Ordering::SeqCst),
        };
        entry.id = Some(id);
        entries.insert(id, entry.clone());
        Ok(entry)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.entries.write().await.remove(&id);
        Ok(())
    }

    async fn find_one(&self, id: i64) -> Result<Option<TimeEntry>> {
        Ok(self.entries.read().await.get(&id).cloned())
    }

    async fn find_all(&self, page: PageRequest) -> Result<Paged<TimeEntry>> {
        let entries = self.entries.read().await;
        let mut all: Vec<TimeEntry> = entries.values().cloned().collect();
        all.sort_by_key(|e| e.id);

        let total = all.len() as u64;
        let items: Vec<TimeEntry> = all
            .into_iter()
            .skip(page.offset())
            .take(page.limit())
            .collect();

        Ok(Paged::new(items, page, total))
    }

    async fn find_by_member_and_date(
        &self,
        member_id: i64,
        date: NaiveDate,
    ) -> Result<Vec<TimeEntry>> {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + Days::new(1);

        let entries = self.entries.read().await;
        let mut found: Vec<TimeEntry> = entries
            .values()
            .filter(|e| e.member_id == member_id && e.date >= start && e.date < end)
            .cloned()
            .collect();
        found.sort_by_key(|e| e.id);
        Ok(found)
    }
}
