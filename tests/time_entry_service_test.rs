//! Tests for the time entry CRUD/query facade

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use worklog::{
    InMemoryTimeEntryRepository, PageRequest, TimeEntryDto, TimeEntryService,
};

fn service() -> (TimeEntryService, Arc<InMemoryTimeEntryRepository>) {
    let repo = Arc::new(InMemoryTimeEntryRepository::new());
    (TimeEntryService::new(repo.clone()), repo)
}

fn dto(member_id: i64, date: DateTime<Utc>) -> TimeEntryDto {
    TimeEntryDto {
        id: None,
        member_id,
        project_id: 1,
        date,
        hours: 8.0,
        description: None,
    }
}

#[tokio::test]
async fn test_save_without_id_creates_one_entry() {
    let (service, repo) = service();

    let saved = service.save(dto(1, Utc::now())).await.unwrap();

    assert!(saved.id.is_some());
    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_save_with_existing_id_updates_in_place() {
    let (service, repo) = service();

    let saved = service.save(dto(1, Utc::now())).await.unwrap();
    let mut update = saved.clone();
    update.hours = 4.0;
    update.description = Some("half day".to_string());

    let updated = service.save(update).await.unwrap();

    assert_eq!(updated.id, saved.id);
    assert_eq!(repo.len().await, 1);

    let found = service.find_one(saved.id.unwrap()).await.unwrap().unwrap();
    assert_eq!(found.hours, 4.0);
    assert_eq!(found.description.as_deref(), Some("half day"));
}

#[tokio::test]
async fn test_delete_missing_id_is_a_no_op() {
    let (service, repo) = service();
    service.save(dto(1, Utc::now())).await.unwrap();

    service.delete(999).await.unwrap();

    assert_eq!(repo.len().await, 1);
}

#[tokio::test]
async fn test_delete_removes_entry() {
    let (service, repo) = service();
    let saved = service.save(dto(1, Utc::now())).await.unwrap();

    service.delete(saved.id.unwrap()).await.unwrap();

    assert_eq!(repo.len().await, 0);
}

#[tokio::test]
async fn test_find_one_missing_returns_none() {
    let (service, _repo) = service();
    assert!(service.find_one(42).await.unwrap().is_none());
}

#[tokio::test]
async fn test_find_all_pages_in_id_order() {
    let (service, _repo) = service();
    for _ in 0..5 {
        service.save(dto(1, Utc::now())).await.unwrap();
    }

    let page = service.find_all(PageRequest::new(2, 2)).await.unwrap();

    assert_eq!(page.total, 5);
    assert_eq!(page.total_pages(), 3);
    let ids: Vec<i64> = page.items.iter().filter_map(|e| e.id).collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn test_find_by_member_and_date_filters_member() {
    let (service, _repo) = service();
    let noon = Utc.with_ymd_and_hms(2021, 3, 15, 12, 0, 0).unwrap();
    service.save(dto(1, noon)).await.unwrap();
    service.save(dto(2, noon)).await.unwrap();

    let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();
    let found = service.find_by_member_and_date(1, date).await.unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].member_id, 1);
}

#[tokio::test]
async fn test_find_by_member_and_date_uses_day_window() {
    let (service, _repo) = service();
    let date = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();

    let midnight = Utc.with_ymd_and_hms(2021, 3, 15, 0, 0, 0).unwrap();
    let just_before_end = Utc.with_ymd_and_hms(2021, 3, 16, 0, 0, 0).unwrap()
        - Duration::milliseconds(1);
    let next_midnight = Utc.with_ymd_and_hms(2021, 3, 16, 0, 0, 0).unwrap();
    let just_before_start = midnight - Duration::milliseconds(1);

    service.save(dto(1, midnight)).await.unwrap();
    service.save(dto(1, just_before_end)).await.unwrap();
    service.save(dto(1, next_midnight)).await.unwrap();
    service.save(dto(1, just_before_start)).await.unwrap();

    let found = service.find_by_member_and_date(1, date).await.unwrap();

    let dates: Vec<DateTime<Utc>> = found.iter().map(|e| e.date).collect();
    assert_eq!(found.len(), 2);
    assert!(dates.contains(&midnight));
    assert!(dates.contains(&just_before_end));
}
