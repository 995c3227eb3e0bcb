//! Unit tests for BusinessRepository.
//!
//! Covers create/query_active round trip, status filtering, retrieval order, and aggregate queries.

use crate::business_repo::BusinessRepository;
use crate::models::{BusinessFilter, BusinessStatus, NewBusiness};
use crate::repository::RecordStore;
use chrono::{Duration, TimeZone, Utc};

fn business(name: &str, keywords: &[&str], minutes: i64) -> NewBusiness {
    NewBusiness {
        name: name.to_string(),
        address: Some("123 Main St, Downtown".to_string()),
        phone: Some("+15551234567".to_string()),
        email: None,
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        registered_by: "sender-a".to_string(),
        registered_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + Duration::minutes(minutes),
    }
}

async fn memory_repo() -> BusinessRepository {
    BusinessRepository::new("sqlite::memory:")
        .await
        .expect("Failed to create repository")
}

#[tokio::test]
async fn test_create_and_query_round_trip() {
    let repo = memory_repo().await;

    let id = repo
        .create(&business("Mario's Pizza", &["pizza", "italian"], 0))
        .await
        .expect("Failed to save business");

    let found = repo
        .query_active(&BusinessFilter::Matches("pizza".to_string()))
        .await
        .expect("Failed to query");

    assert_eq!(found.len(), 1);
    let record = &found[0];
    assert_eq!(record.id, id);
    assert_eq!(record.name, "Mario's Pizza");
    assert_eq!(record.name_normalized, "mario's pizza");
    assert_eq!(record.keywords, vec!["pizza".to_string(), "italian".to_string()]);
    assert_eq!(record.email, None);
    assert_eq!(record.status, BusinessStatus::Active);
    assert_eq!(record.registered_at, Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
}

#[tokio::test]
async fn test_query_active_excludes_inactive() {
    let repo = memory_repo().await;
    let id = repo.create(&business("Closed Diner", &["food"], 0)).await.unwrap();

    assert!(repo.set_status(id, BusinessStatus::Inactive).await.unwrap());

    let found = repo
        .query_active(&BusinessFilter::Matches("food".to_string()))
        .await
        .unwrap();
    assert!(found.is_empty());
    assert_eq!(repo.count_active().await.unwrap(), 0);
}

#[tokio::test]
async fn test_set_status_unknown_id() {
    let repo = memory_repo().await;
    assert!(!repo.set_status(42, BusinessStatus::Inactive).await.unwrap());
}

#[tokio::test]
async fn test_query_active_orders_oldest_first() {
    let repo = memory_repo().await;
    repo.create(&business("Late Pizza", &["pizza"], 30)).await.unwrap();
    repo.create(&business("Early Pizza", &["pizza"], 0)).await.unwrap();

    let found = repo
        .query_active(&BusinessFilter::Matches("pizza".to_string()))
        .await
        .unwrap();

    let names: Vec<&str> = found.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Early Pizza", "Late Pizza"]);
}

#[tokio::test]
async fn test_like_wildcards_are_literal() {
    let repo = memory_repo().await;
    repo.create(&business("Plain Shop", &["shop"], 0)).await.unwrap();

    let found = repo
        .query_active(&BusinessFilter::Matches("%".to_string()))
        .await
        .unwrap();
    assert!(found.is_empty());
}

#[tokio::test]
async fn test_address_filter() {
    let repo = memory_repo().await;
    repo.create(&business("Mario's Pizza", &["pizza"], 0)).await.unwrap();

    let near = repo
        .query_active(&BusinessFilter::AddressContains("downtown".to_string()))
        .await
        .unwrap();
    let far = repo
        .query_active(&BusinessFilter::AddressContains("airport".to_string()))
        .await
        .unwrap();

    assert_eq!(near.len(), 1);
    assert!(far.is_empty());
}

#[tokio::test]
async fn test_recent_and_popular_keywords() {
    let repo = memory_repo().await;
    repo.create(&business("A", &["pizza", "food"], 0)).await.unwrap();
    repo.create(&business("B", &["pizza"], 10)).await.unwrap();
    repo.create(&business("C", &["hotel", "food"], 20)).await.unwrap();

    let recent = repo.recent_active(2).await.unwrap();
    let names: Vec<&str> = recent.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["C", "B"]);

    let popular = repo.popular_keywords(5).await.unwrap();
    let pairs: Vec<(&str, i64)> = popular.iter().map(|k| (k.keyword.as_str(), k.count)).collect();
    assert_eq!(pairs, vec![("food", 2), ("pizza", 2), ("hotel", 1)]);

    assert_eq!(repo.count_active().await.unwrap(), 3);
}
