//! In-memory record store ordering and update semantics

use chrono::{DateTime, TimeZone, Utc};
use whatsflow::adapters::database::{RecordStore, StatusUpdate};
use whatsflow::adapters::memory::InMemoryStore;
use whatsflow::domain::{NewSubmission, SubmissionId, SubmissionStatus};

fn form(name: &str) -> NewSubmission {
    NewSubmission::builder()
        .full_name(name)
        .business_name(format!("{name} Enterprises"))
        .email(format!("{}@example.co.za", name.to_lowercase()))
        .whatsapp_number("+27821234567")
        .country("South Africa")
        .plan_selected("Starter")
        .message(Some("Interested in lead capture".to_string()))
        .build()
        .unwrap()
}

fn march(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

#[tokio::test]
async fn test_listing_is_newest_first() {
    let store = InMemoryStore::new();
    // Inserted out of chronological order
    store.insert_submission_at(form("Thabo"), march(2)).await.unwrap();
    store.insert_submission_at(form("Lerato"), march(3)).await.unwrap();
    store.insert_submission_at(form("Sipho"), march(1)).await.unwrap();

    let names: Vec<String> = store
        .list_submissions()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.full_name)
        .collect();
    assert_eq!(names, vec!["Lerato", "Thabo", "Sipho"]);

    let recent = store.recent_submissions(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].full_name, "Lerato");
}

#[tokio::test]
async fn test_equal_timestamps_break_ties_by_id() {
    let store = InMemoryStore::new();
    let first = store.insert_submission_at(form("Naledi"), march(5)).await.unwrap();
    let second = store.insert_submission_at(form("Zanele"), march(5)).await.unwrap();

    let listed = store.list_submissions().await.unwrap();
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
}

#[tokio::test]
async fn test_new_submission_defaults() {
    let store = InMemoryStore::new();
    let created = store.create_submission(form("Bongani")).await.unwrap();

    assert_eq!(created.id.value(), 1);
    assert_eq!(created.status, SubmissionStatus::Pending);
    assert_eq!(store.count_submissions(None).await.unwrap(), 1);
    assert_eq!(
        store
            .count_submissions(Some(SubmissionStatus::Converted))
            .await
            .unwrap(),
        0
    );
}

#[tokio::test]
async fn test_status_update_keeps_creation_time() {
    let store = InMemoryStore::new();
    let created = store.insert_submission_at(form("Ayanda"), march(8)).await.unwrap();

    let outcome = store
        .update_status(created.id, SubmissionStatus::Converted)
        .await
        .unwrap();
    let StatusUpdate::Updated(updated) = outcome else {
        panic!("expected the submission to be updated");
    };
    assert_eq!(updated.status, SubmissionStatus::Converted);
    assert_eq!(updated.created_at, march(8));

    // Moving back to an earlier status is allowed
    store
        .update_status(created.id, SubmissionStatus::Pending)
        .await
        .unwrap();
    let listed = store.list_submissions().await.unwrap();
    assert_eq!(listed[0].status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn test_unknown_id_is_a_no_op() {
    let store = InMemoryStore::new();
    store.create_submission(form("Kagiso")).await.unwrap();

    let outcome = store
        .update_status(SubmissionId::new(404).unwrap(), SubmissionStatus::Contacted)
        .await
        .unwrap();
    assert_eq!(outcome, StatusUpdate::NotFound);

    let listed = store.list_submissions().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].status, SubmissionStatus::Pending);
}

#[tokio::test]
async fn test_concurrent_inserts_get_distinct_ids() {
    let store = InMemoryStore::new();
    let mut handles = Vec::new();
    for i in 0..20 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.create_submission(form(&format!("Lead{i}"))).await.unwrap().id
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 20);
}
