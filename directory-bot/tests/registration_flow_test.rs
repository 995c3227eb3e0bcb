//! End-to-end registration dialogues through the real handler chain.

mod common;

use chrono::Duration;
use common::Harness;
use directory_bot::{RegistrationStep, SessionStore};

async fn register_marios(h: &Harness, sender: &str) -> String {
    h.conversation(
        sender,
        &[
            "register",
            "Mario's Pizza",
            "123 Main St",
            "+1 555 123 4567",
            "mario@pizza.com",
            "pizza, italian, delivery",
        ],
    )
    .await
}

async fn current_step(h: &Harness, sender: &str) -> Option<RegistrationStep> {
    h.components
        .sessions
        .get(sender)
        .await
        .unwrap()
        .and_then(|s| s.registration_state().map(|state| state.step))
}

/// **Test: a full registration by one sender is searchable by another.**
#[tokio::test]
async fn test_registration_then_search_by_other_sender() {
    let h = Harness::new();

    let reply = h.send("owner", "register").await;
    assert!(reply.contains("Step 1 of 5"));

    let reply = h.send("owner", "Mario's Pizza").await;
    assert!(reply.contains("✅ Business name: Mario's Pizza"));
    assert!(reply.contains("Step 2 of 5"));

    let reply = h
        .conversation("owner", &["123 Main St", "+1 555 123 4567", "mario@pizza.com"])
        .await;
    assert!(reply.contains("Step 5 of 5"));

    let reply = h.send("owner", "pizza, italian, delivery").await;
    assert!(reply.contains("🎉 Registration Complete!"));
    assert!(reply.contains("🏷️ Keywords: pizza, italian, delivery"));
    assert!(reply.contains("Business ID: #1"));
    assert_eq!(current_step(&h, "owner").await, None);

    let reply = h.send("customer", "Pizza").await;
    assert!(reply.contains("Found 1 business(es) for 'pizza'"));
    assert!(reply.contains("1. Mario's Pizza"));
    assert!(reply.contains("📍 123 Main St"));
    assert!(reply.contains("📞 +1 555 123 4567"));
    assert!(reply.contains("📧 mario@pizza.com"));

    let records = h.records.all().await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].registered_by, "owner");
    assert_eq!(records[0].registered_at, common::start_time());
}

/// **Test: cancelling mid-flow discards everything; no partial record is written.**
#[tokio::test]
async fn test_cancel_mid_flow_writes_nothing() {
    let h = Harness::new();

    let reply = h
        .conversation("owner", &["register", "Mario's Pizza", "123 Main St", "CANCEL"])
        .await;
    assert!(reply.contains("Registration cancelled"));
    assert_eq!(current_step(&h, "owner").await, None);
    assert!(h.records.all().await.is_empty());

    let reply = h.send("customer", "pizza").await;
    assert!(reply.contains("No businesses found for 'pizza'"));
}

/// **Test: `register` during a registration re-prompts the current step and keeps collected values.**
#[tokio::test]
async fn test_register_mid_flow_reprompts() {
    let h = Harness::new();
    h.conversation("owner", &["register", "Mario's Pizza"]).await;

    let reply = h.send("owner", "register").await;
    assert!(reply.contains("Step 2 of 5"));
    assert!(!reply.contains("Business name"));

    let session = h.components.sessions.get("owner").await.unwrap().unwrap();
    let state = session.registration_state().unwrap();
    assert_eq!(state.step, RegistrationStep::Address);
    assert_eq!(state.value(RegistrationStep::Name), Some("Mario's Pizza"));
}

/// **Test: an invalid phone is rejected without advancing; a valid one then advances.**
#[tokio::test]
async fn test_invalid_phone_then_valid() {
    let h = Harness::new();
    h.conversation("owner", &["register", "Mario's Pizza", "123 Main St"]).await;

    let reply = h.send("owner", "abc").await;
    assert!(reply.contains("⚠️ Invalid phone"));
    assert!(reply.contains("Step 3 of 5"));
    assert_eq!(current_step(&h, "owner").await, Some(RegistrationStep::Phone));

    let reply = h.send("owner", "+1 555 123 4567").await;
    assert!(reply.contains("✅ Phone saved!"));
    assert_eq!(current_step(&h, "owner").await, Some(RegistrationStep::Email));
}

/// **Test: keywords that normalize to nothing are rejected at the last step.**
#[tokio::test]
async fn test_empty_keywords_rejected() {
    let h = Harness::new();
    h.conversation(
        "owner",
        &["register", "Mario's Pizza", "123 Main St", "0712345678", "skip"],
    )
    .await;

    let reply = h.send("owner", " , ,").await;
    assert!(reply.contains("⚠️ Invalid keywords"));
    assert_eq!(current_step(&h, "owner").await, Some(RegistrationStep::Keywords));
    assert!(h.records.all().await.is_empty());
}

/// **Test: `skip` at the email step registers without an email.**
#[tokio::test]
async fn test_email_skip() {
    let h = Harness::new();
    let reply = h
        .conversation(
            "owner",
            &["register", "Corner Pharmacy", "8 Elm Rd", "0712345678", "skip", "pharmacy"],
        )
        .await;
    assert!(reply.contains("🎉 Registration Complete!"));
    assert!(!reply.contains("📧"));

    let records = h.records.all().await;
    assert_eq!(records[0].email, None);
    assert_eq!(records[0].keywords, vec!["pharmacy".to_string()]);
}

/// **Test: `cancel` with no registration replies and creates no session.**
#[tokio::test]
async fn test_cancel_without_session() {
    let h = Harness::new();
    let reply = h.send("stranger", "cancel").await;
    assert!(reply.contains("There is no registration in progress to cancel."));
    assert!(h.components.sessions.is_empty().await);
}

/// **Test: empty text mid-registration gets the welcome and leaves the session untouched.**
#[tokio::test]
async fn test_empty_text_mid_registration() {
    let h = Harness::new();
    h.conversation("owner", &["register", "Mario's Pizza"]).await;

    let reply = h.send("owner", "   ").await;
    assert!(reply.contains("👋 Welcome to Business Directory!"));
    assert_eq!(current_step(&h, "owner").await, Some(RegistrationStep::Address));
}

/// **Test: after the inactivity window the session is gone and text is a search again.**
#[tokio::test]
async fn test_expired_session_falls_back_to_search() {
    let h = Harness::new();
    h.conversation("owner", &["register", "Mario's Pizza"]).await;

    h.clock.advance(Duration::minutes(11));
    let reply = h.send("owner", "pizza").await;

    assert!(reply.contains("No businesses found for 'pizza'"));
    assert_eq!(current_step(&h, "owner").await, None);
    assert!(h.records.all().await.is_empty());
}

/// **Test: activity inside the window keeps the session alive.**
#[tokio::test]
async fn test_activity_refreshes_session() {
    let h = Harness::new();
    h.send("owner", "register").await;

    h.clock.advance(Duration::minutes(8));
    h.send("owner", "Mario's Pizza").await;
    h.clock.advance(Duration::minutes(8));

    let reply = h.send("owner", "123 Main St").await;
    assert!(reply.contains("✅ Address saved!"));
}

/// **Test: a failed write keeps the session at the keywords step; resending succeeds.**
#[tokio::test]
async fn test_persist_failure_keeps_session() {
    let h = Harness::new();
    h.records.fail_create(true);

    let reply = register_marios(&h, "owner").await;
    assert!(reply.contains("couldn't save your business"));
    assert_eq!(current_step(&h, "owner").await, Some(RegistrationStep::Keywords));
    assert!(h.records.all().await.is_empty());

    h.records.fail_create(false);
    let reply = h.send("owner", "pizza, italian, delivery").await;
    assert!(reply.contains("🎉 Registration Complete!"));
    assert_eq!(h.records.all().await.len(), 1);
}

/// **Test: two senders registering at once do not see each other's answers.**
#[tokio::test]
async fn test_interleaved_senders_are_isolated() {
    let h = Harness::new();
    h.send("a", "register").await;
    h.send("b", "register").await;
    h.send("a", "Alpha Bakery").await;
    h.send("b", "Beta Books").await;

    let (ra, rb) = tokio::join!(
        h.conversation("a", &["1 Alpha Rd", "0711111111", "skip", "bread"]),
        h.conversation("b", &["2 Beta Rd", "0722222222", "skip", "books"]),
    );
    assert!(ra.contains("🏢 Alpha Bakery"));
    assert!(rb.contains("🏢 Beta Books"));

    let mut names: Vec<String> = h.records.all().await.into_iter().map(|r| r.name).collect();
    names.sort();
    assert_eq!(names, vec!["Alpha Bakery".to_string(), "Beta Books".to_string()]);
}
