//! Search, location search, stats and failure replies through the real handler chain.

mod common;

use chrono::Duration;
use common::Harness;
use directory_bot::DirectoryConfig;

async fn register(h: &Harness, sender: &str, name: &str, address: &str, keywords: &str) {
    let reply = h
        .conversation(sender, &["register", name, address, "0712345678", "skip", keywords])
        .await;
    assert!(reply.contains("🎉 Registration Complete!"), "registration failed: {}", reply);
}

/// **Test: exact keyword outranks name match, which outranks keyword substring.**
#[tokio::test]
async fn test_search_ranking() {
    let h = Harness::new();
    register(&h, "o1", "Pizza Palace", "1 First St", "restaurant, italian").await;
    h.clock.advance(Duration::minutes(1));
    register(&h, "o2", "Luigi's", "2 Second St", "pizza").await;
    h.clock.advance(Duration::minutes(1));
    register(&h, "o3", "Slice House", "3 Third St", "pizzas").await;

    let reply = h.send("customer", "pizza").await;
    assert!(reply.contains("Found 3 business(es)"));
    let luigi = reply.find("1. Luigi's").expect("exact keyword first");
    let palace = reply.find("2. Pizza Palace").expect("name match second");
    let slice = reply.find("3. Slice House").expect("substring third");
    assert!(luigi < palace && palace < slice);
}

/// **Test: results are capped at the configured limit.**
#[tokio::test]
async fn test_search_result_cap() {
    let h = Harness::with_directory(DirectoryConfig {
        search_result_limit: 2,
        ..DirectoryConfig::default()
    });
    for i in 0..3 {
        register(&h, &format!("o{}", i), &format!("Cafe {}", i), "Main St", "coffee").await;
        h.clock.advance(Duration::minutes(1));
    }

    let reply = h.send("customer", "coffee").await;
    assert!(reply.contains("Found 2 business(es)"));
    assert!(reply.contains("1. Cafe 0"));
    assert!(reply.contains("2. Cafe 1"));
    assert!(!reply.contains("Cafe 2"));
}

/// **Test: `near <location>` matches on the address.**
#[tokio::test]
async fn test_near_location() {
    let h = Harness::new();
    register(&h, "o1", "Downtown Deli", "12 Market St, Downtown", "deli").await;
    register(&h, "o2", "Airport Inn", "Terminal Rd", "hotel").await;

    let reply = h.send("customer", "near downtown").await;
    assert!(reply.contains("near 'downtown'"));
    assert!(reply.contains("Downtown Deli"));
    assert!(!reply.contains("Airport Inn"));

    let reply = h.send("customer", "near mall").await;
    assert!(reply.contains("No businesses found near 'mall'"));
}

/// **Test: stats reports the active count, recent names and popular keywords.**
#[tokio::test]
async fn test_stats() {
    let h = Harness::new();
    register(&h, "o1", "Pizza Palace", "1 First St", "pizza, restaurant").await;
    register(&h, "o2", "Luigi's", "2 Second St", "pizza").await;

    let reply = h.send("customer", "stats").await;
    assert!(reply.contains("🏢 Total Businesses: 2"));
    assert!(reply.contains("• Luigi's"));
    assert!(reply.contains("• pizza (2)"));
}

/// **Test: help, contact and its aliases answer without touching the store.**
#[tokio::test]
async fn test_static_commands() {
    let h = Harness::new();
    h.records.fail_reads(true);

    assert!(h.send("u", "HELP").await.contains("🏢 Business Directory Bot"));
    assert!(h.send("u", "start").await.contains("🏢 Business Directory Bot"));
    assert!(h.send("u", "contact").await.contains("support@yourdomain.com"));
    assert!(h.send("u", "").await.contains("👋 Welcome"));
}

/// **Test: a failing store yields the generic apology, not "no results".**
#[tokio::test]
async fn test_store_failure_is_not_no_results() {
    let h = Harness::new();
    h.records.fail_reads(true);

    let reply = h.send("customer", "pizza").await;
    assert!(reply.contains("Sorry, something went wrong on our side."));
    assert!(!reply.contains("No businesses found"));
}

/// **Test: a store that outlives the timeout yields the generic apology.**
#[tokio::test]
async fn test_store_timeout_is_reported() {
    let h = Harness::with_directory(DirectoryConfig {
        store_timeout_ms: 50,
        ..DirectoryConfig::default()
    });
    h.records.delay(std::time::Duration::from_millis(500));

    let reply = h.send("customer", "pizza").await;
    assert!(reply.contains("Sorry, something went wrong on our side."));
}
