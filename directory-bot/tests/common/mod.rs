//! Shared fixtures for directory-bot integration tests: a recording Bot, a record store with
//! injectable failures, and a harness that drives the real handler chain.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use directory_bot::{
    build_components, build_handler_chain, BaseConfig, BotConfig, BotComponents, DirectoryConfig,
};
use directory_core::{Bot, Clock, HandlerResponse, InboundEvent, ManualClock, Result};
use handler_chain::HandlerChain;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use storage::{
    BusinessFilter, BusinessRecord, BusinessStatus, InMemoryRecordStore, KeywordCount,
    NewBusiness, RecordStore, StorageError,
};
use tokio::sync::mpsc;

/// One recorded call to `send_text(sender_id, text)`.
#[derive(Debug, Clone)]
pub struct SentRecord {
    pub sender_id: String,
    pub text: String,
}

/// Mock Bot that forwards every send to a channel held by the test.
pub struct MockBot {
    sent_tx: mpsc::UnboundedSender<SentRecord>,
}

impl MockBot {
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<SentRecord>) {
        let (sent_tx, sent_rx) = mpsc::unbounded_channel();
        (Arc::new(Self { sent_tx }), sent_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, sender_id: &str, text: &str) -> Result<()> {
        let _ = self.sent_tx.send(SentRecord {
            sender_id: sender_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}

/// In-memory record store whose calls can be made to fail or stall.
#[derive(Default)]
pub struct ScriptedStore {
    inner: InMemoryRecordStore,
    fail_create: AtomicBool,
    fail_reads: AtomicBool,
    delay_ms: AtomicU64,
}

impl ScriptedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Every call sleeps this long before answering.
    pub fn delay(&self, by: Duration) {
        self.delay_ms.store(by.as_millis() as u64, Ordering::SeqCst);
    }

    pub async fn all(&self) -> Vec<BusinessRecord> {
        self.inner.all().await
    }

    async fn stall(&self) {
        let ms = self.delay_ms.load(Ordering::SeqCst);
        if ms > 0 {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }

    async fn read_gate(&self) -> std::result::Result<(), StorageError> {
        self.stall().await;
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StorageError::Database("injected read failure".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for ScriptedStore {
    async fn create(&self, business: &NewBusiness) -> std::result::Result<i64, StorageError> {
        self.stall().await;
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(StorageError::Database("injected write failure".to_string()));
        }
        self.inner.create(business).await
    }

    async fn query_active(
        &self,
        filter: &BusinessFilter,
    ) -> std::result::Result<Vec<BusinessRecord>, StorageError> {
        self.read_gate().await?;
        self.inner.query_active(filter).await
    }

    async fn count_active(&self) -> std::result::Result<i64, StorageError> {
        self.read_gate().await?;
        self.inner.count_active().await
    }

    async fn recent_active(&self, limit: usize) -> std::result::Result<Vec<BusinessRecord>, StorageError> {
        self.read_gate().await?;
        self.inner.recent_active(limit).await
    }

    async fn popular_keywords(&self, limit: usize) -> std::result::Result<Vec<KeywordCount>, StorageError> {
        self.read_gate().await?;
        self.inner.popular_keywords(limit).await
    }

    async fn set_status(&self, id: i64, status: BusinessStatus) -> std::result::Result<bool, StorageError> {
        self.inner.set_status(id, status).await
    }
}

pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

pub fn test_config(directory: DirectoryConfig) -> BotConfig {
    BotConfig {
        base: BaseConfig {
            bot_token: None,
            database_url: "sqlite::memory:".to_string(),
            log_file: "logs/directory-bot-test.log".to_string(),
        },
        directory,
    }
}

/// Real components and chain over a [`ScriptedStore`] and a [`ManualClock`].
pub struct Harness {
    pub chain: HandlerChain,
    pub components: BotComponents,
    pub clock: ManualClock,
    pub records: Arc<ScriptedStore>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_directory(DirectoryConfig::default())
    }

    pub fn with_directory(directory: DirectoryConfig) -> Self {
        let config = test_config(directory);
        let clock = ManualClock::new(start_time());
        let records = Arc::new(ScriptedStore::new());
        let components = build_components(&config, records.clone(), Arc::new(clock.clone()));
        let chain = build_handler_chain(&components);
        Self {
            chain,
            components,
            clock,
            records,
        }
    }

    /// Sends one message through the chain and returns the reply text.
    pub async fn send(&self, sender_id: &str, text: &str) -> String {
        let event = InboundEvent::new(sender_id, text, self.clock.now());
        match self.chain.handle(&event).await.unwrap() {
            HandlerResponse::Reply(text) => text,
            other => panic!("expected a reply, got {:?}", other),
        }
    }

    /// Runs `texts` in order for one sender; returns the last reply.
    pub async fn conversation(&self, sender_id: &str, texts: &[&str]) -> String {
        let mut last = String::new();
        for text in texts {
            last = self.send(sender_id, text).await;
        }
        last
    }
}
