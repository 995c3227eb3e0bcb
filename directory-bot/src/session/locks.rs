//! One async mutex per sender so events from the same sender are handled one at a time.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::sync::OwnedMutexGuard;

type LockMap = HashMap<String, Arc<tokio::sync::Mutex<()>>>;

#[derive(Clone, Default)]
pub struct SenderLocks {
    locks: Arc<Mutex<LockMap>>,
}

/// Held while one event for `sender_id` is processed. Dropping it releases the sender.
pub struct SenderGuard {
    sender_id: String,
    locks: Arc<Mutex<LockMap>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl SenderLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn acquire(&self, sender_id: &str) -> SenderGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            locks
                .entry(sender_id.to_string())
                .or_insert_with(|| Arc::new(tokio::sync::Mutex::new(())))
                .clone()
        };
        let guard = lock.lock_owned().await;
        SenderGuard {
            sender_id: sender_id.to_string(),
            locks: self.locks.clone(),
            guard: Some(guard),
        }
    }

    /// Senders with a live lock entry.
    pub fn tracked(&self) -> usize {
        self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner()).len()
    }
}

impl Drop for SenderGuard {
    fn drop(&mut self) {
        drop(self.guard.take());
        let mut locks = self.locks.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        // Only the map holds the mutex now: nobody is waiting, so the entry can go.
        if let Some(lock) = locks.get(&self.sender_id) {
            if Arc::strong_count(lock) == 1 {
                locks.remove(&self.sender_id);
            }
        }
    }
}
