use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

/// Running session for one lookup slot
#[derive(Debug, Clone)]
pub struct SessionHandle {
    pub slot: String,
    pub id: u64,
    pub cancel: CancellationToken,
}

/// At most one active session per slot. Starting a session cancels the
/// previous one for the same slot, there is no queueing.
pub struct SessionRegistry {
    root: CancellationToken,
    next_id: AtomicU64,
    active: Mutex<HashMap<String, SessionHandle>>,
}

impl SessionRegistry {
    pub fn new(root: CancellationToken) -> Self {
        Self {
            root,
            next_id: AtomicU64::new(1),
            active: Mutex::new(HashMap::new()),
        }
    }

    pub async fn start(&self, slot: &str) -> SessionHandle {
        let mut active = self.active.lock().await;

        if let Some(previous) = active.remove(slot) {
            tracing::debug!("Stopping session {} for '{}'", previous.id, slot);
            previous.cancel.cancel();
        }

        let handle = SessionHandle {
            slot: slot.to_string(),
            id: self.next_id.fetch_add(1, Ordering::Relaxed),
            cancel: self.root.child_token(),
        };
        active.insert(slot.to_string(), handle.clone());

        handle
    }

    /// Forget `handle` unless a newer session already replaced it
    pub async fn finish(&self, handle: &SessionHandle) {
        let mut active = self.active.lock().await;
        if active.get(&handle.slot).is_some_and(|s| s.id == handle.id) {
            active.remove(&handle.slot);
        }
    }

    pub async fn cancel(&self, slot: &str) -> bool {
        match self.active.lock().await.remove(slot) {
            Some(handle) => {
                handle.cancel.cancel();
                true
            }
            None => false,
        }
    }

    pub async fn cancel_all(&self) {
        for (_, handle) in self.active.lock().await.drain() {
            handle.cancel.cancel();
        }
    }

    pub async fn active_count(&self) -> usize {
        self.active.lock().await.len()
    }
}
