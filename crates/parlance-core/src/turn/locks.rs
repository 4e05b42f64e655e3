//! Keyed per-chat locks.
//!
//! The store is last-write-wins per key, so two concurrent turns on the
//! same chat would race read-modify-write cycles and silently drop the
//! slower one's exchange. Turns on the same chat are therefore serialized
//! through a keyed async mutex; turns on different chats stay fully
//! concurrent.

use std::sync::Arc;

use dashmap::DashMap;
use parlance_types::conversation::ChatId;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Map of per-chat mutexes. One entry per chat ever seen by this process;
/// entries are a few dozen bytes and are not reclaimed.
#[derive(Default)]
pub struct ChatLocks {
    locks: DashMap<ChatId, Arc<Mutex<()>>>,
}

impl ChatLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the lock for a chat, waiting behind any in-flight turn on
    /// the same chat.
    pub async fn acquire(&self, chat_id: ChatId) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(chat_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    #[tokio::test]
    async fn test_same_chat_turns_are_serialized() {
        let locks = Arc::new(ChatLocks::new());
        let in_flight = Arc::new(AtomicUsize::new(0));
        let max_seen = Arc::new(AtomicUsize::new(0));

        let mut handles = Vec::new();
        for _ in 0..8 {
            let locks = Arc::clone(&locks);
            let in_flight = Arc::clone(&in_flight);
            let max_seen = Arc::clone(&max_seen);
            handles.push(tokio::spawn(async move {
                let _guard = locks.acquire(42).await;
                let now = in_flight.fetch_add(1, Ordering::SeqCst) + 1;
                max_seen.fetch_max(now, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_millis(5)).await;
                in_flight.fetch_sub(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(max_seen.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_distinct_chats_do_not_block_each_other() {
        let locks = ChatLocks::new();
        let guard_a = locks.acquire(1).await;
        // Holding chat 1 must not prevent acquiring chat 2.
        let guard_b = tokio::time::timeout(Duration::from_secs(1), locks.acquire(2))
            .await
            .expect("cross-chat lock contention");
        drop(guard_a);
        drop(guard_b);
    }
}
