use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Single-slot trailing debouncer. Each [`Debouncer::push`] replaces the
/// pending timer; a value is committed only after `delay` passes without a
/// newer push. Commits are published on a `watch` channel.
///
/// `push` spawns onto the current tokio runtime and panics outside of one.
pub struct Debouncer<T> {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
    committed: Arc<watch::Sender<T>>,
    commits: Arc<AtomicU64>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(delay: Duration, initial: T) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self {
            delay,
            pending: Mutex::new(None),
            committed: Arc::new(tx),
            commits: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn push(&self, value: T) {
        let committed = self.committed.clone();
        let commits = self.commits.clone();
        let deadline = tokio::time::Instant::now() + self.delay;
        let mut slot = self.pending.lock().unwrap_or_else(|err| err.into_inner());
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        *slot = Some(tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            committed.send_replace(value);
            commits.fetch_add(1, Ordering::SeqCst);
        }));
    }

    /// Commits `value` right away, discarding any pending one.
    pub fn commit_now(&self, value: T) {
        self.cancel();
        self.committed.send_replace(value);
        self.commits.fetch_add(1, Ordering::SeqCst);
    }

    /// Drops the pending value, if any, without committing it.
    pub fn cancel(&self) {
        let mut slot = self.pending.lock().unwrap_or_else(|err| err.into_inner());
        if let Some(previous) = slot.take() {
            previous.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        let slot = self.pending.lock().unwrap_or_else(|err| err.into_inner());
        slot.as_ref().map_or(false, |handle| !handle.is_finished())
    }

    pub fn current(&self) -> T {
        self.committed.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }

    pub fn commit_count(&self) -> u64 {
        self.commits.load(Ordering::SeqCst)
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        let slot = self.pending.get_mut().unwrap_or_else(|err| err.into_inner());
        if let Some(handle) = slot.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Instant};

    async fn settle() {
        for _ in 0..8 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn commits_once_after_last_keystroke() {
        let debouncer = Debouncer::new(Duration::from_millis(400), String::new());
        let mut rx = debouncer.subscribe();
        let start = Instant::now();

        debouncer.push("P".to_string());
        advance(Duration::from_millis(100)).await;
        debouncer.push("Po".to_string());
        advance(Duration::from_millis(50)).await;
        debouncer.push("Pom".to_string());

        rx.changed().await.unwrap();
        assert_eq!(start.elapsed(), Duration::from_millis(550));
        assert_eq!(*rx.borrow_and_update(), "Pom");

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert!(!rx.has_changed().unwrap());
        assert_eq!(debouncer.commit_count(), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_discards_pending_value() {
        let debouncer = Debouncer::new(Duration::from_millis(400), "initial".to_string());
        debouncer.push("typed".to_string());
        assert!(debouncer.is_pending());
        debouncer.cancel();

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(debouncer.current(), "initial");
        assert_eq!(debouncer.commit_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn commit_now_supersedes_pending_push() {
        let debouncer = Debouncer::new(Duration::from_millis(400), String::new());
        debouncer.push("Po".to_string());
        debouncer.commit_now("Pomme".to_string());
        assert_eq!(debouncer.current(), "Pomme");

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(debouncer.current(), "Pomme");
        assert_eq!(debouncer.commit_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn spaced_pushes_each_commit() {
        let debouncer = Debouncer::new(Duration::from_millis(400), 0u32);
        debouncer.push(1);
        advance(Duration::from_millis(401)).await;
        settle().await;
        assert_eq!(debouncer.current(), 1);

        debouncer.push(2);
        advance(Duration::from_millis(401)).await;
        settle().await;
        assert_eq!(debouncer.current(), 2);
        assert_eq!(debouncer.commit_count(), 2);
    }
}
