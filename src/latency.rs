//! Simulated-latency commit timer.
//!
//! Auth and onboarding writes sit behind a fixed artificial delay that mimics
//! a network round trip. By default the timer is never canceled — a write
//! scheduled before navigating away still lands. `CommitTimer` makes the
//! pending write an explicit, cancelable handle, so call sites that *should*
//! suppress a stale write can do so deterministically.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Schedules futures to run after a fixed artificial delay.
#[derive(Debug, Clone, Copy)]
pub struct CommitTimer {
    delay: Duration,
}

impl CommitTimer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// No delay at all (tests).
    pub fn immediate() -> Self {
        Self {
            delay: Duration::ZERO,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `commit` to run after the delay. The returned handle can be
    /// awaited for completion or canceled to suppress the write; dropping it
    /// detaches the task, which then fires regardless.
    pub fn schedule<F>(&self, commit: F) -> CommitHandle<F::Output>
    where
        F: Future + Send + 'static,
        F::Output: Send + 'static,
    {
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            commit.await
        });
        CommitHandle { handle }
    }

    /// Just wait out the delay (for handlers that commit inline).
    pub async fn pause(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}

/// A pending delayed commit.
pub struct CommitHandle<T> {
    handle: JoinHandle<T>,
}

impl<T> CommitHandle<T> {
    /// Abort the pending commit. If the delay has not yet elapsed, the write
    /// never happens.
    pub fn cancel(self) {
        self.handle.abort();
    }

    /// Wait for the commit to finish. `None` if it was canceled.
    pub async fn join(self) -> Option<T> {
        self.handle.await.ok()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use super::*;

    #[tokio::test]
    async fn scheduled_commit_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let timer = CommitTimer::new(Duration::from_millis(10));

        let flag = Arc::clone(&fired);
        let handle = timer.schedule(async move {
            flag.store(true, Ordering::SeqCst);
        });

        handle.join().await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn canceled_commit_never_fires() {
        let fired = Arc::new(AtomicBool::new(false));
        let timer = CommitTimer::new(Duration::from_millis(50));

        let flag = Arc::clone(&fired);
        let handle = timer.schedule(async move {
            flag.store(true, Ordering::SeqCst);
        });

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn detached_commit_still_lands() {
        // Dropping the handle must not cancel the write — navigating away
        // mid-delay leaves the pending write running.
        let fired = Arc::new(AtomicBool::new(false));
        let timer = CommitTimer::new(Duration::from_millis(10));

        let flag = Arc::clone(&fired);
        drop(timer.schedule(async move {
            flag.store(true, Ordering::SeqCst);
        }));

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(fired.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn immediate_timer_skips_sleep() {
        let timer = CommitTimer::immediate();
        timer.pause().await;
        let handle = timer.schedule(async { 7 });
        assert_eq!(handle.join().await, Some(7));
    }
}
