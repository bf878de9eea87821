//! Refresh scheduler - One owned, cancellable timer keyed by view state
//!
//! Replaces the ambient global interval handle the old web viewer juggled:
//! the scheduler owns at most one background task, re-keys it on view
//! transitions, and suspends/resumes it when the viewer loses or regains
//! visibility. Activating the view that is already running is a no-op, so
//! duplicate intervals cannot stack up.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::client::view::ViewState;

/// Owns the single periodic refresh task
pub struct RefreshScheduler {
    interval: Duration,
    current: Option<ViewState>,
    task: Option<JoinHandle<()>>,
    suspended: bool,
}

impl RefreshScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            current: None,
            task: None,
            suspended: false,
        }
    }

    /// Key the refresh task to a view
    ///
    /// Cancels any task keyed to a different view and spawns a new one whose
    /// first tick fires immediately, so activation doubles as the initial
    /// fetch. While suspended only the key is recorded; `resume` starts the
    /// task.
    pub fn activate<F, Fut>(&mut self, view: ViewState, tick: F)
    where
        F: Fn(ViewState) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        if self.suspended {
            self.current = Some(view);
            return;
        }
        if self.current == Some(view) && self.is_running() {
            return;
        }

        self.cancel_task();
        self.current = Some(view);

        let interval = self.interval;
        self.task = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tick(view).await;
            }
        }));
    }

    /// Stop refreshing but remember the active view (hidden tab)
    pub fn suspend(&mut self) {
        self.suspended = true;
        self.cancel_task();
    }

    /// Restart the timer for the remembered view, if there is one
    pub fn resume<F, Fut>(&mut self, tick: F)
    where
        F: Fn(ViewState) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        if !self.suspended {
            return;
        }
        self.suspended = false;
        if let Some(view) = self.current {
            self.activate(view, tick);
        }
    }

    pub fn is_running(&self) -> bool {
        self.task
            .as_ref()
            .map(|task| !task.is_finished())
            .unwrap_or(false)
    }

    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        self.cancel_task();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::AdventureId;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counting_tick(
        count: Arc<AtomicUsize>,
    ) -> impl Fn(ViewState) -> std::pin::Pin<Box<dyn Future<Output = ()> + Send>> {
        move |_| {
            let count = count.clone();
            Box::pin(async move {
                count.fetch_add(1, Ordering::SeqCst);
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_fires_immediately_then_on_interval() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        tokio::time::sleep(Duration::from_secs(9)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reactivating_same_view_does_not_stack_timers() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Same view again: no new task, no extra immediate tick.
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // One interval's worth later the single timer has ticked once more.
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_view_transition_rekeys_the_timer() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;

        let party = ViewState::AdventureList.view_party(AdventureId::new(1));
        scheduler.activate(party, counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Immediate tick for the new view
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_suspend_stops_ticking_and_resume_restarts() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;

        scheduler.suspend();
        assert!(!scheduler.is_running());
        tokio::time::sleep(Duration::from_secs(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);

        scheduler.resume(counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 2);
        assert!(scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_resume_without_active_view_stays_idle() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.suspend();
        scheduler.resume(counting_tick(count.clone()));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(!scheduler.is_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activation_while_suspended_waits_for_resume() {
        let count = Arc::new(AtomicUsize::new(0));
        let mut scheduler = RefreshScheduler::new(Duration::from_secs(3));
        scheduler.suspend();
        scheduler.activate(ViewState::AdventureList, counting_tick(count.clone()));

        tokio::time::sleep(Duration::from_secs(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 0);

        scheduler.resume(counting_tick(count.clone()));
        tokio::time::sleep(Duration::from_millis(10)).await;
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
