//! Time as a capability.
//!
//! The contact controller never touches an ambient timer. It asks a [`Clock`]
//! for sleeps (used to bound network calls) and for scheduled callbacks (used
//! for the auto-reset), so tests can drive time with [`manual::ManualClock`].

use std::{future::Future, pin::pin, time::Duration};

use futures::future::{select, Either};
use thiserror::Error;

pub trait Clock {
    type Sleep: Future<Output = ()>;
    type Handle: TimerHandle;

    /// Resolve after `duration`. Dropping the sleep early releases its
    /// underlying timer.
    fn sleep(&self, duration: Duration) -> Self::Sleep;

    /// Run `task` once after `delay`, unless the returned handle is cancelled
    /// first.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait TimerHandle {
    fn cancel(self);
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("timed out after {0:?}")]
pub struct Elapsed(pub Duration);

/// Race `fut` against a sleep of `limit` on `clock`.
pub async fn with_timeout<C, F>(clock: &C, limit: Duration, fut: F) -> Result<F::Output, Elapsed>
where
    C: Clock,
    F: Future,
{
    let fut = pin!(fut);
    let sleep = pin!(clock.sleep(limit));
    match select(fut, sleep).await {
        Either::Left((out, _)) => Ok(out),
        Either::Right(((), _)) => Err(Elapsed(limit)),
    }
}


#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::manual::ManualClock;
    use super::*;

    #[test]
    fn test_scheduled_task_runs_once_due() {
        let clock = ManualClock::new();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let _handle = clock.schedule(Duration::from_millis(3000), Box::new(move || flag.set(true)));

        clock.advance(Duration::from_millis(2999));
        assert!(!ran.get());
        assert_eq!(clock.pending_tasks(), 1);

        clock.advance(Duration::from_millis(1));
        assert!(ran.get());
        assert_eq!(clock.pending_tasks(), 0);
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let clock = ManualClock::new();
        let ran = Rc::new(Cell::new(false));
        let flag = ran.clone();
        let handle = clock.schedule(Duration::from_secs(1), Box::new(move || flag.set(true)));
        handle.cancel();

        clock.advance(Duration::from_secs(10));
        assert!(!ran.get());
    }

    #[tokio::test]
    async fn test_with_timeout_passes_through_ready_future() {
        let clock = ManualClock::new();
        let res = with_timeout(&clock, Duration::from_secs(15), async { 7 }).await;
        assert_eq!(res, Ok(7));
    }

    #[tokio::test]
    async fn test_with_timeout_releases_sleep_when_future_wins() {
        let clock = ManualClock::new();
        let res = with_timeout(&clock, Duration::from_secs(15), async {
            tokio::task::yield_now().await;
            "done"
        })
        .await;
        assert_eq!(res, Ok("done"));
        assert_eq!(clock.live_sleeps(), 0);
    }

    #[tokio::test]
    async fn test_with_timeout_expires_on_virtual_time() {
        let clock = ManualClock::new();
        let limit = Duration::from_secs(15);
        let (res, ()) = tokio::join!(
            with_timeout(&clock, limit, std::future::pending::<()>()),
            async {
                tokio::task::yield_now().await;
                clock.advance(limit);
            }
        );
        assert_eq!(res, Err(Elapsed(limit)));
        assert_eq!(clock.live_sleeps(), 0);
    }
}
