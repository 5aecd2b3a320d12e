use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
    time::Duration,
};

use futures::channel::oneshot;
use leptos::prelude::{set_timeout_with_handle, TimeoutHandle};

use crate::timer::{Clock, TimerHandle};

/// `setTimeout`-backed clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserClock;

pub struct BrowserTimer(Option<TimeoutHandle>);

impl TimerHandle for BrowserTimer {
    fn cancel(self) {
        if let Some(handle) = self.0 {
            handle.clear();
        }
    }
}

/// Pending `setTimeout`. Dropping it before it fires clears the timeout.
pub struct BrowserSleep {
    // `None` when no timer could be started; the sleep then never resolves
    rx: Option<oneshot::Receiver<()>>,
    handle: Option<TimeoutHandle>,
}

impl Future for BrowserSleep {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let Some(rx) = self.rx.as_mut() else {
            return Poll::Pending;
        };
        match Pin::new(rx).poll(cx) {
            Poll::Ready(_) => {
                self.rx = None;
                self.handle = None;
                Poll::Ready(())
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

impl Drop for BrowserSleep {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.clear();
        }
    }
}

impl Clock for BrowserClock {
    type Sleep = BrowserSleep;
    type Handle = BrowserTimer;

    fn sleep(&self, duration: Duration) -> Self::Sleep {
        let (tx, rx) = oneshot::channel::<()>();
        match set_timeout_with_handle(
            move || {
                let _ = tx.send(());
            },
            duration,
        ) {
            Ok(handle) => BrowserSleep {
                rx: Some(rx),
                handle: Some(handle),
            },
            Err(e) => {
                // without a timer the call is simply unbounded
                log::warn!("could not start sleep timer: {e:?}");
                BrowserSleep {
                    rx: None,
                    handle: None,
                }
            }
        }
    }

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle {
        match set_timeout_with_handle(task, delay) {
            Ok(handle) => BrowserTimer(Some(handle)),
            Err(e) => {
                log::warn!("could not schedule timer: {e:?}");
                BrowserTimer(None)
            }
        }
    }
}
