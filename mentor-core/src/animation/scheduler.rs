//! Cancellable scheduled tasks
//!
//! A [`ScheduledTask`] owns a spawned tokio timer loop. Cancelling or
//! dropping the handle closes its gate; once that returns, the callback is
//! neither running nor able to start again.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Returned by a scheduled callback to keep or stop the schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

#[derive(Debug, Default)]
struct Gate {
    closed: Mutex<bool>,
}

impl Gate {
    /// The lock is held while `f` runs, so `close` waits out an in-flight callback.
    fn run<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let closed = self.closed.lock().unwrap_or_else(PoisonError::into_inner);
        if *closed { None } else { Some(f()) }
    }

    fn close(&self) {
        *self.closed.lock().unwrap_or_else(PoisonError::into_inner) = true;
    }

    fn is_closed(&self) -> bool {
        *self.closed.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Handle to a timer-driven callback running on the tokio runtime.
pub struct ScheduledTask {
    gate: Arc<Gate>,
    handle: JoinHandle<()>,
}

impl fmt::Debug for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScheduledTask")
            .field("cancelled", &self.gate.is_closed())
            .field("finished", &self.handle.is_finished())
            .finish()
    }
}

impl ScheduledTask {
    /// Run `callback` after `delay`, then every `period` until it returns
    /// [`TickControl::Stop`].
    ///
    /// A zero `delay` still defers the first call to the next scheduler turn.
    /// Must be called from within a tokio runtime.
    pub fn repeating<F>(delay: Duration, period: Duration, mut callback: F) -> Self
    where
        F: FnMut() -> TickControl + Send + 'static,
    {
        let gate = Arc::new(Gate::default());
        let task_gate = gate.clone();

        let handle = tokio::spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(delay).await;
            }

            loop {
                match task_gate.run(|| callback()) {
                    Some(TickControl::Continue) => tokio::time::sleep(period).await,
                    Some(TickControl::Stop) => {
                        trace!("Scheduled task stopped by its callback");
                        break;
                    }
                    None => break,
                }
            }
        });

        Self { gate, handle }
    }

    /// Stop the schedule. No callback runs after this returns.
    pub fn cancel(&self) {
        if !self.gate.is_closed() {
            trace!("Cancelling scheduled task");
        }
        self.gate.close();
        self.handle.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.gate.is_closed()
    }

    /// True once the loop has exited, whether stopped or cancelled.
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
