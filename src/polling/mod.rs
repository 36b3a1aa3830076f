//! Interval-driven refresh for indexer queries.
//!
//! The indexer offers no push delivery, so a live view re-issues its query on
//! a fixed interval. [`PollingBinding`] owns that loop for one query: it keeps
//! exactly one request in flight, publishes [`ViewState`] through a watch
//! channel, and discards responses that arrive for superseded arguments.

use std::future::Future;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_stream::wrappers::WatchStream;
use tracing::warn;

use crate::client::ClientError;

/// What a display layer sees at any instant.
///
/// `Failed` is reachable only while no request has ever succeeded for the
/// current arguments. Once a result has been shown, later failures revert to
/// `Ready` with the last good data rather than clearing the view.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// First request for the current arguments is in flight.
    Pending,
    /// The most recent successful result.
    Ready(T),
    /// A refresh is in flight; the last good result stays visible.
    Refreshing(T),
    /// The first request failed; nothing has ever been displayable.
    Failed(ClientError),
}

impl<T> ViewState<T> {
    /// The displayable result, if any.
    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) | ViewState::Refreshing(data) => Some(data),
            ViewState::Pending | ViewState::Failed(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ClientError> {
        match self {
            ViewState::Failed(err) => Some(err),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ViewState::Pending)
    }
}

/// A live binding between one indexer query and its displayed state.
///
/// The query runs in a spawned task; dropping the binding (or calling
/// [`PollingBinding::deactivate`]) aborts it, so no timer outlives the
/// consumer. Each binding is independent — two chains viewed side by side are
/// two bindings with nothing shared.
pub struct PollingBinding<A, T> {
    state_rx: watch::Receiver<ViewState<T>>,
    args_tx: watch::Sender<(u64, A)>,
    task: JoinHandle<()>,
}

impl<A, T> PollingBinding<A, T>
where
    A: Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    /// Start polling `fetch(args)` every `period`.
    ///
    /// The first request is issued immediately; afterwards one request per
    /// period, with ticks that elapse during a slow request swallowed rather
    /// than queued.
    pub fn spawn<F, Fut>(args: A, period: Duration, fetch: F) -> Self
    where
        F: Fn(A) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, ClientError>> + Send + 'static,
    {
        let (state_tx, state_rx) = watch::channel(ViewState::Pending);
        let (args_tx, args_rx) = watch::channel((0u64, args));

        let task = tokio::spawn(run_loop(period, fetch, args_rx, state_tx));

        Self {
            state_rx,
            args_tx,
            task,
        }
    }

    /// Snapshot of the current view state.
    #[must_use]
    pub fn state(&self) -> ViewState<T> {
        self.state_rx.borrow().clone()
    }

    /// Stream of view-state updates, starting from the current state.
    #[must_use]
    pub fn updates(&self) -> WatchStream<ViewState<T>> {
        WatchStream::new(self.state_rx.clone())
    }

    /// Switch the query to new arguments.
    ///
    /// Resets the view to `Pending` and immediately issues a request for the
    /// new arguments; a response still in flight for the old arguments is
    /// discarded, never applied.
    pub fn set_args(&self, args: A) {
        self.args_tx.send_modify(|slot| {
            slot.0 += 1;
            slot.1 = args;
        });
    }

    /// Stop polling. The last published state stays observable, but no
    /// further requests are issued and the interval timer is torn down.
    pub fn deactivate(&self) {
        self.task.abort();
    }
}

impl<A, T> Drop for PollingBinding<A, T> {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn run_loop<A, T, F, Fut>(
    period: Duration,
    fetch: F,
    mut args_rx: watch::Receiver<(u64, A)>,
    state_tx: watch::Sender<ViewState<T>>,
) where
    A: Clone,
    T: Clone,
    F: Fn(A) -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut last_good: Option<T> = None;

    loop {
        let (generation, args) = args_rx.borrow_and_update().clone();

        let _ = state_tx.send(match &last_good {
            Some(data) => ViewState::Refreshing(data.clone()),
            None => ViewState::Pending,
        });

        let outcome = tokio::select! {
            result = fetch(args) => Some(result),
            changed = args_rx.changed() => {
                if changed.is_err() {
                    return;
                }
                None
            }
        };

        let superseded = match outcome {
            // arguments changed while the request was in flight
            None => true,
            Some(result) => {
                if args_rx.borrow().0 == generation {
                    apply(result, &mut last_good, &state_tx);
                    false
                } else {
                    // the response lost the race against set_args
                    true
                }
            }
        };

        if superseded {
            last_good = None;
            let _ = state_tx.send(ViewState::Pending);
            ticker.reset();
            continue;
        }

        tokio::select! {
            _ = ticker.tick() => {}
            changed = args_rx.changed() => {
                if changed.is_err() {
                    return;
                }
                last_good = None;
                ticker.reset();
            }
        }
    }
}

fn apply<T: Clone>(
    result: Result<T, ClientError>,
    last_good: &mut Option<T>,
    state_tx: &watch::Sender<ViewState<T>>,
) {
    match result {
        Ok(data) => {
            *last_good = Some(data.clone());
            let _ = state_tx.send(ViewState::Ready(data));
        }
        Err(err) => match last_good {
            Some(data) => {
                warn!("refresh failed, keeping last good result: {err}");
                let _ = state_tx.send(ViewState::Ready(data.clone()));
            }
            None => {
                let _ = state_tx.send(ViewState::Failed(err));
            }
        },
    }
}
