//! Process-boundary signal bridge.
//!
//! Runs on its own thread next to the search and turns external events into
//! the two latches the walker waits on:
//!
//! ```text
//! interrupts ──▶ cancel.fire()   (bridge stops)
//! proceeds   ──▶ proceed.fire()  (bridge keeps listening)
//! deadline   ──▶ cancel.fire()   (bridge stops)
//! finish()   ──▶                 (bridge stops)
//! ```
//!
//! The bridge knows nothing about OS signals; `main` feeds it from `ctrlc`
//! and `signal-hook`.

use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam_channel::{after, never, select, Receiver};
use tracing::{info, warn};

use crate::diagnostics::Diagnostics;
use crate::signal::{signal, Trigger};

/// Why the bridge thread stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeEvent {
    /// An interrupt arrived; cancellation was fired.
    Interrupted,

    /// The time budget ran out; cancellation was fired.
    DeadlineElapsed,

    /// The search finished first.
    Completed,
}

enum Input {
    Interrupt(bool),
    Proceed(bool),
    Deadline,
    Finished,
}

/// Handle to a running bridge thread.
pub struct SignalBridge {
    done:   Trigger,
    handle: JoinHandle<BridgeEvent>,
}

impl SignalBridge {
    /// Start the bridge.
    ///
    /// `cancel` is fired on the first interrupt or when `budget` elapses.
    /// Every message on `proceeds` fires `proceed` (firing twice is a no-op).
    /// A closed input channel is simply ignored from then on.
    pub fn spawn(
        budget: Duration,
        interrupts: Receiver<()>,
        proceeds: Receiver<()>,
        cancel: Trigger,
        proceed: Trigger,
        diagnostics: Diagnostics,
    ) -> std::io::Result<Self> {
        let (done, finished) = signal();

        let handle = thread::Builder::new()
            .name("extfind-signals".into())
            .spawn(move || {
                let deadline = after(budget);
                let finished = finished.receiver().clone();
                let mut interrupts = interrupts;
                let mut proceeds = proceeds;

                loop {
                    let input = select! {
                        recv(interrupts) -> msg => Input::Interrupt(msg.is_ok()),
                        recv(proceeds) -> msg => Input::Proceed(msg.is_ok()),
                        recv(deadline) -> _ => Input::Deadline,
                        recv(finished) -> _ => Input::Finished,
                    };

                    match input {
                        Input::Interrupt(true) => {
                            diagnostics.emit(|| warn!("signal received, terminating"));
                            cancel.fire();
                            return BridgeEvent::Interrupted;
                        }
                        Input::Proceed(true) => {
                            diagnostics.emit(|| info!("proceed received"));
                            proceed.fire();
                        }
                        // Sender side went away: stop listening to it
                        Input::Interrupt(false) => interrupts = never(),
                        Input::Proceed(false) => proceeds = never(),
                        Input::Deadline => {
                            diagnostics.emit(|| {
                                warn!(budget_secs = budget.as_secs_f64(), "time budget exhausted, cancelling")
                            });
                            cancel.fire();
                            return BridgeEvent::DeadlineElapsed;
                        }
                        Input::Finished => return BridgeEvent::Completed,
                    }
                }
            })?;

        Ok(Self { done, handle })
    }

    /// Tell the bridge the search is over and wait for its thread.
    ///
    /// Returns what stopped the bridge; if an interrupt or the deadline got
    /// there first, that is reported instead of [`BridgeEvent::Completed`].
    pub fn finish(self) -> BridgeEvent {
        self.done.fire();
        // The bridge thread does not panic; treat a panic as a plain finish.
        self.handle.join().unwrap_or(BridgeEvent::Completed)
    }
}
