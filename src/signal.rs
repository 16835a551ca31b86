//! Write-once signals and the per-call gate.
//!
//! A [`Signal`] is a latch: once its [`Trigger`] fires it stays fired, and
//! every clone of the signal observes it. Underneath it is a
//! `crossbeam-channel` that never carries a message; firing drops the only
//! sender, which disconnects the channel and wakes every receiver at once.

use std::sync::{Arc, Mutex};

use crossbeam_channel::{bounded, select, Receiver, Sender, TryRecvError};

struct Shared {
    sender: Mutex<Option<Sender<()>>>,
}

/// The firing half of a [`Signal`]. Cheap to clone; any clone may fire.
#[derive(Clone)]
pub struct Trigger {
    shared: Arc<Shared>,
}

/// The observing half of a latch. Cheap to clone.
#[derive(Clone)]
pub struct Signal {
    // Keeps the sender alive so dropping every Trigger never fires the latch.
    _sender: Arc<Shared>,
    receiver: Receiver<()>,
}

/// Create a new unfired latch.
pub fn signal() -> (Trigger, Signal) {
    let (sender, receiver) = bounded(0);
    let shared = Arc::new(Shared {
        sender: Mutex::new(Some(sender)),
    });
    (
        Trigger {
            shared: Arc::clone(&shared),
        },
        Signal {
            _sender: shared,
            receiver,
        },
    )
}

impl Trigger {
    /// Fire the latch. Idempotent.
    pub fn fire(&self) {
        let mut sender = match self.shared.sender.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sender.take();
    }

    /// Whether this latch has been fired.
    pub fn is_fired(&self) -> bool {
        match self.shared.sender.lock() {
            Ok(guard) => guard.is_none(),
            Err(poisoned) => poisoned.into_inner().is_none(),
        }
    }
}

impl Signal {
    /// A signal nobody can fire.
    pub fn never() -> Self {
        signal().1
    }

    /// A signal that is already fired.
    pub fn fired() -> Self {
        let (trigger, signal) = signal();
        trigger.fire();
        signal
    }

    /// Whether the latch has fired. Never blocks.
    pub fn is_fired(&self) -> bool {
        matches!(self.receiver.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Block until the latch fires.
    pub fn wait(&self) {
        let _ = self.receiver.recv();
    }

    pub(crate) fn receiver(&self) -> &Receiver<()> {
        &self.receiver
    }
}

impl std::fmt::Debug for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("fired", &self.is_fired())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// What a [`Gate`] let through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    Cancelled,
    Proceed,
}

/// The pair of signals every traversal call waits on before touching the
/// filesystem.
#[derive(Debug, Clone)]
pub struct Gate {
    pub cancel: Signal,
    pub proceed: Signal,
}

impl Gate {
    pub fn new(cancel: Signal, proceed: Signal) -> Self {
        Self { cancel, proceed }
    }

    /// Block until either signal fires.
    ///
    /// No timeout: an overall deadline is expected to fire `cancel`. A
    /// cancellation that has already fired wins over proceed.
    pub fn wait(&self) -> GateOutcome {
        if self.cancel.is_fired() {
            return GateOutcome::Cancelled;
        }
        select! {
            recv(self.cancel.receiver) -> _ => GateOutcome::Cancelled,
            recv(self.proceed.receiver) -> _ => GateOutcome::Proceed,
        }
    }
}
