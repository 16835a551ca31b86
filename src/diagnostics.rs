use tracing::{Dispatch, Subscriber};

/// Optional diagnostic sink threaded through a search.
///
/// Wraps a [`tracing::Dispatch`] that events are sent to for the duration of
/// each emission. Nothing is installed globally, so two searches in one
/// process can log to different places, and an empty `Diagnostics` drops
/// every event without consulting any global subscriber.
#[derive(Clone, Default)]
pub struct Diagnostics {
    dispatch: Option<Dispatch>,
}

impl Diagnostics {
    /// A sink that discards everything.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(dispatch: Dispatch) -> Self {
        Self {
            dispatch: Some(dispatch),
        }
    }

    pub fn from_subscriber<S>(subscriber: S) -> Self
    where
        S: Subscriber + Send + Sync + 'static,
    {
        Self::new(Dispatch::new(subscriber))
    }

    pub fn is_enabled(&self) -> bool {
        self.dispatch.is_some()
    }

    /// Run `f` with this sink as the thread's default dispatcher.
    pub(crate) fn emit(&self, f: impl FnOnce()) {
        if let Some(dispatch) = &self.dispatch {
            tracing::dispatcher::with_default(dispatch, f);
        }
    }
}

impl From<Dispatch> for Diagnostics {
    fn from(dispatch: Dispatch) -> Self {
        Self::new(dispatch)
    }
}

impl std::fmt::Debug for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Diagnostics")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}
