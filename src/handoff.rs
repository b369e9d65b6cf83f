use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_rw_signal};

/// Tracks whether rendering has moved past the server-to-client handoff.
///
/// Views rendered ahead of time (on a server, or headless before a window
/// exists) see placeholder sizes. Once the live window takes over the
/// handoff is completed and watchers start measuring. The flag only ever
/// goes from pending to complete.
#[derive(Clone, Copy)]
pub struct Handoff {
    complete: RwSignal<bool>,
}

impl Handoff {
    /// A handoff that has already happened.
    pub fn completed() -> Self {
        Self {
            complete: create_rw_signal(true),
        }
    }

    /// A handoff still waiting for [`Handoff::complete`].
    pub fn pending() -> Self {
        Self {
            complete: create_rw_signal(false),
        }
    }

    /// Reactive read: effects calling this re-run when the handoff completes.
    pub fn is_complete(&self) -> bool {
        self.complete.get()
    }

    pub fn is_complete_untracked(&self) -> bool {
        self.complete.get_untracked()
    }

    /// Mark the handoff as done. Later calls are no-ops.
    pub fn complete(&self) {
        if !self.complete.get_untracked() {
            tracing::debug!("window size handoff completed");
            self.complete.set(true);
        }
    }
}
