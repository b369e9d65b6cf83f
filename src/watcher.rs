//! Keeping a context's store in sync with its window.
//!
//! Mount one [`WindowSizeWatcher`] per [`WindowSizeContext`]. Once the
//! handoff is complete it registers a single resize listener on the
//! context's window and measures right away; dropping the watcher removes
//! the listener again.
//!
//! A context only ever accepts one watcher. Later mounts report
//! [`AttachStatus::AlreadyAttached`] and never listen, even after the first
//! watcher is gone, so the first watcher stays the only writer.

use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

use floem_reactive::{Scope, create_effect, with_scope};

use crate::{
    context::WindowSizeContext,
    host::{ListenerId, ResizeListener, WindowHost},
    sizes::SizeName,
    state::SizeStatePatch,
};

/// Outcome of mounting a watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub enum AttachStatus {
    /// This watcher owns the context's listener.
    Attached,
    /// Another watcher was already mounted on the context; this one is inert.
    AlreadyAttached,
}

/// Where a mounted watcher is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WatcherState {
    /// Waiting for the handoff before measuring.
    PendingHandoff,
    /// Registered on the window.
    Listening,
    /// Handoff completed but the context has no window to watch.
    NoWindow,
    /// Mounted after another watcher; never listens.
    Duplicate,
    Unmounted,
}

struct Listener {
    host: Rc<dyn WindowHost>,
    id: ListenerId,
}

struct WatcherInner {
    status: AttachStatus,
    unmounted: Cell<bool>,
    no_window: Cell<bool>,
    listener: RefCell<Option<Listener>>,
    /// Owns the handoff effect; disposed on detach.
    scope: Scope,
}

impl WatcherInner {
    fn attach<N: SizeName>(&self, cx: &WindowSizeContext<N>) {
        if self.unmounted.get() || self.listener.borrow().is_some() {
            return;
        }
        let Some(host) = cx.host().cloned() else {
            tracing::debug!("no window to watch, keeping default window size");
            self.no_window.set(true);
            return;
        };

        let handler: ResizeListener = Rc::new({
            let cx = cx.clone();
            move || cx.measure()
        });
        let id = host.add_resize_listener(handler.clone());
        *self.listener.borrow_mut() = Some(Listener { host, id });
        tracing::debug!("window size watcher attached");

        handler();
    }

    fn detach(&self) {
        if self.unmounted.replace(true) {
            return;
        }
        self.scope.dispose();
        if let Some(Listener { host, id }) = self.listener.borrow_mut().take() {
            host.remove_resize_listener(id);
            tracing::debug!("window size watcher detached");
        }
    }
}

/// A mounted window size watcher.
///
/// The watcher renders nothing; it exists for its listener. It is
/// unmounted by [`WindowSizeWatcher::unmount`] or by dropping it.
#[must_use = "dropping the watcher unmounts it"]
pub struct WindowSizeWatcher {
    inner: Rc<WatcherInner>,
}

impl WindowSizeWatcher {
    /// Mount a watcher on `cx`.
    pub fn mount<N: SizeName>(cx: &WindowSizeContext<N>) -> Self {
        // Read once: the answer decides this instance's role for its whole life.
        let already_initialized = cx.store().get_untracked().watcher_initialized;

        let status = if already_initialized {
            tracing::error!(
                "window size watcher already initialized, this instance will not track resizes"
            );
            AttachStatus::AlreadyAttached
        } else {
            cx.store().update(SizeStatePatch::watcher_initialized());
            AttachStatus::Attached
        };

        let inner = Rc::new(WatcherInner {
            status,
            unmounted: Cell::new(false),
            no_window: Cell::new(false),
            listener: RefCell::new(None),
            scope: Scope::current().create_child(),
        });

        if status == AttachStatus::Attached {
            let weak: Weak<WatcherInner> = Rc::downgrade(&inner);
            let cx = cx.clone();
            with_scope(inner.scope, || {
                create_effect(move |_| {
                    let handoff_complete = cx.handoff().is_complete();
                    let Some(inner) = weak.upgrade() else {
                        return;
                    };
                    if !handoff_complete {
                        tracing::debug!("window size handoff pending, not measuring yet");
                        return;
                    }
                    inner.attach(&cx);
                })
            });
        }

        Self { inner }
    }

    pub fn status(&self) -> AttachStatus {
        self.inner.status
    }

    pub fn state(&self) -> WatcherState {
        if self.inner.unmounted.get() {
            WatcherState::Unmounted
        } else if self.inner.status == AttachStatus::AlreadyAttached {
            WatcherState::Duplicate
        } else if self.inner.listener.borrow().is_some() {
            WatcherState::Listening
        } else if self.inner.no_window.get() {
            WatcherState::NoWindow
        } else {
            WatcherState::PendingHandoff
        }
    }

    /// Remove the resize listener. Calling this again does nothing.
    pub fn unmount(&self) {
        self.inner.detach();
    }
}

impl Drop for WindowSizeWatcher {
    fn drop(&mut self) {
        self.inner.detach();
    }
}
