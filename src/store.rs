//! The reactive container behind a [`WindowSizeContext`](crate::WindowSizeContext).
//!
//! Anything implementing [`SizeStore`] can back a context. The default is
//! [`SignalStore`], a single `floem_reactive` signal; a different store can
//! be plugged in through
//! [`WindowSizeConfig::create_store`](crate::WindowSizeConfig::create_store).

use std::rc::Rc;

use floem_reactive::{RwSignal, SignalGet, SignalUpdate, create_rw_signal};

use crate::{
    sizes::SizeName,
    state::{SizeState, SizeStatePatch},
};

/// Reactive storage for a [`SizeState`].
pub trait SizeStore<N> {
    /// Read the state, subscribing the running effect to future updates.
    fn get(&self) -> SizeState<N>;

    /// Read the state without subscribing.
    fn get_untracked(&self) -> SizeState<N>;

    /// Merge `patch` into the state and notify subscribers.
    fn update(&self, patch: SizeStatePatch<N>);
}

/// Builds the store for a new context from its initial state.
pub type StoreFactory<N> = Box<dyn FnOnce(SizeState<N>) -> Rc<dyn SizeStore<N>>>;

/// A [`SizeStore`] held in a single [`RwSignal`].
pub struct SignalStore<N: 'static> {
    state: RwSignal<SizeState<N>>,
}

impl<N: SizeName> SignalStore<N> {
    pub fn new(initial: SizeState<N>) -> Self {
        Self {
            state: create_rw_signal(initial),
        }
    }

    /// The underlying signal, for callers that want to build memos on it.
    pub fn signal(&self) -> RwSignal<SizeState<N>> {
        self.state
    }
}

impl<N: SizeName> SizeStore<N> for SignalStore<N> {
    fn get(&self) -> SizeState<N> {
        self.state.get()
    }

    fn get_untracked(&self) -> SizeState<N> {
        self.state.get_untracked()
    }

    fn update(&self, patch: SizeStatePatch<N>) {
        self.state.update(|state| patch.apply(state));
    }
}

/// The default [`StoreFactory`].
pub fn signal_store<N: SizeName>(initial: SizeState<N>) -> Rc<dyn SizeStore<N>> {
    Rc::new(SignalStore::new(initial))
}
