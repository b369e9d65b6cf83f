//! Testing utilities for `floem_window_size`.
//!
//! # Example
//!
//! ```rust,ignore
//! use floem_window_size_test::prelude::*;
//!
//! #[test]
//! fn test_resize_updates_size() {
//!     let window = test_window(800, 600);
//!     let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
//!     let _watcher = cx.mount_watcher();
//!
//!     let tracker = RenderTracker::track(&cx);
//!     resize(&window, 300.0, 600.0);
//!
//!     assert_eq!(tracker.last().unwrap().size, DefaultSize::Mobile);
//! }
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use floem_reactive::create_effect;
use floem_window_size::{
    EventLoopWindow, LogicalSize, SignalStore, SizeName, SizeState, SizeStatePatch, SizeStore,
    WindowSize, WindowSizeContext,
};

/// Prelude module for convenient imports in tests.
pub mod prelude {
    pub use super::{CountingStore, RenderTracker, resize, test_window};
    pub use floem_window_size::*;
}

/// A window host at scale factor 1.0, shared the way watchers expect.
pub fn test_window(width: u32, height: u32) -> Rc<EventLoopWindow> {
    Rc::new(EventLoopWindow::with_size(width, height))
}

/// Simulate the window being resized to a logical size.
pub fn resize(window: &EventLoopWindow, width: f64, height: f64) {
    window.set_logical_size(LogicalSize::new(width, height));
}

/// A signal store that counts the patches written to it.
///
/// # Example
///
/// ```rust,ignore
/// let store = CountingStore::new();
/// let cx = create_window_size(
///     WindowSizeConfig::new().create_store(store.factory()),
/// );
/// // ... resize ...
/// assert_eq!(store.measurements(), 1);
/// ```
pub struct CountingStore<N: SizeName> {
    store: Rc<RefCell<Option<SignalStore<N>>>>,
    patches: Rc<RefCell<Vec<SizeStatePatch<N>>>>,
}

impl<N: SizeName> Clone for CountingStore<N> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            patches: self.patches.clone(),
        }
    }
}

impl<N: SizeName> Default for CountingStore<N> {
    fn default() -> Self {
        Self {
            store: Rc::new(RefCell::new(None)),
            patches: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<N: SizeName> CountingStore<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store factory for
    /// [`WindowSizeConfig::create_store`](floem_window_size::WindowSizeConfig::create_store).
    pub fn factory(&self) -> impl FnOnce(SizeState<N>) -> Rc<dyn SizeStore<N>> + 'static {
        let this = self.clone();
        move |initial| {
            *this.store.borrow_mut() = Some(SignalStore::new(initial));
            let store: Rc<dyn SizeStore<N>> = Rc::new(this);
            store
        }
    }

    /// Every patch written so far, in order.
    pub fn patches(&self) -> Vec<SizeStatePatch<N>> {
        self.patches.borrow().clone()
    }

    /// Number of patches written.
    pub fn writes(&self) -> usize {
        self.patches.borrow().len()
    }

    /// Number of patches that carried a window measurement.
    pub fn measurements(&self) -> usize {
        self.patches
            .borrow()
            .iter()
            .filter(|patch| patch.measurement().is_some())
            .count()
    }

    /// Forget recorded patches.
    pub fn reset(&self) {
        self.patches.borrow_mut().clear();
    }

    fn with_store<R>(&self, f: impl FnOnce(&SignalStore<N>) -> R) -> R {
        match self.store.borrow().as_ref() {
            Some(store) => f(store),
            None => panic!("CountingStore used before its factory ran"),
        }
    }
}

impl<N: SizeName> SizeStore<N> for CountingStore<N> {
    fn get(&self) -> SizeState<N> {
        self.with_store(|store| store.get())
    }

    fn get_untracked(&self) -> SizeState<N> {
        self.with_store(|store| store.get_untracked())
    }

    fn update(&self, patch: SizeStatePatch<N>) {
        self.patches.borrow_mut().push(patch.clone());
        self.with_store(|store| store.update(patch));
    }
}

/// Records every [`WindowSize`] a reactive reader of the context observes.
///
/// # Example
///
/// ```rust,ignore
/// let tracker = RenderTracker::track(&cx);
/// resize(&window, 500.0, 800.0);
/// assert_eq!(tracker.renders(), 2);
/// ```
#[derive(Clone)]
pub struct RenderTracker<N: SizeName> {
    seen: Rc<RefCell<Vec<WindowSize<N>>>>,
    count: Rc<Cell<usize>>,
}

impl<N: SizeName> RenderTracker<N> {
    /// Start an effect that reads `cx.use_window_size()` and records each run.
    pub fn track(cx: &WindowSizeContext<N>) -> Self {
        let tracker = Self {
            seen: Rc::new(RefCell::new(Vec::new())),
            count: Rc::new(Cell::new(0)),
        };
        create_effect({
            let cx = cx.clone();
            let tracker = tracker.clone();
            move |_| {
                let size = cx.use_window_size();
                tracker.seen.borrow_mut().push(size);
                tracker.count.set(tracker.count.get() + 1);
            }
        });
        tracker
    }

    /// Number of times the reader ran, including the first run.
    pub fn renders(&self) -> usize {
        self.count.get()
    }

    /// All observed sizes in order.
    pub fn seen(&self) -> Vec<WindowSize<N>> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<WindowSize<N>> {
        self.seen.borrow().last().cloned()
    }
}
