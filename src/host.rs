//! The window a watcher listens to.
//!
//! [`WindowHost`] is the small slice of a window that size tracking needs:
//! the current inner size and resize notifications. [`EventLoopWindow`] is
//! a host driven by the application's event loop; forward the window's
//! resize and scale factor events to it and it notifies its listeners.

use std::{cell::RefCell, rc::Rc};

use dpi::{LogicalSize, PhysicalSize};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle returned when registering a resize listener.
    pub struct ListenerId;
}

pub type ResizeListener = Rc<dyn Fn()>;

pub trait WindowHost {
    /// Current inner size in logical pixels.
    fn inner_size(&self) -> LogicalSize<f64>;

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId;

    /// Returns false if the listener was not registered.
    fn remove_resize_listener(&self, id: ListenerId) -> bool;
}

struct WindowInner {
    physical_size: PhysicalSize<u32>,
    scale_factor: f64,
    listeners: SlotMap<ListenerId, ResizeListener>,
}

/// A [`WindowHost`] fed from a windowing event loop.
///
/// ```rust,ignore
/// match event {
///     WindowEvent::Resized(size) => window.resized(size),
///     WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
///         window.scale_factor_changed(scale_factor)
///     }
///     _ => {}
/// }
/// ```
pub struct EventLoopWindow {
    inner: RefCell<WindowInner>,
}

impl EventLoopWindow {
    pub fn new(physical_size: PhysicalSize<u32>, scale_factor: f64) -> Self {
        Self {
            inner: RefCell::new(WindowInner {
                physical_size,
                scale_factor,
                listeners: SlotMap::with_key(),
            }),
        }
    }

    /// A window with a scale factor of 1.0.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self::new(PhysicalSize::new(width, height), 1.0)
    }

    pub fn physical_size(&self) -> PhysicalSize<u32> {
        self.inner.borrow().physical_size
    }

    pub fn scale_factor(&self) -> f64 {
        self.inner.borrow().scale_factor
    }

    /// The window was resized to `size` physical pixels.
    pub fn resized(&self, size: PhysicalSize<u32>) {
        self.inner.borrow_mut().physical_size = size;
        self.notify();
    }

    /// The window moved to a display with a different scale factor.
    pub fn scale_factor_changed(&self, scale_factor: f64) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.scale_factor == scale_factor {
                return;
            }
            inner.scale_factor = scale_factor;
        }
        self.notify();
    }

    /// Resize to a logical size at the current scale factor.
    pub fn set_logical_size(&self, size: LogicalSize<f64>) {
        let physical = {
            let inner = self.inner.borrow();
            size.to_physical::<u32>(inner.scale_factor)
        };
        self.resized(physical);
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self) {
        // Listeners may read the size or unregister themselves.
        let listeners: Vec<ResizeListener> =
            self.inner.borrow().listeners.values().cloned().collect();
        tracing::trace!(listeners = listeners.len(), "dispatching window resize");
        for listener in listeners {
            listener();
        }
    }
}

impl WindowHost for EventLoopWindow {
    fn inner_size(&self) -> LogicalSize<f64> {
        let inner = self.inner.borrow();
        inner.physical_size.to_logical(inner.scale_factor)
    }

    fn add_resize_listener(&self, listener: ResizeListener) -> ListenerId {
        self.inner.borrow_mut().listeners.insert(listener)
    }

    fn remove_resize_listener(&self, id: ListenerId) -> bool {
        self.inner.borrow_mut().listeners.remove(id).is_some()
    }
}
