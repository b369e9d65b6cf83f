use std::rc::Rc;

use floem_reactive::{provide_context, use_context};

use crate::{
    config::WindowSizeConfig,
    handoff::Handoff,
    host::WindowHost,
    sizes::{SizeName, SizeTable},
    state::{SizeState, SizeStatePatch},
    store::{SizeStore, signal_store},
    watcher::WindowSizeWatcher,
};

struct ContextInner<N: SizeName> {
    sizes: SizeTable<N>,
    store: Rc<dyn SizeStore<N>>,
    window: Option<Rc<dyn WindowHost>>,
    handoff: Handoff,
}

/// Window size state for one window, plus everything needed to keep it
/// current.
///
/// Created by [`create_window_size`]. Cloning is cheap and every clone
/// shares the same store. Pass it to the views that need it directly, or
/// [`provide`](WindowSizeContext::provide) it and look it up with
/// [`from_context`](WindowSizeContext::from_context).
pub struct WindowSizeContext<N: SizeName> {
    inner: Rc<ContextInner<N>>,
}

impl<N: SizeName> Clone for WindowSizeContext<N> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

/// Create the window size state described by `config`.
pub fn create_window_size<N: SizeName>(config: WindowSizeConfig<N>) -> WindowSizeContext<N> {
    WindowSizeContext::new(config)
}

impl<N: SizeName> WindowSizeContext<N> {
    pub fn new(config: WindowSizeConfig<N>) -> Self {
        let WindowSizeConfig {
            sizes,
            default_width,
            default_height,
            ssr,
            create_store,
            window,
            handoff,
        } = config;

        let (width, height) = match &window {
            Some(window) if !ssr => {
                let size = window.inner_size();
                (size.width, size.height)
            }
            _ => (default_width, default_height),
        };
        let initial = SizeState::initial(&sizes, width, height, !ssr);
        tracing::debug!(width, height, size = %initial.size, ssr, "created window size state");

        let store = match create_store {
            Some(create_store) => create_store(initial),
            None => signal_store(initial),
        };
        let handoff = handoff.unwrap_or_else(|| {
            if ssr {
                Handoff::pending()
            } else {
                Handoff::completed()
            }
        });

        Self {
            inner: Rc::new(ContextInner {
                sizes,
                store,
                window,
                handoff,
            }),
        }
    }

    /// The size table this context resolves widths with.
    pub fn sizes(&self) -> &SizeTable<N> {
        &self.inner.sizes
    }

    pub fn store(&self) -> &Rc<dyn SizeStore<N>> {
        &self.inner.store
    }

    pub fn host(&self) -> Option<&Rc<dyn WindowHost>> {
        self.inner.window.as_ref()
    }

    pub fn handoff(&self) -> Handoff {
        self.inner.handoff
    }

    /// Signal that the live window has taken over from pre-rendering.
    pub fn complete_handoff(&self) {
        self.inner.handoff.complete();
    }

    /// Mount the watcher for this context.
    pub fn mount_watcher(&self) -> WindowSizeWatcher {
        WindowSizeWatcher::mount(self)
    }

    /// Make this context available through [`WindowSizeContext::from_context`].
    pub fn provide(&self) {
        provide_context(self.clone());
    }

    pub fn from_context() -> Option<Self> {
        use_context::<Self>()
    }

    /// Write the host's current size into the store.
    pub(crate) fn measure(&self) {
        let Some(window) = &self.inner.window else {
            return;
        };
        let size = window.inner_size();
        let patch = SizeStatePatch::measured(&self.inner.sizes, size.width, size.height);
        tracing::trace!(width = size.width, height = size.height, "window resized");
        self.inner.store.update(patch);
    }
}
