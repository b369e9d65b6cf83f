use crate::sizes::{SizeName, SizeTable};

/// Everything the store knows about the window.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeState<N> {
    pub width: f64,
    pub height: f64,
    /// Size resolved from `width`.
    pub size: N,
    /// False until the first real measurement when starting from placeholder defaults.
    pub ready: bool,
    /// Set once a watcher has attached to this state.
    pub watcher_initialized: bool,
}

impl<N: SizeName> SizeState<N> {
    pub(crate) fn initial(sizes: &SizeTable<N>, width: f64, height: f64, ready: bool) -> Self {
        Self {
            width,
            height,
            size: sizes.resolve(width).clone(),
            ready,
            watcher_initialized: false,
        }
    }

    /// The part of the state exposed to views.
    pub fn window_size(&self) -> WindowSize<N> {
        WindowSize {
            width: self.width,
            height: self.height,
            size: self.size.clone(),
            ready: self.ready,
        }
    }
}

/// Current window dimensions and size, as returned by
/// [`use_window_size`](crate::WindowSizeContext::use_window_size).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WindowSize<N> {
    pub width: f64,
    pub height: f64,
    pub size: N,
    pub ready: bool,
}

/// A partial update merged into a [`SizeState`].
///
/// A width is only ever written together with the size it resolves to,
/// which keeps `size` and `width` in agreement.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeStatePatch<N> {
    measurement: Option<Measurement<N>>,
    ready: bool,
    watcher_initialized: bool,
}

#[derive(Clone, Debug, PartialEq)]
struct Measurement<N> {
    width: f64,
    height: f64,
    size: N,
}

impl<N: SizeName> SizeStatePatch<N> {
    /// A fresh window measurement. Marks the state ready.
    pub fn measured(sizes: &SizeTable<N>, width: f64, height: f64) -> Self {
        Self {
            measurement: Some(Measurement {
                width,
                height,
                size: sizes.resolve(width).clone(),
            }),
            ready: true,
            watcher_initialized: false,
        }
    }

    /// Records that a watcher attached.
    pub fn watcher_initialized() -> Self {
        Self {
            measurement: None,
            ready: false,
            watcher_initialized: true,
        }
    }

    /// The width, height and size this patch writes, if it is a measurement.
    pub fn measurement(&self) -> Option<(f64, f64, &N)> {
        self.measurement
            .as_ref()
            .map(|m| (m.width, m.height, &m.size))
    }

    pub fn marks_watcher_initialized(&self) -> bool {
        self.watcher_initialized
    }

    /// Merge this patch into `state`.
    ///
    /// Flags only ever move from false to true.
    pub fn apply(self, state: &mut SizeState<N>) {
        if let Some(Measurement {
            width,
            height,
            size,
        }) = self.measurement
        {
            state.width = width;
            state.height = height;
            state.size = size;
        }
        state.ready |= self.ready;
        state.watcher_initialized |= self.watcher_initialized;
    }
}
