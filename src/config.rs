use std::rc::Rc;

use crate::{
    handoff::Handoff,
    host::WindowHost,
    sizes::{DefaultSize, SizeName, SizeTable},
    state::SizeState,
    store::{SizeStore, StoreFactory},
};

/// Options for [`create_window_size`](crate::create_window_size).
///
/// ```rust,ignore
/// let window = Rc::new(EventLoopWindow::with_size(1280, 720));
/// let cx = create_window_size(
///     WindowSizeConfig::new()
///         .window(window.clone())
///         .default_size(1024.0, 768.0),
/// );
/// ```
pub struct WindowSizeConfig<N: SizeName> {
    pub(crate) sizes: SizeTable<N>,
    pub(crate) default_width: f64,
    pub(crate) default_height: f64,
    pub(crate) ssr: bool,
    pub(crate) create_store: Option<StoreFactory<N>>,
    pub(crate) window: Option<Rc<dyn WindowHost>>,
    pub(crate) handoff: Option<Handoff>,
}

impl WindowSizeConfig<DefaultSize> {
    /// Mobile up to 420px, tablet up to 1024px, desktop beyond.
    pub fn new() -> Self {
        Self::with_sizes(SizeTable::default())
    }
}

impl Default for WindowSizeConfig<DefaultSize> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: SizeName> WindowSizeConfig<N> {
    pub fn with_sizes(sizes: SizeTable<N>) -> Self {
        Self {
            sizes,
            default_width: 0.0,
            default_height: 0.0,
            ssr: false,
            create_store: None,
            window: None,
            handoff: None,
        }
    }

    pub fn from_settings(settings: SizeSettings<N>) -> Self {
        Self::with_sizes(settings.sizes)
            .default_size(settings.default_width, settings.default_height)
            .ssr(settings.ssr)
    }

    /// Size used before the window is measured, or when there is no window.
    pub fn default_size(mut self, width: f64, height: f64) -> Self {
        self.default_width = width;
        self.default_height = height;
        self
    }

    pub fn default_width(mut self, width: f64) -> Self {
        self.default_width = width;
        self
    }

    pub fn default_height(mut self, height: f64) -> Self {
        self.default_height = height;
        self
    }

    /// Start from the default size even when a window is available, and
    /// report `ready == false` until the watcher measures after the handoff.
    pub fn ssr(mut self, ssr: bool) -> Self {
        self.ssr = ssr;
        self
    }

    /// Replace the bundled signal store.
    pub fn create_store(
        mut self,
        create_store: impl FnOnce(SizeState<N>) -> Rc<dyn SizeStore<N>> + 'static,
    ) -> Self {
        self.create_store = Some(Box::new(create_store));
        self
    }

    pub fn window(mut self, window: Rc<dyn WindowHost>) -> Self {
        self.window = Some(window);
        self
    }

    /// Use an existing handoff instead of one derived from `ssr`.
    pub fn handoff(mut self, handoff: Handoff) -> Self {
        self.handoff = Some(handoff);
        self
    }
}

/// The plain-data part of a [`WindowSizeConfig`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeSettings<N: SizeName> {
    pub sizes: SizeTable<N>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_width: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub default_height: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub ssr: bool,
}

impl Default for SizeSettings<DefaultSize> {
    fn default() -> Self {
        Self {
            sizes: SizeTable::default(),
            default_width: 0.0,
            default_height: 0.0,
            ssr: false,
        }
    }
}

#[cfg(feature = "serde")]
impl<N> SizeSettings<N>
where
    N: SizeName + serde::de::DeserializeOwned,
{
    /// Parse settings such as
    /// `{"sizes": {"mobile": 420, "desktop": null}, "ssr": true}`.
    pub fn from_json(json: &str) -> Result<Self, crate::error::ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
