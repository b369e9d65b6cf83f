//! # Floem window size
//!
//! Reactive window size tracking for Floem applications. A
//! [`WindowSizeContext`] holds the current window width and height, the
//! named size (mobile, tablet, desktop, or your own) that the width falls
//! in, and whether a real measurement has happened yet.
//!
//! ## Example
//! ```rust,ignore
//! use std::rc::Rc;
//!
//! use floem_window_size::*;
//!
//! let window = Rc::new(EventLoopWindow::with_size(1280, 720));
//! let cx = create_window_size(WindowSizeConfig::new().window(window.clone()));
//!
//! // Exactly one watcher per context keeps the state current.
//! let watcher = cx.mount_watcher();
//! assert_eq!(watcher.status(), AttachStatus::Attached);
//!
//! let gutter = ValueBySize::new(DefaultSize::Mobile, 8.0)
//!     .or(DefaultSize::Tablet, 16.0)
//!     .or(DefaultSize::Desktop, 32.0);
//!
//! label(move || format!("{:?}", cx.use_window_size().size))
//!     .style(move |s| s.padding(cx.use_value_by_size(&gutter)));
//!
//! // From the event loop:
//! window.resized(PhysicalSize::new(400, 720));
//! ```
//!
//! ## Sizes
//!
//! A [`SizeTable`] lists size names with an inclusive maximum width, in the
//! order they should be checked. The first size whose maximum is at least
//! the window width wins; the last size catches every wider window.
//!
//! ## Pre-rendering
//!
//! With [`WindowSizeConfig::ssr`] the state starts from the configured
//! default size with `ready == false`, and the watcher only starts
//! measuring once [`WindowSizeContext::complete_handoff`] is called.

mod config;
mod context;
mod error;
mod handoff;
mod hooks;
mod host;
mod sizes;
mod state;
mod store;
mod value;
mod watcher;

pub use config::{SizeSettings, WindowSizeConfig};
pub use context::{WindowSizeContext, create_window_size};
pub use dpi::{LogicalSize, PhysicalSize};
pub use error::ConfigError;
pub use handoff::Handoff;
pub use host::{EventLoopWindow, ListenerId, ResizeListener, WindowHost};
pub use sizes::{DefaultSize, SizeName, SizeTable};
pub use state::{SizeState, SizeStatePatch, WindowSize};
pub use store::{SignalStore, SizeStore, StoreFactory, signal_store};
pub use value::{SizeKey, ValueBySize};
pub use watcher::{AttachStatus, WatcherState, WindowSizeWatcher};
