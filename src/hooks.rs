//! Reading window size state from views.
//!
//! Both hooks read the store reactively: called inside an effect, memo or
//! a view's reactive closure, they re-run whenever the watcher writes a new
//! measurement.

use crate::{context::WindowSizeContext, sizes::SizeName, state::WindowSize, value::ValueBySize};

impl<N: SizeName> WindowSizeContext<N> {
    /// Current width, height, size and readiness.
    pub fn use_window_size(&self) -> WindowSize<N> {
        self.store().get().window_size()
    }

    /// The value in `values` matching the current width.
    ///
    /// ```rust,ignore
    /// let columns = ValueBySize::new(DefaultSize::Mobile, 1)
    ///     .or(DefaultSize::Tablet, 2)
    ///     .or(DefaultSize::Desktop, 4);
    /// label(move || cx.use_value_by_size(&columns).to_string())
    /// ```
    pub fn use_value_by_size<T: Clone>(&self, values: &ValueBySize<N, T>) -> T {
        let width = self.store().get().width;
        values.select(self.sizes(), width).clone()
    }
}
