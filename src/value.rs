//! Picking values by window size.

use crate::{
    error::ConfigError,
    sizes::{DefaultSize, SizeName, SizeTable},
};

/// What a [`ValueBySize`] entry is matched against.
#[derive(Clone, Debug, PartialEq)]
pub enum SizeKey<N> {
    /// Matches while the width is within the bound of this size.
    Size(N),
    /// Matches while the width is at most this many logical pixels.
    Width(f64),
}

impl<N: SizeName> SizeKey<N> {
    /// The inclusive width bound this key stands for, if `sizes` knows it.
    pub fn max_width(&self, sizes: &SizeTable<N>) -> Option<f64> {
        match self {
            SizeKey::Size(name) => sizes.bound(name),
            SizeKey::Width(width) => Some(*width),
        }
    }
}

impl<N> From<f64> for SizeKey<N> {
    fn from(width: f64) -> Self {
        SizeKey::Width(width)
    }
}

impl From<DefaultSize> for SizeKey<DefaultSize> {
    fn from(size: DefaultSize) -> Self {
        SizeKey::Size(size)
    }
}

impl From<&'static str> for SizeKey<&'static str> {
    fn from(size: &'static str) -> Self {
        SizeKey::Size(size)
    }
}

impl From<String> for SizeKey<String> {
    fn from(size: String) -> Self {
        SizeKey::Size(size)
    }
}

/// An ordered, non-empty list of values keyed by size or width.
///
/// Entries are checked in order and the first whose bound covers the
/// current width wins. When none does, the last entry is used, so it should
/// be the value meant for everything else.
///
/// ```rust,ignore
/// let padding = ValueBySize::new(DefaultSize::Mobile, 8.0)
///     .or(DefaultSize::Tablet, 16.0)
///     .or(DefaultSize::Desktop, 24.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ValueBySize<N, T> {
    first: (SizeKey<N>, T),
    rest: Vec<(SizeKey<N>, T)>,
}

impl<N: SizeName, T> ValueBySize<N, T> {
    pub fn new(key: impl Into<SizeKey<N>>, value: T) -> Self {
        Self {
            first: (key.into(), value),
            rest: Vec::new(),
        }
    }

    /// Append an entry, checked after the existing ones.
    pub fn or(mut self, key: impl Into<SizeKey<N>>, value: T) -> Self {
        self.rest.push((key.into(), value));
        self
    }

    pub fn try_from_iter(
        entries: impl IntoIterator<Item = (SizeKey<N>, T)>,
    ) -> Result<Self, ConfigError> {
        let mut entries = entries.into_iter();
        let first = entries.next().ok_or(ConfigError::EmptyValueTable)?;
        Ok(Self {
            first,
            rest: entries.collect(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SizeKey<N>, &T)> {
        std::iter::once(&self.first)
            .chain(self.rest.iter())
            .map(|(key, value)| (key, value))
    }

    pub fn len(&self) -> usize {
        self.rest.len() + 1
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The value used when no entry matches.
    pub fn fallback(&self) -> &T {
        self.rest.last().map_or(&self.first.1, |(_, value)| value)
    }

    /// Pick the value for `width`.
    pub fn select(&self, sizes: &SizeTable<N>, width: f64) -> &T {
        for (key, value) in self.iter() {
            match key.max_width(sizes) {
                Some(max_width) if width <= max_width => return value,
                Some(_) => {}
                None => {
                    tracing::warn!(?key, "size is not in the size table, skipping it");
                }
            }
        }
        self.fallback()
    }
}

impl<N: SizeName, T> TryFrom<Vec<(SizeKey<N>, T)>> for ValueBySize<N, T> {
    type Error = ConfigError;

    fn try_from(entries: Vec<(SizeKey<N>, T)>) -> Result<Self, Self::Error> {
        Self::try_from_iter(entries)
    }
}
