//! Named window sizes and the width -> size lookup.
//!
//! A [`SizeTable`] is an ordered list of size names, each paired with an
//! inclusive upper bound on the window width in logical pixels. Widths are
//! matched against the entries in the order they were given; the last
//! entry doubles as the catch-all for widths beyond every bound.

use std::{fmt, hash::Hash};

use indexmap::IndexMap;
use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::error::ConfigError;

/// Anything usable as the name of a window size.
pub trait SizeName: Clone + Eq + Hash + fmt::Debug + fmt::Display + 'static {}

impl<T> SizeName for T where T: Clone + Eq + Hash + fmt::Debug + fmt::Display + 'static {}

/// The size names used when no table is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString, AsRefStr, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum DefaultSize {
    Mobile,
    Tablet,
    Desktop,
}

impl DefaultSize {
    /// Upper width bound of this size in the default table.
    pub const fn max_width(self) -> f64 {
        match self {
            DefaultSize::Mobile => 420.0,
            DefaultSize::Tablet => 1024.0,
            DefaultSize::Desktop => f64::INFINITY,
        }
    }
}

/// Ordered mapping of size name to inclusive upper width bound.
#[derive(Clone, Debug, PartialEq)]
pub struct SizeTable<N: SizeName> {
    entries: IndexMap<N, f64>,
    catch_all: N,
}

impl<N: SizeName> SizeTable<N> {
    /// Build a table from `(name, max_width)` pairs, keeping their order.
    ///
    /// Use `f64::INFINITY` for an unbounded size. The table must not be
    /// empty, names must be unique and bounds must not be NaN.
    pub fn new(entries: impl IntoIterator<Item = (N, f64)>) -> Result<Self, ConfigError> {
        let mut map = IndexMap::new();
        for (name, bound) in entries {
            if bound.is_nan() {
                return Err(ConfigError::invalid_bound(&name, bound));
            }
            if map.contains_key(&name) {
                return Err(ConfigError::duplicate(&name));
            }
            map.insert(name, bound);
        }

        let catch_all = match map.last() {
            Some((name, _)) => name.clone(),
            None => return Err(ConfigError::EmptySizeTable),
        };

        Ok(Self {
            entries: map,
            catch_all,
        })
    }

    /// Resolve a width to a size name.
    ///
    /// Returns the first size whose bound is greater than or equal to
    /// `width`, or the last size when the width exceeds every bound.
    pub fn resolve(&self, width: f64) -> &N {
        self.entries
            .iter()
            .find_map(|(name, bound)| (width <= *bound).then_some(name))
            .unwrap_or(&self.catch_all)
    }

    /// The configured upper bound of `name`, if the table has it.
    pub fn bound(&self, name: &N) -> Option<f64> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &N) -> bool {
        self.entries.contains_key(name)
    }

    /// The last size, used when no bound matches.
    pub fn catch_all(&self) -> &N {
        &self.catch_all
    }

    pub fn iter(&self) -> impl Iterator<Item = (&N, f64)> {
        self.entries.iter().map(|(name, bound)| (name, *bound))
    }

    pub fn names(&self) -> impl Iterator<Item = &N> {
        self.entries.keys()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; tables are never empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SizeTable<DefaultSize> {
    fn default() -> Self {
        let entries = IndexMap::from([
            (DefaultSize::Mobile, DefaultSize::Mobile.max_width()),
            (DefaultSize::Tablet, DefaultSize::Tablet.max_width()),
            (DefaultSize::Desktop, DefaultSize::Desktop.max_width()),
        ]);
        Self {
            entries,
            catch_all: DefaultSize::Desktop,
        }
    }
}

impl<N: SizeName> TryFrom<Vec<(N, f64)>> for SizeTable<N> {
    type Error = ConfigError;

    fn try_from(entries: Vec<(N, f64)>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

// Unbounded sizes are written as `null` since JSON has no infinity.
#[cfg(feature = "serde")]
impl<N> serde::Serialize for SizeTable<N>
where
    N: SizeName + serde::Serialize,
{
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, bound) in &self.entries {
            let bound = bound.is_finite().then_some(*bound);
            map.serialize_entry(name, &bound)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de, N> serde::Deserialize<'de> for SizeTable<N>
where
    N: SizeName + serde::Deserialize<'de>,
{
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = IndexMap::<N, Option<f64>>::deserialize(deserializer)?;
        SizeTable::new(
            raw.into_iter()
                .map(|(name, bound)| (name, bound.unwrap_or(f64::INFINITY))),
        )
        .map_err(serde::de::Error::custom)
    }
}
