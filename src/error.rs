use std::fmt::Display;

/// Errors raised while building size tables, value tables or settings.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("size table must contain at least one size")]
    EmptySizeTable,
    #[error("size `{0}` is listed more than once")]
    DuplicateSize(String),
    #[error("size `{name}` has an invalid upper bound ({bound})")]
    InvalidBound { name: String, bound: f64 },
    #[error("value table must contain at least one entry")]
    EmptyValueTable,
    #[cfg(feature = "serde")]
    #[error("failed to parse size settings: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    pub(crate) fn duplicate(name: &impl Display) -> Self {
        Self::DuplicateSize(name.to_string())
    }

    pub(crate) fn invalid_bound(name: &impl Display, bound: f64) -> Self {
        Self::InvalidBound {
            name: name.to_string(),
            bound,
        }
    }
}
