//! # Results Dimensions
//!
//! The four fixed interoperability dimensions an Assessment reports on under
//! `results_in`. Lookup by [`Dimension`] is total; only string names can be
//! rejected.

use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Interoperability dimension of an assessment result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dimension {
    /// Legal interoperability.
    Legal,
    /// Organisational interoperability.
    Organisational,
    /// Semantic interoperability.
    Semantic,
    /// Technical interoperability.
    Technical,
}

impl Dimension {
    /// All dimensions in payload order.
    pub fn all() -> &'static [Dimension] {
        &[
            Self::Legal,
            Self::Organisational,
            Self::Semantic,
            Self::Technical,
        ]
    }

    /// Payload key of the dimension under `results_in`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Organisational => "organisational",
            Self::Semantic => "semantic",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = ModelError;

    /// Parse a dimension name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ModelError::UnknownDimension(s.to_string()))
    }
}
