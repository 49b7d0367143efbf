//! The closed set of supported sequence kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::generator::SequenceError;

/// A well-known integer sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// 0, 1, 1, 2, 3, 5, ...
    Fibonacci,
    /// 2, 3, 5, 7, 11, ...
    Prime,
    /// 1, 4, 9, 16, ...
    Square,
    /// 1, 3, 6, 10, ...
    Triangular,
    /// 1, 2, 6, 24, ...
    Factorial,
}

impl SequenceKind {
    /// Every kind, in canonical order.
    pub const ALL: [Self; 5] = [
        Self::Fibonacci,
        Self::Prime,
        Self::Square,
        Self::Triangular,
        Self::Factorial,
    ];

    /// Lowercase name used on the command line and in JSON.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fibonacci => "fibonacci",
            Self::Prime => "prime",
            Self::Square => "square",
            Self::Triangular => "triangular",
            Self::Factorial => "factorial",
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SequenceKind {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| SequenceError::InvalidArgument(format!("invalid sequence type: {s}")))
    }
}
