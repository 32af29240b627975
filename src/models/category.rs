//! Expense categories
//!
//! The category set is fixed. Each category carries a display color used
//! by charts; the color has no effect on filtering or totals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One of the fixed expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Food,
    Transportation,
    Utilities,
    Entertainment,
    Healthcare,
    Shopping,
    Education,
    Other,
}

impl Category {
    /// All categories in canonical order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Utilities,
        Category::Entertainment,
        Category::Healthcare,
        Category::Shopping,
        Category::Education,
        Category::Other,
    ];

    /// The category's label as stored and displayed
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Entertainment => "Entertainment",
            Self::Healthcare => "Healthcare",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Chart color as a hex string
    pub const fn color(&self) -> &'static str {
        match self {
            Self::Food => "#ff6b6b",
            Self::Transportation => "#4ecdc4",
            Self::Utilities => "#45b7d1",
            Self::Entertainment => "#96ceb4",
            Self::Healthcare => "#feca57",
            Self::Shopping => "#ff9ff3",
            Self::Education => "#54a0ff",
            Self::Other => "#5f27cd",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when text does not name one of the fixed categories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category: '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}
