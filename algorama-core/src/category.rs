//! Closed category taxonomy
//!
//! Categories only drive filtered listing. They never change how a function
//! is evaluated.

use crate::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Mathematical family a function belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Catch-all tag; as a filter it matches every entry
    #[default]
    All,
    SigmoidFamily,
    TanhFamily,
    ReluFamily,
    Exponential,
    Gaussian,
    Adaptive,
    Piecewise,
    Smooth,
    Special,
    Modern,
    Attention,
    Polynomial,
    Probabilistic,
}

impl Category {
    /// Every category, in declaration order (for UI selectors)
    pub const ALL_CATEGORIES: [Category; 14] = [
        Category::All,
        Category::SigmoidFamily,
        Category::TanhFamily,
        Category::ReluFamily,
        Category::Exponential,
        Category::Gaussian,
        Category::Adaptive,
        Category::Piecewise,
        Category::Smooth,
        Category::Special,
        Category::Modern,
        Category::Attention,
        Category::Polynomial,
        Category::Probabilistic,
    ];

    /// Human-readable display string
    pub const fn label(self) -> &'static str {
        match self {
            Category::All => "All Functions",
            Category::SigmoidFamily => "Sigmoid Family",
            Category::TanhFamily => "Tanh Family",
            Category::ReluFamily => "ReLU Family",
            Category::Exponential => "Exponential",
            Category::Gaussian => "Gaussian/Radial",
            Category::Adaptive => "Adaptive",
            Category::Piecewise => "Piecewise Linear",
            Category::Smooth => "Smooth Approx",
            Category::Special => "Special",
            Category::Modern => "Modern",
            Category::Attention => "Attention/Transformer",
            Category::Polynomial => "Polynomial",
            Category::Probabilistic => "Probabilistic",
        }
    }

    /// Machine key, identical to the serde representation
    pub const fn key(self) -> &'static str {
        match self {
            Category::All => "all",
            Category::SigmoidFamily => "sigmoid_family",
            Category::TanhFamily => "tanh_family",
            Category::ReluFamily => "relu_family",
            Category::Exponential => "exponential",
            Category::Gaussian => "gaussian",
            Category::Adaptive => "adaptive",
            Category::Piecewise => "piecewise",
            Category::Smooth => "smooth",
            Category::Special => "special",
            Category::Modern => "modern",
            Category::Attention => "attention",
            Category::Polynomial => "polynomial",
            Category::Probabilistic => "probabilistic",
        }
    }

    /// Does an entry tagged `entry` pass this filter?
    pub fn matches(self, entry: Category) -> bool {
        self == Category::All || self == entry
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CatalogError;

    /// Accepts the machine key or the display label, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL_CATEGORIES
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(wanted) || c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CatalogError::unknown_category(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_labels_unique() {
        let labels: HashSet<&str> = Category::ALL_CATEGORIES.iter().map(|c| c.label()).collect();
        assert_eq!(labels.len(), Category::ALL_CATEGORIES.len());
    }

    #[test]
    fn test_key_matches_serde() {
        for cat in Category::ALL_CATEGORIES {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.key()), "serde form of {:?}", cat);
        }
    }

    #[test]
    fn test_parse_key_and_label() {
        assert_eq!("relu_family".parse::<Category>().unwrap(), Category::ReluFamily);
        assert_eq!("ReLU Family".parse::<Category>().unwrap(), Category::ReluFamily);
        assert_eq!("gaussian/radial".parse::<Category>().unwrap(), Category::Gaussian);
        assert_eq!(" ALL ".parse::<Category>().unwrap(), Category::All);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "quantum".parse::<Category>().unwrap_err();
        assert_eq!(err, CatalogError::unknown_category("quantum"));
    }

    #[test]
    fn test_all_matches_everything() {
        for cat in Category::ALL_CATEGORIES {
            assert!(Category::All.matches(cat));
        }
        assert!(Category::Polynomial.matches(Category::Polynomial));
        assert!(!Category::Polynomial.matches(Category::Smooth));
        assert!(!Category::Polynomial.matches(Category::All));
    }

    #[test]
    fn test_default_is_catch_all() {
        assert_eq!(Category::default(), Category::All);
        assert_eq!(Category::default().to_string(), "All Functions");
    }
}
