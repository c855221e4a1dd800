//! Stable function identity

use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based, insertion-order identity of a registered function.
///
/// IDs are handed out by the catalog and never reused or renumbered, so a
/// caller can keep one across frames instead of resolving a name each time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FunctionId(usize);

impl FunctionId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    pub const fn index(self) -> usize {
        self.0
    }

    /// Widened form used in error reports, where external IDs may be negative
    pub fn as_i64(self) -> i64 {
        i64::try_from(self.0).unwrap_or(i64::MAX)
    }
}

impl From<usize> for FunctionId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_index() {
        let mut ids = vec![FunctionId::new(3), FunctionId::new(0), FunctionId::new(1)];
        ids.sort();
        assert_eq!(ids, vec![FunctionId::new(0), FunctionId::new(1), FunctionId::new(3)]);
    }

    #[test]
    fn test_serializes_as_plain_integer() {
        assert_eq!(serde_json::to_string(&FunctionId::new(42)).unwrap(), "42");
        let id: FunctionId = serde_json::from_str("7").unwrap();
        assert_eq!(id.index(), 7);
    }
}
