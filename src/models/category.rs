//! Spending category model
//!
//! Categories come from the dataset's `Clean_Category` column. The set is
//! small and curated upstream, so it is kept as a label rather than an enum.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{ExpenseError, ExpenseResult};

/// A pre-normalized spending category label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    /// Create a category, trimming surrounding whitespace
    ///
    /// Empty labels are rejected.
    pub fn new(label: impl AsRef<str>) -> ExpenseResult<Self> {
        let label = label.as_ref().trim();
        if label.is_empty() {
            return Err(ExpenseError::Validation(
                "Category label cannot be empty".into(),
            ));
        }
        Ok(Self(label.to_string()))
    }

    /// The category label
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_label() {
        let cat = Category::new("  Food ").unwrap();
        assert_eq!(cat.as_str(), "Food");
        assert_eq!(cat.to_string(), "Food");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(Category::new("   ").unwrap_err().is_validation());
    }

    #[test]
    fn test_ordering_is_by_name() {
        let mut cats = vec![
            Category::new("Transport").unwrap(),
            Category::new("Food").unwrap(),
            Category::new("Shopping").unwrap(),
        ];
        cats.sort();
        let names: Vec<_> = cats.iter().map(Category::as_str).collect();
        assert_eq!(names, vec!["Food", "Shopping", "Transport"]);
    }
}
