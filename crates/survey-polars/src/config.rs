//! Survey column-set configuration

use serde::{Deserialize, Serialize};

/// Ordered set of survey columns selected for analysis
///
/// The column set is static configuration supplied by the caller — typically
/// the fixed list of demographic questions a report covers — so the analysis
/// itself stays reusable over any dataset schema. Duplicate names are dropped
/// (first occurrence wins) and order is preserved.
///
/// Serializes transparently as a plain list of names, so a column set can
/// live in a config file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: Vec<String>,
}

impl ColumnSet {
    /// Create a column set, deduplicating while preserving order
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut deduped: Vec<String> = Vec::new();
        for column in columns {
            let column = column.into();
            if !deduped.contains(&column) {
                deduped.push(column);
            }
        }
        Self { columns: deduped }
    }

    /// Column names in configured order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    /// Check whether a column is part of the set
    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column == name)
    }

    /// Get the number of columns
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ColumnSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_order() {
        let set = ColumnSet::new(["Gender", "Age Group", "Gender", "Occupation"]);
        assert_eq!(
            set.names().collect::<Vec<_>>(),
            vec!["Gender", "Age Group", "Occupation"]
        );
        assert_eq!(set.len(), 3);
        assert!(set.contains("Age Group"));
        assert!(!set.contains("Income"));
    }

    #[test]
    fn test_serde_round_trip() {
        let set = ColumnSet::new(["Gender", "Age Group"]);
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["Gender","Age Group"]"#);
        let back: ColumnSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
