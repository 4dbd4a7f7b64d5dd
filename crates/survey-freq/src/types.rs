//! Core types for frequency distributions and analysis results

use std::fmt;

use serde::{Serialize, Serializer};

/// A single row of a frequency table
///
/// Field names serialize in PascalCase so the record can feed a table widget
/// directly as `{Category, Frequency, Percent}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct FrequencyRow {
    /// The distinct non-missing value observed
    pub category: String,
    /// Number of responses with this value
    pub frequency: u64,
    /// Share of valid responses, rounded to 2 decimal places
    pub percent: f64,
}

impl fmt::Display for FrequencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: count={}, percent={:.2}",
            self.category, self.frequency, self.percent
        )
    }
}

/// A frequency distribution over the distinct values of one column
///
/// Rows are ordered by descending frequency; rows with equal frequency keep
/// the order in which their category was first observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Create a frequency table from already-ordered rows
    pub fn new(rows: Vec<FrequencyRow>) -> Self {
        Self { rows }
    }

    /// Get the rows
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Get the number of distinct categories
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all frequencies (equals the sample size)
    pub fn total_count(&self) -> u64 {
        self.rows.iter().map(|row| row.frequency).sum()
    }

    /// Get frequencies as a vector, in row order
    pub fn frequencies(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.frequency).collect()
    }

    /// Get category names as a vector, in row order
    pub fn categories(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.category.as_str()).collect()
    }

    /// Sum of all percent values (close to 100.0 within rounding error)
    pub fn percent_total(&self) -> f64 {
        self.rows.iter().map(|row| row.percent).sum()
    }
}

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FrequencyTable({} categories, n={})",
            self.len(),
            self.total_count()
        )
    }
}

/// A goodness-of-fit p-value, or the marker that no test could be run
///
/// A uniform-fit test needs at least 2 categories; with 0 or 1 the p-value is
/// [`PValue::NotComputable`]. That is a valid result state, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PValue {
    /// p-value of the chi-square goodness-of-fit test
    Computed(f64),
    /// Fewer than 2 categories; no test was run
    NotComputable,
}

impl PValue {
    /// Get the p-value if one was computed
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Computed(p) => Some(*p),
            Self::NotComputable => None,
        }
    }

    /// Check whether a test was run
    pub fn is_computable(&self) -> bool {
        matches!(self, Self::Computed(_))
    }
}

impl Serialize for PValue {
    /// Serializes as a nullable scalar: `0.123` or `null`
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Computed(p) => serializer.serialize_some(p),
            Self::NotComputable => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for PValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Computed(p) => write!(f, "p-value: {p:.3}"),
            Self::NotComputable => write!(f, "p-value: N/A"),
        }
    }
}

/// The full analysis of one survey column
///
/// Pure value computed from the immutable dataset; never mutated after
/// creation, safe to cache and share.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnAnalysis {
    table: FrequencyTable,
    p_value: PValue,
    sample_size: u64,
}

impl ColumnAnalysis {
    /// Create a new analysis result
    pub fn new(table: FrequencyTable, p_value: PValue, sample_size: u64) -> Self {
        Self {
            table,
            p_value,
            sample_size,
        }
    }

    /// Get the frequency table
    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    /// Get the goodness-of-fit p-value
    pub fn p_value(&self) -> PValue {
        self.p_value
    }

    /// Count of non-missing responses
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// Check if the column had no valid responses at all
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Display label for the column, e.g. `"Gender (N=87)"`
    pub fn label(&self, column: &str) -> String {
        format!("{} (N={})", column, self.sample_size)
    }
}

impl fmt::Display for ColumnAnalysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColumnAnalysis({} categories, n={}, {})",
            self.table.len(),
            self.sample_size,
            self.p_value
        )
    }
}
