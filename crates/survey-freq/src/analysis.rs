//! Column analysis: frequency distribution plus uniform goodness-of-fit

use std::collections::HashMap;

use crate::error::Result;
use crate::gof::chi_square_uniform;
use crate::types::{ColumnAnalysis, FrequencyRow, FrequencyTable, PValue};

/// Analyze one column of categorical responses
///
/// Missing responses (`None`) are dropped before anything else; they are never
/// a category of their own and do not count toward the sample size. The
/// remaining values are grouped by exact equality — no trimming, no case
/// folding — counted, and sorted by descending frequency with ties kept in
/// first-observed order. When at least 2 distinct categories remain, a
/// chi-square goodness-of-fit test against a uniform null supplies the
/// p-value; otherwise the p-value is [`PValue::NotComputable`].
///
/// Purely functional: the same input always yields the same result.
pub fn analyze<I, S>(values: I) -> Result<ColumnAnalysis>
where
    I: IntoIterator<Item = Option<S>>,
    S: AsRef<str>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut rows: Vec<FrequencyRow> = Vec::new();
    let mut sample_size: u64 = 0;

    for value in values.into_iter().flatten() {
        let value = value.as_ref();
        sample_size += 1;
        match index.get(value) {
            Some(&i) => rows[i].frequency += 1,
            None => {
                index.insert(value.to_string(), rows.len());
                rows.push(FrequencyRow {
                    category: value.to_string(),
                    frequency: 1,
                    percent: 0.0,
                });
            }
        }
    }

    for row in &mut rows {
        row.percent = round2(100.0 * row.frequency as f64 / sample_size as f64);
    }

    // Stable sort: equal frequencies keep first-observed order
    rows.sort_by(|a, b| b.frequency.cmp(&a.frequency));

    let p_value = if rows.len() >= 2 {
        let observed: Vec<u64> = rows.iter().map(|row| row.frequency).collect();
        PValue::Computed(chi_square_uniform(&observed)?.p_value())
    } else {
        PValue::NotComputable
    };

    Ok(ColumnAnalysis::new(
        FrequencyTable::new(rows),
        p_value,
        sample_size,
    ))
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
