//! One-way chi-square goodness-of-fit test against a uniform null

use statrs::distribution::{ChiSquared, ContinuousCDF};

use crate::error::{Error, Result};

/// Result of a chi-square goodness-of-fit test
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct GoodnessOfFit {
    statistic: f64,
    degrees_of_freedom: u64,
    p_value: f64,
}

impl GoodnessOfFit {
    /// The chi-square statistic
    pub fn statistic(&self) -> f64 {
        self.statistic
    }

    /// Degrees of freedom (number of categories minus one)
    pub fn degrees_of_freedom(&self) -> u64 {
        self.degrees_of_freedom
    }

    /// Probability of a statistic at least this extreme under the uniform null
    pub fn p_value(&self) -> f64 {
        self.p_value
    }
}

impl std::fmt::Display for GoodnessOfFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "chi2={:.3} (df={}, p-value: {:.3})",
            self.statistic, self.degrees_of_freedom, self.p_value
        )
    }
}

/// Test observed category counts against the null hypothesis that all
/// categories are equally likely
///
/// The expected count per category is `total / k`. The p-value is
/// `1 - CDF(statistic, k - 1)` from the chi-square reference distribution.
/// Needs at least 2 categories and at least one nonzero count.
///
/// The classic rule of thumb that expected counts should be at least 5 is not
/// enforced; when violated a warning is logged and the p-value is left
/// unchanged.
pub fn chi_square_uniform(observed: &[u64]) -> Result<GoodnessOfFit> {
    let k = observed.len();
    if k < 2 {
        return Err(Error::InsufficientCategories {
            expected: 2,
            actual: k,
        });
    }

    let total: u64 = observed.iter().sum();
    if total == 0 {
        return Err(Error::InvalidInput(
            "observed counts are all zero".to_string(),
        ));
    }

    let expected = total as f64 / k as f64;
    if expected < 5.0 {
        tracing::warn!(
            expected,
            categories = k,
            "expected count below 5; chi-square approximation may be unreliable"
        );
    }

    let statistic: f64 = observed
        .iter()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();

    let dist = ChiSquared::new((k - 1) as f64).map_err(|e| {
        Error::Computation(format!("failed to create chi-square distribution: {e}"))
    })?;
    let p_value = 1.0 - dist.cdf(statistic);

    Ok(GoodnessOfFit {
        statistic,
        degrees_of_freedom: (k - 1) as u64,
        p_value,
    })
}
