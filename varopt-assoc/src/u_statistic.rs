//! Mann-Whitney U (Wilcoxon rank-sum) test.
//!
//! `U` is the smaller of the two one-sided statistics, tied pairs counting
//! one half. Small samples without ties get an exact p-value from the null
//! distribution of `U`; everything else uses the normal approximation with
//! a tie-corrected variance.

use log::debug;
use statrs::distribution::{ContinuousCDF, Normal};

use crate::consts::EXACT_U_MAX_SAMPLE;
use crate::errors::AssociationError;
use crate::models::{CaseControl, Cohort, TestResult, finite_observations};

struct RankSum {
    /// rank sum of the case cohort
    case_ranks: f64,
    /// sum of t^3 - t over groups of t tied values
    tie_term: f64,
}

fn rank_sum(case: &[f64], control: &[f64]) -> RankSum {
    let mut pooled: Vec<(f64, Cohort)> = case
        .iter()
        .map(|&x| (x, Cohort::Case))
        .chain(control.iter().map(|&x| (x, Cohort::Control)))
        .collect();
    pooled.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut case_ranks = 0.0;
    let mut tie_term = 0.0;
    let mut start = 0;

    while start < pooled.len() {
        let mut end = start + 1;
        while end < pooled.len() && pooled[end].0 == pooled[start].0 {
            end += 1;
        }

        // ranks are 1-based, ties share the mean rank of their run
        let tied = (end - start) as f64;
        let mid_rank = (start + end + 1) as f64 / 2.0;
        case_ranks += pooled[start..end]
            .iter()
            .filter(|(_, cohort)| *cohort == Cohort::Case)
            .count() as f64
            * mid_rank;
        tie_term += tied.powi(3) - tied;

        start = end;
    }

    RankSum {
        case_ranks,
        tie_term,
    }
}

///
/// `P(U <= u)` under the null hypothesis for samples of size `m` and `n`.
///
/// Counts the orderings giving each `U` with the recurrence
/// `f(m, n; k) = f(m - 1, n; k - n) + f(m, n - 1; k)`.
///
fn exact_cdf(u: usize, m: usize, n: usize) -> f64 {
    let max_u = m * n;

    // previous[j][k]: orderings of (i - 1) case and j control values with U = k
    let mut previous: Vec<Vec<f64>> = (0..=n)
        .map(|_| {
            let mut counts = vec![0.0; max_u + 1];
            counts[0] = 1.0;
            counts
        })
        .collect();

    for i in 1..=m {
        let mut current: Vec<Vec<f64>> = vec![vec![0.0; max_u + 1]; n + 1];
        current[0][0] = 1.0;
        for j in 1..=n {
            for k in 0..=i * j {
                let top_is_case = if k >= j { previous[j][k - j] } else { 0.0 };
                current[j][k] = top_is_case + current[j - 1][k];
            }
        }
        previous = current;
    }

    let counts = &previous[n];
    let total: f64 = counts.iter().sum();
    counts[..=u.min(max_u)].iter().sum::<f64>() / total
}

///
/// Rank-sum test of the case cohort against the control cohort.
///
pub fn mann_whitney_u(case_control: &CaseControl<Vec<f64>>) -> Result<TestResult, AssociationError> {
    let case = finite_observations(case_control, Cohort::Case)?;
    let control = finite_observations(case_control, Cohort::Control)?;

    for (cohort, data) in [(Cohort::Case, case), (Cohort::Control, control)] {
        if data.is_empty() {
            return Err(AssociationError::TooFewObservations {
                cohort,
                needed: 1,
                found: 0,
            });
        }
    }

    let m = case.len();
    let n = control.len();
    let pairs = (m * n) as f64;

    let ranks = rank_sum(case, control);
    let u_case = ranks.case_ranks - (m * (m + 1)) as f64 / 2.0;
    let statistic = u_case.min(pairs - u_case);

    let exact = ranks.tie_term == 0.0 && m <= EXACT_U_MAX_SAMPLE && n <= EXACT_U_MAX_SAMPLE;
    let one_sided = if exact {
        exact_cdf(statistic as usize, m, n)
    } else {
        debug!(
            "Normal approximation for Mann-Whitney U with {} case and {} control values",
            m, n
        );
        let total = (m + n) as f64;
        let variance =
            pairs / 12.0 * ((total + 1.0) - ranks.tie_term / (total * (total - 1.0)));
        if variance <= 0.0 {
            return Err(AssociationError::ZeroVariance);
        }

        let z = (statistic - pairs / 2.0) / variance.sqrt();
        let dist =
            Normal::new(0.0, 1.0).map_err(|e| AssociationError::Distribution(e.to_string()))?;
        dist.cdf(z)
    };

    Ok(TestResult {
        statistic,
        p_value: (2.0 * one_sided).min(1.0),
    })
}
