use statrs::distribution::{ContinuousCDF, Normal};

use crate::errors::AssociationError;
use crate::models::{CaseControl, Cohort, TestResult};

fn proportion(
    case_control: &CaseControl<(u64, u64)>,
    cohort: Cohort,
) -> Result<(f64, f64), AssociationError> {
    let &(successes, trials) = case_control.get(cohort)?;
    if trials == 0 || successes > trials {
        return Err(AssociationError::InvalidProportion {
            cohort,
            successes,
            trials,
        });
    }
    Ok((successes as f64, trials as f64))
}

///
/// Two-proportion z test on `(successes, trials)` per cohort, using the
/// pooled proportion for the standard error.
///
pub fn two_proportion_z(
    case_control: &CaseControl<(u64, u64)>,
) -> Result<TestResult, AssociationError> {
    let (case_successes, case_trials) = proportion(case_control, Cohort::Case)?;
    let (control_successes, control_trials) = proportion(case_control, Cohort::Control)?;

    let pooled = (case_successes + control_successes) / (case_trials + control_trials);
    let se = (pooled * (1.0 - pooled) * (1.0 / case_trials + 1.0 / control_trials)).sqrt();
    if se == 0.0 {
        return Err(AssociationError::ZeroVariance);
    }

    let statistic = (case_successes / case_trials - control_successes / control_trials) / se;

    let dist = Normal::new(0.0, 1.0).map_err(|e| AssociationError::Distribution(e.to_string()))?;
    let p_value = (2.0 * dist.sf(statistic.abs())).min(1.0);

    Ok(TestResult { statistic, p_value })
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case((100, 500), (55, 300), 0.577422, 0.563654)]
    #[case((20, 60), (30, 80), -0.509175, 0.610630)]
    fn test_two_proportions(
        #[case] case: (u64, u64),
        #[case] control: (u64, u64),
        #[case] statistic: f64,
        #[case] p_value: f64,
    ) {
        let result = two_proportion_z(&CaseControl::new(case, control)).unwrap();
        assert!((result.statistic - statistic).abs() < 1e-5);
        assert!((result.p_value - p_value).abs() < 1e-5);
    }

    #[rstest]
    fn test_more_successes_than_trials() {
        let result = two_proportion_z(&CaseControl::new((5, 4), (1, 10)));
        assert_eq!(
            result.unwrap_err(),
            AssociationError::InvalidProportion {
                cohort: Cohort::Case,
                successes: 5,
                trials: 4
            }
        );
    }

    #[rstest]
    fn test_no_trials() {
        let result = two_proportion_z(&CaseControl::new((0, 10), (0, 0)));
        assert!(matches!(
            result,
            Err(AssociationError::InvalidProportion {
                cohort: Cohort::Control,
                ..
            })
        ));
    }

    #[rstest]
    fn test_all_failures_has_no_variance() {
        let result = two_proportion_z(&CaseControl::new((0, 10), (0, 20)));
        assert_eq!(result.unwrap_err(), AssociationError::ZeroVariance);
    }
}
