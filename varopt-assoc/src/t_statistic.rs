use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::consts::MIN_T_OBSERVATIONS;
use crate::errors::AssociationError;
use crate::models::{CaseControl, Cohort, TestResult, finite_observations};

struct Moments {
    n: f64,
    mean: f64,
    /// sum of squared deviations
    ss: f64,
}

impl Moments {
    fn of(data: &[f64]) -> Self {
        let n = data.len() as f64;
        let mean = data.iter().sum::<f64>() / n;
        let ss = data.iter().map(|x| (x - mean).powi(2)).sum();
        Moments { n, mean, ss }
    }

    fn population_variance(&self) -> f64 {
        self.ss / self.n
    }

    fn sample_variance(&self) -> f64 {
        self.ss / (self.n - 1.0)
    }
}

fn cohort_moments(
    case_control: &CaseControl<Vec<f64>>,
    cohort: Cohort,
) -> Result<Moments, AssociationError> {
    let data = finite_observations(case_control, cohort)?;
    if data.len() < MIN_T_OBSERVATIONS {
        return Err(AssociationError::TooFewObservations {
            cohort,
            needed: MIN_T_OBSERVATIONS,
            found: data.len(),
        });
    }
    Ok(Moments::of(data))
}

///
/// Compare the means of the case and control cohorts.
///
/// The statistic is `(mean_case - mean_control) / sqrt(var_case + var_control)`
/// with population variances. The two-sided p-value comes from Student's t
/// with Welch-Satterthwaite degrees of freedom.
///
pub fn student_t(case_control: &CaseControl<Vec<f64>>) -> Result<TestResult, AssociationError> {
    let case = cohort_moments(case_control, Cohort::Case)?;
    let control = cohort_moments(case_control, Cohort::Control)?;

    let spread = (case.population_variance() + control.population_variance()).sqrt();
    if spread == 0.0 {
        return Err(AssociationError::ZeroVariance);
    }
    let statistic = (case.mean - control.mean) / spread;

    let a = case.sample_variance() / case.n;
    let b = control.sample_variance() / control.n;
    let freedom = (a + b).powi(2) / (a.powi(2) / (case.n - 1.0) + b.powi(2) / (control.n - 1.0));

    let dist = StudentsT::new(0.0, 1.0, freedom)
        .map_err(|e| AssociationError::Distribution(e.to_string()))?;
    let p_value = (2.0 * dist.sf(statistic.abs())).min(1.0);

    Ok(TestResult { statistic, p_value })
}
