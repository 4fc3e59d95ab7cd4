use std::collections::HashMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AssociationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cohort {
    Case,
    Control,
}

impl Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cohort::Case => write!(f, "case"),
            Cohort::Control => write!(f, "control"),
        }
    }
}

///
/// Data of the case and control cohorts for one test.
///
#[derive(Debug, Clone)]
pub struct CaseControl<T> {
    data: HashMap<Cohort, T>,
}

impl<T> Default for CaseControl<T> {
    fn default() -> Self {
        CaseControl {
            data: HashMap::with_capacity(2),
        }
    }
}

impl<T> CaseControl<T> {
    pub fn new(case: T, control: T) -> Self {
        let mut case_control = Self::default();
        case_control.set_case(case);
        case_control.set_control(control);
        case_control
    }

    pub fn set_case(&mut self, data: T) {
        self.data.insert(Cohort::Case, data);
    }

    pub fn set_control(&mut self, data: T) {
        self.data.insert(Cohort::Control, data);
    }

    pub fn get(&self, cohort: Cohort) -> Result<&T, AssociationError> {
        self.data
            .get(&cohort)
            .ok_or(AssociationError::MissingCohort(cohort))
    }
}

/// Statistic and two-sided p-value of a test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub statistic: f64,
    pub p_value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssociationTest {
    StudentT,
    Z,
    MannWhitneyU,
}

impl FromStr for AssociationTest {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "t" | "student" => Ok(AssociationTest::StudentT),
            "z" => Ok(AssociationTest::Z),
            "u" | "mann-whitney" => Ok(AssociationTest::MannWhitneyU),
            _ => Err(format!("Invalid association test: {}", s)),
        }
    }
}

impl Display for AssociationTest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssociationTest::StudentT => write!(f, "t"),
            AssociationTest::Z => write!(f, "z"),
            AssociationTest::MannWhitneyU => write!(f, "u"),
        }
    }
}

///
/// Observations of a cohort, rejecting NaN and infinities.
///
pub(crate) fn finite_observations(
    case_control: &CaseControl<Vec<f64>>,
    cohort: Cohort,
) -> Result<&[f64], AssociationError> {
    let data = case_control.get(cohort)?;
    if data.iter().any(|x| !x.is_finite()) {
        return Err(AssociationError::NonFiniteObservation(cohort));
    }
    Ok(data.as_slice())
}
