use thiserror::Error;

use crate::models::Cohort;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssociationError {
    #[error("No data for the {0} cohort")]
    MissingCohort(Cohort),

    #[error("The {cohort} cohort needs at least {needed} observations, found {found}")]
    TooFewObservations {
        cohort: Cohort,
        needed: usize,
        found: usize,
    },

    #[error("Both cohorts have zero variance, the statistic is undefined")]
    ZeroVariance,

    #[error("Invalid proportion for the {cohort} cohort: {successes} successes out of {trials} trials")]
    InvalidProportion {
        cohort: Cohort,
        successes: u64,
        trials: u64,
    },

    #[error("Non-finite observation in the {0} cohort")]
    NonFiniteObservation(Cohort),

    #[error("Distribution error: {0}")]
    Distribution(String),
}
