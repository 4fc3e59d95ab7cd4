/// Largest cohort size for which the exact Mann-Whitney U distribution is used.
pub const EXACT_U_MAX_SAMPLE: usize = 20;

/// Observations per cohort needed for a sample variance.
pub const MIN_T_OBSERVATIONS: usize = 2;
