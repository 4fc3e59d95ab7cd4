//! Case/control association statistics.
//!
//! Each test takes a [CaseControl] holding the data of both cohorts and
//! returns a [TestResult] with the statistic and its two-sided p-value:
//!
//! - [student_t]: difference of means over the pooled population spread
//! - [two_proportion_z]: pooled two-proportion z test on `(successes, trials)`
//! - [mann_whitney_u]: rank-sum test, exact for small untied samples

pub mod consts;
pub mod errors;
pub mod models;
pub mod t_statistic;
pub mod u_statistic;
pub mod z_statistic;

// re-exports
pub use errors::AssociationError;
pub use models::{AssociationTest, CaseControl, Cohort, TestResult};
pub use t_statistic::student_t;
pub use u_statistic::mann_whitney_u;
pub use z_statistic::two_proportion_z;
