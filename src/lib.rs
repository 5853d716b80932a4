//! Two-sided significance of a Student's t-statistic, computed from the
//! regularized incomplete beta function.

pub mod stats;

pub use stats::beta::{
    incomplete_beta, incomplete_beta_detailed, try_incomplete_beta, BetaEvaluation, Branch,
    LentzConfig,
};
pub use stats::error::SignificanceError;
pub use stats::significance::{neg_log_pvalue, p_value, try_p_value};
