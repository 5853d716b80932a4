use log::debug;

use crate::stats::beta::incomplete_beta;
use crate::stats::error::SignificanceError;

/// Two-sided p-value of a t-statistic with `df` degrees of freedom.
///
/// `df` must be positive; it is not checked (see [`try_p_value`]).
pub fn p_value(t: f32, df: f32) -> f32 {
    incomplete_beta(0.5 * df, 0.5, df / (df + t * t))
}

/// [`p_value`] with a finite statistic and positive degrees of freedom enforced.
pub fn try_p_value(t: f32, df: f32) -> Result<f32, SignificanceError> {
    if !t.is_finite() {
        debug!("Rejecting t-statistic {}", t);
        return Err(SignificanceError::NonFiniteStatistic(t));
    }
    if df.is_nan() || df <= 0.0 {
        debug!("Rejecting degrees of freedom {}", df);
        return Err(SignificanceError::InvalidDegreesOfFreedom(df));
    }
    Ok(p_value(t, df))
}

/// -log10 of the two-sided p-value.
pub fn neg_log_pvalue(t: f32, df: f32) -> f32 {
    -p_value(t, df).log10()
}
