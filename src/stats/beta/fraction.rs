use log::debug;

/// Tuning of the modified Lentz evaluation.
///
/// The reference values are part of the numeric contract: any other setting
/// changes the digits that come out of `incomplete_beta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LentzConfig {
    /// Hard cap on the number of (even, odd) step pairs
    pub max_iterations: usize,
    /// Convergence tolerance on `|delta - 1|`
    pub epsilon: f32,
    /// Floor substituted for near-zero denominators
    pub fp_min: f32,
}

impl LentzConfig {
    pub const REFERENCE: LentzConfig = LentzConfig {
        max_iterations: 1000,
        epsilon: 3.0e-7,
        fp_min: 1.0e-30,
    };
}

impl Default for LentzConfig {
    fn default() -> Self {
        LentzConfig::REFERENCE
    }
}

pub(super) struct ContinuedFraction {
    pub value: f32,
    pub iterations: usize,
    pub converged: bool,
}

/// Evaluate the continued fraction of the incomplete beta function
/// (Numerical Recipes 6.4.6) by the modified Lentz method.
///
/// Hitting `max_iterations` is not an error: the partial product is
/// returned with `converged` unset.
pub(super) fn continued_fraction(
    a: f32,
    b: f32,
    x: f32,
    config: &LentzConfig,
) -> ContinuedFraction {
    let floor = |v: f32| if v.abs() < config.fp_min { config.fp_min } else { v };

    let qab = a + b;
    let qap = a + 1.0;
    let qam = a - 1.0;

    let mut c = 1.0;
    let mut d = 1.0 / floor(1.0 - qab * x / qap);
    let mut h = d;

    for m in 1..=config.max_iterations {
        let mf = m as f32;
        let m2 = 2.0 * mf;

        // even step
        let aa = mf * (b - mf) * x / ((qam + m2) * (a + m2));
        d = floor(1.0 + aa * d);
        c = floor(1.0 + aa / c);
        d = 1.0 / d;
        h *= d * c;

        // odd step
        let aa = -(a + mf) * (qab + mf) * x / ((a + m2) * (qap + m2));
        d = floor(1.0 + aa * d);
        c = floor(1.0 + aa / c);
        d = 1.0 / d;
        let delta = d * c;
        h *= delta;

        if (delta - 1.0).abs() < config.epsilon {
            return ContinuedFraction {
                value: h,
                iterations: m,
                converged: true,
            };
        }
    }

    debug!(
        "Continued fraction for a={}, b={}, x={} did not converge in {} iterations",
        a, b, x, config.max_iterations
    );

    ContinuedFraction {
        value: h,
        iterations: config.max_iterations,
        converged: false,
    }
}
