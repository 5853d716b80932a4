/// Lanczos series coefficients for g = 5.
static LANCZOS_COEFFICIENTS: [f64; 6] = [
    76.18009172947146,
    -86.50532032941677,
    24.01409824083091,
    -1.231739572450155,
    0.1208650973866179e-2,
    -0.5395239384953e-5,
];

/// ln Γ(xx) for xx > 0.
///
/// Accumulates in double precision; the subtraction of the two large log
/// terms cancels badly in single precision. Non-positive input yields a
/// meaningless value rather than an error.
pub(super) fn log_gamma(xx: f32) -> f32 {
    let x = xx as f64;
    let mut y = x;

    let mut tmp = x + 5.5;
    tmp -= (x + 0.5) * tmp.ln();

    let mut ser = 1.000000000190015;
    for coefficient in LANCZOS_COEFFICIENTS.iter() {
        y += 1.0;
        ser += coefficient / y;
    }

    (-tmp + (2.5066282746310005 * ser / x).ln()) as f32
}
