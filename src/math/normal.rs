//! Standard normal quantile function.
//!
//! Pore size distributions are frequently normal or log-normal, so `Φ⁻¹` sits on
//! the hot path of every seed-to-diameter evaluation.
//!
//! We use Acklam's rational approximation:
//! - central region `p ∈ [P_LOW, 1 - P_LOW]`: rational function in `(p - ½)²`
//! - tails: rational function in `√(-2 ln p)`
//!
//! Relative error is below `1.15e-9` over the whole open interval, and `p = ½`
//! maps to exactly `0.0`.

const A: [f64; 6] = [
    -3.969683028665376e+01,
    2.209460984245205e+02,
    -2.759285104469687e+02,
    1.383577518672690e+02,
    -3.066479806614716e+01,
    2.506628277459239e+00,
];

const B: [f64; 5] = [
    -5.447609879822406e+01,
    1.615858368580409e+02,
    -1.556989798598866e+02,
    6.680131188771972e+01,
    -1.328068155288572e+01,
];

const C: [f64; 6] = [
    -7.784894002430293e-03,
    -3.223964580411365e-01,
    -2.400758277161838e+00,
    -2.549732539343734e+00,
    4.374664141464968e+00,
    2.938163982698783e+00,
];

const D: [f64; 4] = [
    7.784695709041462e-03,
    3.224671290700398e-01,
    2.445134137142996e+00,
    3.754408661907416e+00,
];

/// Breakpoint between the tail and central approximations.
const P_LOW: f64 = 0.02425;

/// Inverse of the standard normal CDF.
///
/// Returns `-∞` at `p = 0`, `+∞` at `p = 1` and `NaN` outside `[0, 1]`.
pub fn standard_normal_quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        return tail(q);
    }
    if p > 1.0 - P_LOW {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        return -tail(q);
    }

    let q = p - 0.5;
    let r = q * q;
    let numer = ((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5];
    let denom = ((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0;
    numer * q / denom
}

fn tail(q: f64) -> f64 {
    let numer = ((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5];
    let denom = (((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0;
    numer / denom
}
