//! Special functions used by the distribution.
//!
//! Only the gamma function and its natural logarithm are needed here:
//! the raw moments of the distribution evaluate to ratios of gamma
//! functions.

/// Coefficients of the six-term Lanczos-style series for ln Γ(x),
/// applied as 1 + Σ cᵢ/(x+i) for i = 0..5.
const LANCZOS_COEFFS: [f64; 6] = [
    76.18009173,
    -86.50532033,
    24.01409822,
    -1.231739516,
    0.00120858003,
    -0.000005363820,
];

/// Log-gamma function: ln Γ(x) for x > 0.
///
/// Uses a fixed six-coefficient rational approximation. The
/// approximation degrades for x ≤ 0; callers are expected to pass
/// positive arguments only.
pub fn lgamma(x: f64) -> f64 {
    let tmp = (x - 0.5) * (x + 4.5).ln() - (x + 4.5);
    let mut series = 1.0;
    for (i, &c) in LANCZOS_COEFFS.iter().enumerate() {
        series += c / (x + i as f64);
    }
    tmp + (series * (2.0 * std::f64::consts::PI).sqrt()).ln()
}

/// Gamma function: Γ(x) for x > 0.
pub fn gamma(x: f64) -> f64 {
    lgamma(x).exp()
}
