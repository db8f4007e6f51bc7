//! Two-point linear-response fit.
//!
//! Only two field values are ever sampled (0 and E), so the susceptibility is
//! a finite difference, not a least-squares regression. The permittivity
//! conversion `ε = 1 + 4πχ` is the Gaussian atomic-unit convention used by
//! the upstream output; keeping it exact is the primary correctness risk of
//! the whole pipeline and is pinned by the tests below.

use std::f64::consts::PI;

use crate::model::response::FitResult;
use crate::model::runset::RunSet;

/// Fits the static (relaxed-ion) response of a run set.
///
/// Uses the mean of the resolved relaxed-ion polarizations as P(E) and
/// reports their spread as the goodness-of-fit measure.
pub fn fit_relaxed(set: &RunSet) -> FitResult {
    fit(set.zero.polarization, set.relaxed_mean(), set.field, set.relaxed_spread())
}

/// Fits the high-frequency (clamped-ion, electronic-only) response, when a
/// clamped-ion sample is present.
pub fn fit_clamped(set: &RunSet) -> Option<FitResult> {
    let clamped = set.clamped.as_ref()?;
    Some(fit(set.zero.polarization, clamped.polarization, set.field, 0.0))
}

fn fit(p0: f64, p_at_field: f64, field: f64, spread: f64) -> FitResult {
    let susceptibility = (p_at_field - p0) / field;
    FitResult {
        susceptibility,
        permittivity: 1.0 + 4.0 * PI * susceptibility,
        intercept: p0,
        spread,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::{PolarizationSample, ResolvedSample};

    fn resolved(label: &str, polarization: f64) -> ResolvedSample {
        ResolvedSample {
            sample: PolarizationSample {
                label: label.into(),
                field: Some(0.001),
                electronic: polarization,
                ionic: 0.0,
                volume: 1000.0,
                quantum: 0.01,
            },
            polarization,
            branch: 0,
        }
    }

    fn set(relaxed: &[f64], clamped: Option<f64>) -> RunSet {
        RunSet {
            zero: resolved("zero.out", 0.0),
            relaxed: relaxed.iter().map(|&p| resolved("r.out", p)).collect(),
            clamped: clamped.map(|p| resolved("c.out", p)),
            field: 0.001,
            quantum: 0.01,
        }
    }

    #[test]
    fn unit_convention_matches_the_gaussian_relation() {
        // P₀ = 0, P(0.001) = 0.00926 → χ = 9.26, ε = 1 + 4π·9.26 ≈ 117.36.
        let result = fit_relaxed(&set(&[0.00926], None));
        assert!((result.susceptibility - 9.26).abs() < 1e-12);
        assert!((result.permittivity - (1.0 + 4.0 * PI * 9.26)).abs() < 1e-12);
        assert!((result.permittivity - 117.3646).abs() < 1e-3);
        assert_eq!(result.spread, 0.0);
    }

    #[test]
    fn relaxed_fit_uses_the_sample_mean() {
        let result = fit_relaxed(&set(&[0.009, 0.01], None));
        assert!((result.susceptibility - 9.5).abs() < 1e-12);
        assert!(result.spread > 0.0);
    }

    #[test]
    fn nonzero_intercept_is_subtracted() {
        let mut s = set(&[0.01226], None);
        s.zero = resolved("zero.out", 0.003);
        let result = fit_relaxed(&s);
        assert!((result.susceptibility - 9.26).abs() < 1e-12);
        assert!((result.intercept - 0.003).abs() < 1e-15);
    }

    #[test]
    fn clamped_fit_is_absent_without_a_clamped_sample() {
        assert!(fit_clamped(&set(&[0.00926], None)).is_none());
    }

    #[test]
    fn clamped_fit_captures_the_electronic_response() {
        let result = fit_clamped(&set(&[0.00926], Some(0.00204))).expect("clamped fit");
        assert!((result.susceptibility - 2.04).abs() < 1e-12);
        assert_eq!(result.spread, 0.0);
    }
}
