//! Run-set assembly and validation.
//!
//! All consistency checks run here, before any derived quantity is computed:
//! a mismatched field or cell geometry invalidates the fit, so assembly fails
//! loud instead of producing a plausible-looking number.

use crate::calc::branch;
use crate::calc::config::CalcConfig;
use crate::calc::error::Error;
use crate::model::runset::RunSet;
use crate::model::sample::{PolarizationSample, ResolvedSample};

/// Validates and branch-resolves one measurement's worth of samples.
///
/// Every relaxed-ion sample (and the clamped-ion sample, if present) is
/// resolved independently against the zero-field reference: the relaxed runs
/// are different ionic configurations, not sequential field steps, so chaining
/// them would be incorrect.
pub fn assemble(
    zero: PolarizationSample,
    relaxed: Vec<PolarizationSample>,
    clamped: Option<PolarizationSample>,
    config: &CalcConfig,
) -> Result<RunSet, Error> {
    if relaxed.is_empty() {
        return Err(Error::EmptyRelaxedSet);
    }
    if config.efield <= 0.0 {
        return Err(Error::ZeroField(config.efield));
    }
    if let Some(found) = zero.field {
        if found.abs() > config.field_tolerance {
            return Err(Error::NonZeroReference {
                label: zero.label.clone(),
                found,
            });
        }
    }

    let quantum = zero.quantum;
    for sample in relaxed.iter().chain(clamped.iter()) {
        check_field(sample, config)?;
        check_quantum(sample, quantum, config)?;
    }

    let reference = ResolvedSample::reference(zero);
    let p_ref = reference.polarization;

    let relaxed = relaxed
        .into_iter()
        .map(|s| branch::resolve(s, p_ref, quantum, config.branch_tolerance))
        .collect::<Result<Vec<_>, _>>()?;

    let clamped = clamped
        .map(|s| branch::resolve(s, p_ref, quantum, config.branch_tolerance))
        .transpose()?;

    Ok(RunSet {
        zero: reference,
        relaxed,
        clamped,
        field: config.efield,
        quantum,
    })
}

fn check_field(sample: &PolarizationSample, config: &CalcConfig) -> Result<(), Error> {
    if let Some(found) = sample.field {
        if (found - config.efield).abs() > config.field_tolerance {
            return Err(Error::FieldMismatch {
                label: sample.label.clone(),
                expected: config.efield,
                found,
            });
        }
    }
    Ok(())
}

fn check_quantum(
    sample: &PolarizationSample,
    expected: f64,
    config: &CalcConfig,
) -> Result<(), Error> {
    if (sample.quantum - expected).abs() > config.quantum_tolerance {
        return Err(Error::QuantumMismatch {
            label: sample.label.clone(),
            expected,
            found: sample.quantum,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(label: &str, field: Option<f64>, polarization: f64) -> PolarizationSample {
        PolarizationSample {
            label: label.into(),
            field,
            electronic: polarization,
            ionic: 0.0,
            volume: 200.0,
            // Well above twice the response, so the true signal sits on
            // branch 0.
            quantum: 0.05,
        }
    }

    fn zero() -> PolarizationSample {
        sample("zero.out", Some(0.0), 0.0)
    }

    #[test]
    fn assembles_and_resolves_against_the_reference() {
        let relaxed = vec![
            sample("a.out", Some(0.001), 0.00926),
            // Off by one quantum; must come back to the same value.
            sample("b.out", Some(0.001), 0.00926 + 0.05),
        ];
        let set = assemble(zero(), relaxed, None, &CalcConfig::default()).expect("assemble");

        assert_eq!(set.relaxed[0].branch, 0);
        assert_eq!(set.relaxed[1].branch, 1);
        assert!((set.relaxed_mean() - 0.00926).abs() < 1e-12);
        assert!(set.relaxed_spread() < 1e-12);
    }

    #[test]
    fn rejects_empty_relaxed_set() {
        let err = assemble(zero(), Vec::new(), None, &CalcConfig::default()).unwrap_err();
        assert!(matches!(err, Error::EmptyRelaxedSet));
    }

    #[test]
    fn rejects_zero_configured_field() {
        let config = CalcConfig {
            efield: 0.0,
            ..CalcConfig::default()
        };
        let relaxed = vec![sample("a.out", None, 0.00926)];
        let err = assemble(zero(), relaxed, None, &config).unwrap_err();
        assert!(matches!(err, Error::ZeroField(_)));
    }

    #[test]
    fn rejects_reference_with_applied_field() {
        let bad_zero = sample("zero.out", Some(0.001), 0.0);
        let relaxed = vec![sample("a.out", Some(0.001), 0.00926)];
        let err = assemble(bad_zero, relaxed, None, &CalcConfig::default()).unwrap_err();
        assert!(matches!(err, Error::NonZeroReference { .. }));
    }

    #[test]
    fn rejects_field_mismatch_and_names_the_file() {
        let relaxed = vec![
            sample("a.out", Some(0.001), 0.00926),
            sample("b.out", Some(0.002), 0.00926),
        ];
        let err = assemble(zero(), relaxed, None, &CalcConfig::default()).unwrap_err();
        assert!(err.to_string().contains("b.out"));
        assert!(matches!(err, Error::FieldMismatch { .. }));
    }

    #[test]
    fn rejects_clamped_sample_with_different_cell() {
        let mut clamped = sample("clamped.out", Some(0.001), 0.004);
        clamped.quantum = 0.01;
        let relaxed = vec![sample("a.out", Some(0.001), 0.00926)];
        let err = assemble(zero(), relaxed, Some(clamped), &CalcConfig::default()).unwrap_err();
        assert!(matches!(err, Error::QuantumMismatch { .. }));
    }

    #[test]
    fn quantum_roundoff_within_tolerance_is_accepted() {
        let mut relaxed = sample("a.out", Some(0.001), 0.00926);
        relaxed.quantum += 1e-9;
        let set = assemble(zero(), vec![relaxed], None, &CalcConfig::default())
            .expect("assemble");
        assert_eq!(set.relaxed[0].branch, 0);
    }

    #[test]
    fn samples_without_field_echo_pass_validation() {
        let relaxed = vec![sample("a.out", None, 0.00926)];
        let set = assemble(zero(), relaxed, None, &CalcConfig::default()).expect("assemble");
        assert_eq!(set.field, 0.001);
    }
}
