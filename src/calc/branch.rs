//! Berry-phase branch correction.
//!
//! The polarization reported by `cp.x` is defined only modulo the quantum
//! `q = |a₃| / V`; the branch chosen internally can jump between otherwise
//! continuous runs. Correction is an explicit round-to-nearest over the
//! offset from the zero-field reference, kept as a separate integer so it is
//! independently testable.

use crate::calc::error::Error;
use crate::model::sample::{PolarizationSample, ResolvedSample};

/// Resolves the branch of `sample` against the reference polarization.
///
/// Picks `n = round((P_raw − P_ref) / q)` and sets
/// `P_resolved = P_raw − n·q`. Fails with [`Error::AmbiguousBranch`] when the
/// offset lies within `tolerance` quanta of the midpoint between two
/// integers, since rounding either way would silently pick physics.
pub fn resolve(
    sample: PolarizationSample,
    reference: f64,
    quantum: f64,
    tolerance: f64,
) -> Result<ResolvedSample, Error> {
    let offset = (sample.polarization() - reference) / quantum;
    let n = offset.round();

    // |offset − n| ≤ 0.5 always holds; the midpoint is the ambiguous zone.
    if (offset - n).abs() >= 0.5 - tolerance {
        let lower = offset.floor() as i64;
        return Err(Error::AmbiguousBranch {
            label: sample.label.clone(),
            offset,
            lower,
            upper: lower + 1,
        });
    }

    let polarization = sample.polarization() - n * quantum;
    Ok(ResolvedSample {
        sample,
        polarization,
        branch: n as i64,
    })
}
