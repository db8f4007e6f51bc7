//! Error types for the dielectric-response pipeline.
//!
//! Every variant names the offending input file where one exists. A wrong
//! branch choice or a mismatched field silently invalidates the physics, so
//! all of these abort the run; there is no degraded-result mode.

use thiserror::Error;

/// Errors that can occur while assembling a run set or fitting the response.
#[derive(Debug, Error)]
pub enum Error {
    /// The configured field magnitude does not permit a finite-difference fit.
    #[error("electric field magnitude must be positive to fit the response (got {0} a.u.)")]
    ZeroField(f64),

    /// No relaxed-ion sample was supplied.
    #[error("at least one relaxed-ion sample is required")]
    EmptyRelaxedSet,

    /// The zero-field file itself reports an applied field.
    #[error("zero-field output '{label}' reports a non-zero field of {found} a.u.")]
    NonZeroReference { label: String, found: f64 },

    /// A finite-field file reports a field that disagrees with the
    /// configured magnitude.
    #[error(
        "field mismatch in '{label}': configured {expected} a.u. but file reports {found} a.u."
    )]
    FieldMismatch {
        label: String,
        expected: f64,
        found: f64,
    },

    /// A file's derived polarization quantum disagrees with the zero-field
    /// reference, i.e. the runs do not share a cell geometry.
    #[error(
        "polarization quantum mismatch in '{label}': reference {expected} a.u. but file yields {found} a.u. (different cell geometry?)"
    )]
    QuantumMismatch {
        label: String,
        expected: f64,
        found: f64,
    },

    /// Branch correction found two equally plausible quantum multiples.
    ///
    /// The offset sits within tolerance of a half-integer number of quanta,
    /// so rounding either way would be a guess.
    #[error(
        "ambiguous branch for '{label}': offset of {offset:.4} quanta is equally close to {lower} and {upper}"
    )]
    AmbiguousBranch {
        label: String,
        /// Raw offset from the reference in units of the quantum.
        offset: f64,
        lower: i64,
        upper: i64,
    },
}
