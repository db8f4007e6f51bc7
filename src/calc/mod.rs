mod aggregate;
mod branch;
mod config;
mod enhance;
mod error;
mod fit;

pub use config::CalcConfig;
pub use error::Error;

use crate::model::response::DielectricReport;
use crate::model::sample::PolarizationSample;

/// Runs the full dielectric-response pipeline on parsed samples.
///
/// Branch-resolves every finite-field sample against the zero-field
/// reference, validates the set, fits the static (and, when a clamped-ion
/// sample is present, the high-frequency) response, and computes the
/// inclusion enhancement when both permittivities are available.
pub fn evaluate(
    zero: PolarizationSample,
    relaxed: Vec<PolarizationSample>,
    clamped: Option<PolarizationSample>,
    config: &CalcConfig,
) -> Result<DielectricReport, Error> {
    let runset = aggregate::assemble(zero, relaxed, clamped, config)?;

    let relaxed_fit = fit::fit_relaxed(&runset);
    let clamped_fit = fit::fit_clamped(&runset);

    let enhancement = clamped_fit
        .as_ref()
        .map(|clamped| enhance::enhancement(&relaxed_fit, clamped, config));

    Ok(DielectricReport {
        runset,
        relaxed: relaxed_fit,
        clamped: clamped_fit,
        enhancement,
    })
}
