use super::runset::RunSet;

/// One linear-response fit: susceptibility and the derived permittivity.
///
/// Produced once per run-set variant (relaxed-ion → static response,
/// clamped-ion → high-frequency response). Read-only.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// Dielectric susceptibility χ = ΔP / E (a.u.).
    pub susceptibility: f64,
    /// Relative permittivity ε = 1 + 4πχ (Gaussian atomic-unit convention).
    pub permittivity: f64,
    /// Zero-field polarization P₀, the intercept of the two-point fit.
    pub intercept: f64,
    /// Standard deviation of the resolved polarizations entering the fit.
    /// Zero when the fit used a single sample.
    pub spread: f64,
}

/// Local-field enhancement factors for an embedded inclusion.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementResult {
    /// Inclusion element symbol. Annotation only; it never enters the math.
    pub element: String,
    /// Enhancement of the static (relaxed-ion) response over the bulk value.
    pub alpha_static: f64,
    /// Enhancement of the high-frequency (clamped-ion) response.
    pub alpha_optical: f64,
}

/// Terminal output of the pipeline, consumed only by reporting and plotting.
#[derive(Debug, Clone)]
pub struct DielectricReport {
    /// The validated, branch-resolved input dataset.
    pub runset: RunSet,
    /// Static (electronic + ionic) response fit.
    pub relaxed: FitResult,
    /// High-frequency (electronic-only) response fit, when a clamped-ion
    /// run was supplied.
    pub clamped: Option<FitResult>,
    /// Inclusion enhancement, when computable (requires the clamped fit).
    pub enhancement: Option<EnhancementResult>,
}
