/// The converged polarization record of a single `cp.x` run.
///
/// All values are polarization densities in atomic units (cell dipole divided
/// by cell volume), taken along the applied-field axis. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct PolarizationSample {
    /// Source file, used in error messages and reports.
    pub label: String,
    /// Field magnitude reported in the file, if any (a.u.).
    pub field: Option<f64>,
    /// Electronic (Berry-phase) polarization density.
    pub electronic: f64,
    /// Ionic polarization density.
    pub ionic: f64,
    /// Cell volume in Bohr³.
    pub volume: f64,
    /// Polarization quantum derived from the cell geometry.
    pub quantum: f64,
}

impl PolarizationSample {
    /// Total (possibly branch-wrapped) polarization density.
    #[inline]
    pub fn polarization(&self) -> f64 {
        self.electronic + self.ionic
    }
}

/// A [`PolarizationSample`] with its Berry-phase branch fixed.
///
/// `polarization` is continuous with the zero-field reference: it differs from
/// the raw total by exactly `branch` polarization quanta.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSample {
    pub sample: PolarizationSample,
    /// Branch-corrected total polarization density.
    pub polarization: f64,
    /// Number of quanta subtracted from the raw value.
    pub branch: i64,
}

impl ResolvedSample {
    /// Marks a sample as its own reference (no correction applied).
    pub fn reference(sample: PolarizationSample) -> Self {
        let polarization = sample.polarization();
        Self {
            sample,
            polarization,
            branch: 0,
        }
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.sample.label
    }
}
