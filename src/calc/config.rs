/// Configuration for the dielectric-response pipeline.
#[derive(Debug, Clone)]
pub struct CalcConfig {
    /// Applied field magnitude in a.u. shared by all finite-field runs.
    pub efield: f64,
    /// Absolute tolerance when comparing file-reported fields against the
    /// configured magnitude.
    pub field_tolerance: f64,
    /// Absolute tolerance when comparing each file's derived polarization
    /// quantum against the zero-field reference.
    pub quantum_tolerance: f64,
    /// Branch correction is ambiguous when the raw offset lies within this
    /// fraction of a quantum from the midpoint between two integers.
    pub branch_tolerance: f64,
    /// Literature relative permittivity of the bulk matrix.
    pub eps_bulk: f64,
    /// Literature high-frequency relative permittivity of the bulk matrix.
    pub eps_inf_bulk: f64,
    /// Inclusion element symbol. Output annotation only.
    pub inclusion_element: String,
    /// Inclusion loading fraction entering the enhancement denominator.
    pub inclusion_fraction: f64,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            efield: 0.001,
            field_tolerance: 1e-8,
            quantum_tolerance: 1e-6,
            branch_tolerance: 0.01,
            eps_bulk: 9.26,
            eps_inf_bulk: 3.04,
            inclusion_element: "Ag".to_string(),
            inclusion_fraction: 1.0,
        }
    }
}
