use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "eforge",
    about = "Dielectric permittivity from cp.x finite-field polarization output",
    version,
    author,
    before_help = crate::display::banner_for_help()
)]
pub struct Cli {
    /// Zero-field polarization output file
    pub zero_field: PathBuf,

    /// Relaxed-ion polarization output file(s) at the applied field
    #[arg(required = true)]
    pub relaxed_ion: Vec<PathBuf>,

    /// Clamped-ion polarization output file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub clamped_ion: Option<PathBuf>,

    /// Print the resolved (field, polarization) series for external plotting
    #[arg(short, long)]
    pub plot: bool,

    /// Suppress progress output (for scripting)
    #[arg(short, long)]
    pub quiet: bool,

    /// Applied electric field in a.u.
    #[arg(long, value_name = "E", default_value = "0.001")]
    pub efield: f64,

    /// Tolerance when checking file-reported fields against --efield (a.u.)
    #[arg(long, value_name = "TOL", default_value = "1e-8")]
    pub field_tolerance: f64,

    /// Branch choice is ambiguous within this fraction of a quantum from the
    /// midpoint between two candidates
    #[arg(long, value_name = "TOL", default_value = "0.01")]
    pub branch_tolerance: f64,

    /// Relative permittivity of the bulk matrix, for enhancement
    #[arg(long, value_name = "V", default_value = "9.26")]
    pub eps_bulk: f64,

    /// High-frequency relative permittivity of the bulk matrix
    #[arg(long, value_name = "V", default_value = "3.04")]
    pub eps_inf_bulk: f64,

    /// Inclusion element symbol (output annotation only)
    #[arg(long, value_name = "SYMBOL", default_value = "Ag")]
    pub inclusion_element: String,

    /// Inclusion loading fraction in the enhancement denominator
    #[arg(long, value_name = "F", default_value = "1.0")]
    pub inclusion_fraction: f64,
}

pub fn parse() -> Cli {
    Cli::parse()
}
