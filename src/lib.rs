//! A pure Rust toolkit for extracting the macroscopic dielectric permittivity
//! of a bulk solid from Quantum ESPRESSO `cp.x` finite-field polarization
//! output, with optional local-field enhancement analysis for an embedded
//! inclusion.
//!
//! # Features
//!
//! - **Record parsing** — Extract the final cell, applied field, and converged
//!   cell dipole from a `cp.x` output file
//! - **Branch resolution** — Remove the Berry-phase modulo ambiguity by an
//!   explicit round-to-nearest search over the polarization quantum
//! - **Run aggregation** — Combine a zero-field reference, one or more
//!   relaxed-ion runs, and an optional clamped-ion run with full
//!   cross-validation of fields and cell geometry
//! - **Linear-response fit** — Two-point susceptibility and relative
//!   permittivity (`ε = 1 + 4πχ`, Gaussian atomic units), for both the static
//!   (relaxed-ion) and high-frequency (clamped-ion) response
//!
//! # Quick Start
//!
//! The main entry point is the [`evaluate`] function, which takes the parsed
//! samples and a [`CalcConfig`] and produces a [`DielectricReport`]:
//!
//! ```
//! use eps_forge::{CalcConfig, PolarizationSample, evaluate};
//!
//! // Zero-field reference: total polarization density 0.0 a.u.
//! // Cell is 4 × 5 × 10 Bohr, so q = |a₃| / V = 0.05 a.u. — comfortably
//! // larger than the response, keeping the signal on branch 0.
//! let zero = PolarizationSample {
//!     label: "zero.out".into(),
//!     field: Some(0.0),
//!     electronic: -0.20,
//!     ionic: 0.20,
//!     volume: 200.0,
//!     quantum: 0.05,
//! };
//!
//! // Relaxed-ion run at E = 0.001 a.u.: ΔP = 0.00926 a.u. → χ = 9.26
//! let relaxed = PolarizationSample {
//!     label: "relaxed.out".into(),
//!     field: Some(0.001),
//!     electronic: -0.195,
//!     ionic: 0.20426,
//!     volume: 200.0,
//!     quantum: 0.05,
//! };
//!
//! let config = CalcConfig::default(); // efield = 0.001 a.u.
//! let report = evaluate(zero, vec![relaxed], None, &config)?;
//!
//! assert!((report.relaxed.susceptibility - 9.26).abs() < 1e-9);
//! assert!((report.relaxed.permittivity - 117.3646).abs() < 1e-3);
//!
//! // No clamped-ion run: high-frequency ε and enhancement are absent.
//! assert!(report.clamped.is_none());
//! assert!(report.enhancement.is_none());
//! # Ok::<(), eps_forge::CalcError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — Reading of `cp.x` polarization output
//! - [`evaluate`] — Branch resolution, aggregation, fitting, and enhancement
//! - [`CalcConfig`] — Field magnitude, tolerances, and bulk reference constants
//!
//! # Data Types
//!
//! - [`PolarizationSample`] — One run's converged polarization record
//! - [`ResolvedSample`] — Sample with the branch-corrected polarization
//! - [`RunSet`] — Validated zero-field + relaxed-ion (+ clamped-ion) dataset
//! - [`FitResult`] — Susceptibility, permittivity, intercept, and spread
//! - [`EnhancementResult`] — Inclusion local-field enhancement factors

mod calc;
mod model;

pub mod io;

pub use model::cell::Cell;
pub use model::response::{DielectricReport, EnhancementResult, FitResult};
pub use model::runset::RunSet;
pub use model::sample::{PolarizationSample, ResolvedSample};

pub use calc::{CalcConfig, evaluate};

pub use calc::Error as CalcError;
