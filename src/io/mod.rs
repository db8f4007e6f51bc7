//! Reading of Quantum ESPRESSO `cp.x` polarization output.

pub mod cp;
pub mod error;

pub use error::Error;
