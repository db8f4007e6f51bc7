/// Simulation cell as three lattice vectors in atomic units (Bohr).
///
/// Row `i` is lattice vector `aᵢ`. The polarization axis is taken along the
/// third lattice vector, matching the `cp.x` finite-field convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub vectors: [[f64; 3]; 3],
}

impl Cell {
    pub fn new(vectors: [[f64; 3]; 3]) -> Self {
        Self { vectors }
    }

    /// Cell volume |a₁ · (a₂ × a₃)| in Bohr³.
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.vectors;
        let bxc = [
            b[1] * c[2] - b[2] * c[1],
            b[2] * c[0] - b[0] * c[2],
            b[0] * c[1] - b[1] * c[0],
        ];
        (a[0] * bxc[0] + a[1] * bxc[1] + a[2] * bxc[2]).abs()
    }

    /// Length of the third lattice vector, the dipole quantum in e·Bohr.
    pub fn axis_length(&self) -> f64 {
        let c = self.vectors[2];
        (c[0] * c[0] + c[1] * c[1] + c[2] * c[2]).sqrt()
    }

    /// Polarization-density quantum `|a₃| / V` in atomic units.
    ///
    /// Berry-phase polarization along the field axis is only defined modulo
    /// this value.
    pub fn polarization_quantum(&self) -> f64 {
        self.axis_length() / self.volume()
    }
}
