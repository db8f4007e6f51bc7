use super::sample::ResolvedSample;

/// A validated, branch-resolved dataset for one linear-response measurement.
///
/// Invariants (enforced at assembly time): every relaxed-ion and clamped-ion
/// sample shares `field`, and all samples were produced with the same cell
/// geometry, so `quantum` is common to the whole set.
#[derive(Debug, Clone)]
pub struct RunSet {
    /// Zero-field reference run.
    pub zero: ResolvedSample,
    /// One or more relaxed-ion runs at `field` (independent ionic relaxations).
    pub relaxed: Vec<ResolvedSample>,
    /// Optional clamped-ion run at `field`.
    pub clamped: Option<ResolvedSample>,
    /// Applied field magnitude in a.u.
    pub field: f64,
    /// Shared polarization quantum in a.u.
    pub quantum: f64,
}

impl RunSet {
    /// Mean resolved relaxed-ion polarization.
    pub fn relaxed_mean(&self) -> f64 {
        let sum: f64 = self.relaxed.iter().map(|s| s.polarization).sum();
        sum / self.relaxed.len() as f64
    }

    /// Population standard deviation of the resolved relaxed-ion
    /// polarizations, a measure of ionic-relaxation consistency.
    pub fn relaxed_spread(&self) -> f64 {
        let mean = self.relaxed_mean();
        let var: f64 = self
            .relaxed
            .iter()
            .map(|s| {
                let d = s.polarization - mean;
                d * d
            })
            .sum::<f64>()
            / self.relaxed.len() as f64;
        var.sqrt()
    }

    /// The (field, resolved polarization) series, zero-field point first,
    /// for handing to an external plotting tool.
    pub fn series(&self) -> Vec<(f64, f64)> {
        let mut points = vec![(0.0, self.zero.polarization)];
        if let Some(clamped) = &self.clamped {
            points.push((self.field, clamped.polarization));
        }
        points.extend(self.relaxed.iter().map(|s| (self.field, s.polarization)));
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sample::{PolarizationSample, ResolvedSample};

    fn resolved(label: &str, polarization: f64) -> ResolvedSample {
        ResolvedSample {
            sample: PolarizationSample {
                label: label.into(),
                field: Some(0.001),
                electronic: polarization,
                ionic: 0.0,
                volume: 1000.0,
                quantum: 0.01,
            },
            polarization,
            branch: 0,
        }
    }

    fn runset(values: &[f64]) -> RunSet {
        RunSet {
            zero: resolved("zero.out", 0.0),
            relaxed: values
                .iter()
                .enumerate()
                .map(|(i, &p)| resolved(&format!("relaxed{i}.out"), p))
                .collect(),
            clamped: None,
            field: 0.001,
            quantum: 0.01,
        }
    }

    #[test]
    fn identical_samples_have_zero_spread() {
        let set = runset(&[0.004, 0.004, 0.004]);
        assert!((set.relaxed_mean() - 0.004).abs() < 1e-15);
        assert_eq!(set.relaxed_spread(), 0.0);
    }

    #[test]
    fn outlier_increases_spread_monotonically() {
        let tight = runset(&[0.004, 0.004, 0.0041]);
        let loose = runset(&[0.004, 0.004, 0.005]);
        assert!(tight.relaxed_spread() > 0.0);
        assert!(loose.relaxed_spread() > tight.relaxed_spread());
    }

    #[test]
    fn series_starts_at_zero_field() {
        let set = runset(&[0.004, 0.005]);
        let series = set.series();
        assert_eq!(series[0], (0.0, 0.0));
        assert_eq!(series.len(), 3);
        assert!(series[1..].iter().all(|&(e, _)| e == 0.001));
    }
}
