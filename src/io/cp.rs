//! Reader for `cp.x` finite-field polarization output.
//!
//! The reader scans for three kinds of tagged records:
//!
//! - `CELL_PARAMETERS` blocks (three rows of lattice vectors, a.u.); the last
//!   block in the file is the final cell,
//! - `Electric field = <E>` lines echoing the applied field magnitude,
//! - per-step dipole records: an `Elct. dipole` line followed by an
//!   `Ionic dipole` line, both cell dipoles in e·Bohr.
//!
//! The last complete dipole pair is taken as the converged state. Cell dipoles
//! are converted to polarization densities against the final cell volume, and
//! the polarization quantum is derived from the same cell, so a single file is
//! self-contained for branch correction.

use crate::io::error::Error;
use crate::model::cell::Cell;
use crate::model::sample::PolarizationSample;
use std::io::BufRead;

const CELL_TAG: &str = "CELL_PARAMETERS";
const FIELD_TAG: &str = "Electric field";
const ELEC_TAG: &str = "Elct. dipole";
const IONIC_TAG: &str = "Ionic dipole";

/// Fields reported twice must agree to this absolute tolerance (a.u.).
const FIELD_ECHO_TOL: f64 = 1e-10;

/// Reads one `cp.x` output file and extracts its converged polarization
/// record. `label` identifies the source in errors and reports.
pub fn read<R: BufRead>(reader: R, label: &str) -> Result<PolarizationSample, Error> {
    let lines = collect_lines(reader)?;

    let mut cell: Option<Cell> = None;
    let mut field: Option<(usize, f64)> = None;
    let mut pending_elec: Option<(usize, f64)> = None;
    let mut last_pair: Option<(f64, f64)> = None;

    let mut idx = 0;
    while idx < lines.len() {
        let (ln, content) = &lines[idx];
        let trimmed = content.trim();

        if trimmed.starts_with(CELL_TAG) {
            let (parsed, consumed) = parse_cell_block(&lines, idx + 1)?;
            cell = Some(parsed);
            idx = consumed;
            continue;
        }

        if trimmed.starts_with(FIELD_TAG) {
            let value = parse_tagged_value(trimmed, *ln, "electric field")?;
            if let Some((_, previous)) = field {
                if (previous - value).abs() > FIELD_ECHO_TOL {
                    return Err(Error::parse(
                        *ln,
                        format!(
                            "conflicting electric field values reported: {previous} and {value}"
                        ),
                    ));
                }
            }
            field = Some((*ln, value));
        } else if trimmed.starts_with(ELEC_TAG) {
            if pending_elec.is_some() {
                return Err(Error::parse(
                    *ln,
                    "electronic dipole repeated without an ionic dipole in between",
                ));
            }
            pending_elec = Some((*ln, parse_tagged_value(trimmed, *ln, "electronic dipole")?));
        } else if trimmed.starts_with(IONIC_TAG) {
            let (_, elec) = pending_elec.take().ok_or_else(|| {
                Error::parse(*ln, "ionic dipole with no preceding electronic dipole")
            })?;
            let ionic = parse_tagged_value(trimmed, *ln, "ionic dipole")?;
            last_pair = Some((elec, ionic));
        }

        idx += 1;
    }

    if let Some((ln, _)) = pending_elec {
        return Err(Error::parse(
            ln,
            "dipole record truncated mid-step (run did not converge?)",
        ));
    }

    let last_line = lines.last().map(|(ln, _)| *ln).unwrap_or(0);
    let cell = cell
        .ok_or_else(|| Error::parse(last_line, "no CELL_PARAMETERS block found"))?;
    let (elec, ionic) = last_pair
        .ok_or_else(|| Error::parse(last_line, "no polarization record found"))?;

    let volume = cell.volume();
    if !(volume.is_finite() && volume > 0.0) {
        return Err(Error::parse(
            last_line,
            "degenerate cell: CELL_PARAMETERS block has non-positive volume",
        ));
    }

    Ok(PolarizationSample {
        label: label.to_string(),
        field: field.map(|(_, v)| v),
        electronic: elec / volume,
        ionic: ionic / volume,
        volume,
        quantum: cell.polarization_quantum(),
    })
}

fn collect_lines<R: BufRead>(reader: R) -> Result<Vec<(usize, String)>, Error> {
    reader
        .lines()
        .enumerate()
        .map(|(i, line)| line.map(|v| (i + 1, v)).map_err(|e| Error::Io { source: e }))
        .collect()
}

/// Parses the three lattice-vector rows following a `CELL_PARAMETERS` tag.
/// Returns the cell and the index of the first unconsumed line.
fn parse_cell_block(lines: &[(usize, String)], start: usize) -> Result<(Cell, usize), Error> {
    let mut vectors = [[0.0; 3]; 3];
    let mut cursor = start;

    for row in &mut vectors {
        let (ln, content) = next_data_line(lines, &mut cursor).ok_or_else(|| {
            Error::parse(
                lines.last().map(|(ln, _)| *ln).unwrap_or(0),
                "CELL_PARAMETERS block ended before three lattice vectors",
            )
        })?;

        let parts: Vec<_> = content.split_whitespace().collect();
        if parts.len() != 3 {
            return Err(Error::parse(
                ln,
                "lattice vector row must have exactly three components",
            ));
        }
        for (slot, part) in row.iter_mut().zip(&parts) {
            *slot = part.parse::<f64>().map_err(|_| {
                Error::parse(ln, format!("invalid lattice vector component '{part}'"))
            })?;
        }
    }

    Ok((Cell::new(vectors), cursor))
}

fn next_data_line(lines: &[(usize, String)], cursor: &mut usize) -> Option<(usize, String)> {
    while *cursor < lines.len() {
        let (ln, content) = &lines[*cursor];
        *cursor += 1;
        if content.trim().is_empty() {
            continue;
        }
        return Some((*ln, content.clone()));
    }
    None
}

/// Extracts the trailing numeric value of a tagged line such as
/// `Elct. dipole        -0.41234567`.
fn parse_tagged_value(line: &str, ln: usize, what: &str) -> Result<f64, Error> {
    line.split_whitespace()
        .last()
        .and_then(|tok| tok.parse::<f64>().ok())
        .ok_or_else(|| Error::parse(ln, format!("invalid {what} value")))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: &str = "\
   CELL_PARAMETERS (a.u.)
      10.00000000    0.00000000    0.00000000
       0.00000000   10.00000000    0.00000000
       0.00000000    0.00000000   10.00000000
";

    fn output(body: &str) -> String {
        format!("   Program CP v.7.2 starts\n{CELL}\n{body}")
    }

    #[test]
    fn reads_last_complete_dipole_pair() {
        let text = output(
            "   Electric field =      0.00100000
   Physical Quantities at step:    10
   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
   Physical Quantities at step:    20
   Elct. dipole        -0.39500000
   Ionic dipole         0.40426000
",
        );
        let sample = read(text.as_bytes(), "relaxed.out").expect("parse");

        assert_eq!(sample.label, "relaxed.out");
        assert_eq!(sample.field, Some(0.001));
        assert!((sample.volume - 1000.0).abs() < 1e-9);
        assert!((sample.quantum - 0.01).abs() < 1e-12);
        // Last step wins: (-0.395 + 0.40426) / 1000.
        assert!((sample.polarization() - 9.26e-6).abs() < 1e-15);
    }

    #[test]
    fn field_line_is_optional() {
        let text = output(
            "   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
",
        );
        let sample = read(text.as_bytes(), "zero.out").expect("parse");
        assert_eq!(sample.field, None);
        assert!(sample.polarization().abs() < 1e-15);
    }

    #[test]
    fn repeated_matching_field_lines_are_accepted() {
        let text = output(
            "   Electric field =      0.00100000
   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
   Electric field =      0.00100000
",
        );
        let sample = read(text.as_bytes(), "run.out").expect("parse");
        assert_eq!(sample.field, Some(0.001));
    }

    #[test]
    fn conflicting_field_lines_are_rejected() {
        let text = output(
            "   Electric field =      0.00100000
   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
   Electric field =      0.00200000
",
        );
        let err = read(text.as_bytes(), "run.out").unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
        assert!(err.to_string().contains("conflicting electric field"));
    }

    #[test]
    fn truncated_dipole_record_is_rejected() {
        let text = output(
            "   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
   Elct. dipole        -0.39500000
",
        );
        let err = read(text.as_bytes(), "run.out").unwrap_err();
        assert!(err.to_string().contains("truncated"));
    }

    #[test]
    fn missing_polarization_record_is_rejected() {
        let text = output("   nothing of interest here\n");
        let err = read(text.as_bytes(), "run.out").unwrap_err();
        assert!(err.to_string().contains("no polarization record"));
    }

    #[test]
    fn missing_cell_block_is_rejected() {
        let text = "   Elct. dipole  -0.4\n   Ionic dipole  0.4\n";
        let err = read(text.as_bytes(), "run.out").unwrap_err();
        assert!(err.to_string().contains("CELL_PARAMETERS"));
    }

    #[test]
    fn zero_volume_cell_is_rejected() {
        // Two parallel lattice vectors: parseable, but the volume is zero and
        // every density would be inf/NaN downstream.
        let text = "\
   CELL_PARAMETERS (a.u.)
      10.00000000    0.00000000    0.00000000
      10.00000000    0.00000000    0.00000000
       0.00000000    0.00000000   10.00000000
   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
";
        let err = read(text.as_bytes(), "run.out").unwrap_err();
        assert!(err.to_string().contains("non-positive volume"));
    }

    #[test]
    fn last_cell_block_wins() {
        let text = format!(
            "{CELL}
   CELL_PARAMETERS (a.u.)
       4.00000000    0.00000000    0.00000000
       0.00000000    5.00000000    0.00000000
       0.00000000    0.00000000   10.00000000

   Elct. dipole        -0.40000000
   Ionic dipole         0.40000000
"
        );
        let sample = read(text.as_bytes(), "run.out").expect("parse");
        assert!((sample.volume - 200.0).abs() < 1e-9);
        assert!((sample.quantum - 0.05).abs() < 1e-12);
    }
}
