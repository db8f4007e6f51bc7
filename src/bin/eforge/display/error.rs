use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 59) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    collect_io_hints(err, &mut hints);
    collect_calc_hints(err, &mut hints);

    if hints.is_empty() { None } else { Some(hints) }
}

fn collect_io_hints(err: &Error, hints: &mut Vec<String>) {
    use eps_forge::io::Error as IoError;

    let Some(io_err) = err.downcast_ref::<IoError>() else {
        return;
    };

    match io_err {
        IoError::Io { source } => match source.kind() {
            io::ErrorKind::NotFound => {
                hints.push("File not found; check the path spelling".to_string());
            }
            io::ErrorKind::PermissionDenied => {
                hints.push("Permission denied; check file permissions with `ls -la`".to_string());
            }
            _ => {
                hints.push("I/O failed; check path, permissions, and disk".to_string());
            }
        },

        IoError::Parse { line, .. } => {
            hints.push(format!("Inspect the output file around line {}", line));
            hints.push("Truncated dipole records usually mean the run died before converging".to_string());
            hints.push("Only cp.x finite-field polarization output is supported".to_string());
        }
    }
}

fn collect_calc_hints(err: &Error, hints: &mut Vec<String>) {
    use eps_forge::CalcError;

    let Some(calc_err) = err.downcast_ref::<CalcError>() else {
        return;
    };

    match calc_err {
        CalcError::ZeroField(_) => {
            hints.push("Set the applied field with --efield (must be > 0)".to_string());
        }

        CalcError::EmptyRelaxedSet => {
            hints.push("Pass at least one relaxed-ion output after the zero-field file".to_string());
        }

        CalcError::NonZeroReference { .. } => {
            hints.push("The first positional argument must be the zero-field run".to_string());
            hints.push("Check the argument order: eforge <zero_field> <relaxed_ion>...".to_string());
        }

        CalcError::FieldMismatch { .. } => {
            hints.push("Make --efield match the field used in the simulations".to_string());
            hints.push("All finite-field runs must share one field magnitude".to_string());
        }

        CalcError::QuantumMismatch { .. } => {
            hints.push("All runs must use the same cell; branch arithmetic breaks otherwise".to_string());
            hints.push("Check that the files come from the same geometry".to_string());
        }

        CalcError::AmbiguousBranch { .. } => {
            hints.push("Inspect the raw series with --plot before trusting any fit".to_string());
            hints.push("A smaller field step keeps the polarization on one branch".to_string());
            hints.push("--branch-tolerance tightens or loosens the ambiguity window".to_string());
        }
    }
}
