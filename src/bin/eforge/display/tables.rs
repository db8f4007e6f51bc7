use std::io::{self, Write};

use eps_forge::{DielectricReport, ResolvedSample, RunSet};

const INDENT: &str = "      ";

/// Prints the parsed/resolved dataset to stderr for interactive runs.
pub fn print_run_summary(set: &RunSet) {
    let stderr = io::stderr();
    let mut out = stderr.lock();

    let rows = vec![
        ("Applied field (a.u.)", format!("{:.6}", set.field)),
        ("Polarization quantum (a.u.)", format!("{:.6}", set.quantum)),
        ("Cell volume (Bohr³)", format!("{:.2}", set.zero.sample.volume)),
        ("Relaxed-ion runs", format!("{}", set.relaxed.len())),
        (
            "Relaxed-ion spread (a.u.)",
            format!("{:.3e}", set.relaxed_spread()),
        ),
    ];
    print_kv_table(&mut out, "Run Summary", &rows);

    let _ = writeln!(out, "{INDENT}Resolved samples:");
    print_sample_row(&mut out, "zero-field", &set.zero);
    if let Some(clamped) = &set.clamped {
        print_sample_row(&mut out, "clamped-ion", clamped);
    }
    for sample in &set.relaxed {
        print_sample_row(&mut out, "relaxed-ion", sample);
    }
    let _ = writeln!(out);
}

fn print_sample_row(out: &mut impl Write, role: &str, sample: &ResolvedSample) {
    let _ = writeln!(
        out,
        "{INDENT}  {:<12} {:<28} P = {:>12.8}  (branch {:+})",
        role,
        sample.label(),
        sample.polarization,
        sample.branch
    );
}

/// Prints the fitted dielectric constants (and enhancement, when computed)
/// to stdout.
pub fn print_results(report: &DielectricReport) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut rows = vec![
        (
            "Static ε (relaxed-ion)",
            format!("{:.4}", report.relaxed.permittivity),
        ),
        (
            "Static χ",
            format!("{:.4}", report.relaxed.susceptibility),
        ),
        (
            "Fit spread (a.u.)",
            format!("{:.3e}", report.relaxed.spread),
        ),
    ];

    match &report.clamped {
        Some(clamped) => {
            rows.push((
                "High-frequency ε∞ (clamped-ion)",
                format!("{:.4}", clamped.permittivity),
            ));
            rows.push(("High-frequency χ∞", format!("{:.4}", clamped.susceptibility)));
        }
        None => rows.push((
            "High-frequency ε∞",
            "not computed (no clamped-ion run)".to_string(),
        )),
    }

    print_kv_table(&mut out, "Dielectric Constants", &rows);

    match &report.enhancement {
        Some(enh) => {
            let rows = vec![
                ("Inclusion element", enh.element.clone()),
                ("α static", format!("{:.4}", enh.alpha_static)),
                ("α optical", format!("{:.4}", enh.alpha_optical)),
            ];
            print_kv_table(&mut out, "Local-Field Enhancement", &rows);
        }
        None => {
            let _ = writeln!(
                out,
                "{INDENT}Enhancement not computed (requires --clamped-ion).\n"
            );
        }
    }

    let _ = out.flush();
}

/// Prints the (field, resolved polarization) series as a plain two-column
/// block for external plotting tools.
pub fn print_series(set: &RunSet) {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let _ = writeln!(out, "# field_au  polarization_au");
    for (field, polarization) in set.series() {
        let _ = writeln!(out, "{field:.8e}  {polarization:.8e}");
    }
    let _ = out.flush();
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
    let val_w = rows
        .iter()
        .map(|(_, v)| v.chars().count())
        .max()
        .unwrap_or(0);

    let _ = writeln!(out, "{INDENT}┌─ {} ─┐", title);
    let _ = writeln!(
        out,
        "{INDENT}┌{}┬{}┐",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    for (key, value) in rows {
        let _ = writeln!(out, "{INDENT}│ {:<key_w$} │ {:>val_w$} │", key, value);
    }
    let _ = writeln!(
        out,
        "{INDENT}└{}┴{}┘",
        "─".repeat(key_w + 2),
        "─".repeat(val_w + 2)
    );
    let _ = writeln!(out);
}
