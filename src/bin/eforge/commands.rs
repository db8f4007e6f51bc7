use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use eps_forge::{CalcConfig, PolarizationSample, evaluate, io};

use crate::cli::Cli;
use crate::display::{
    Context as DisplayContext, Progress, print_results, print_run_summary, print_series,
};

const TOTAL_STEPS: u8 = 2;

pub fn run(cli: Cli, ctx: DisplayContext) -> Result<()> {
    let config = CalcConfig {
        efield: cli.efield,
        field_tolerance: cli.field_tolerance,
        branch_tolerance: cli.branch_tolerance,
        eps_bulk: cli.eps_bulk,
        eps_inf_bulk: cli.eps_inf_bulk,
        inclusion_element: cli.inclusion_element.clone(),
        inclusion_fraction: cli.inclusion_fraction,
        ..CalcConfig::default()
    };

    let mut progress = Progress::new(ctx.interactive, TOTAL_STEPS);

    progress.step("Reading polarization outputs");
    let zero = read_sample(&cli.zero_field, "zero-field")?;

    // Globbed inputs arrive in shell order; sort for a stable report.
    let mut relaxed_paths = cli.relaxed_ion.clone();
    relaxed_paths.sort();
    let relaxed = relaxed_paths
        .iter()
        .map(|path| read_sample(path, "relaxed-ion"))
        .collect::<Result<Vec<_>>>()?;

    let clamped = cli
        .clamped_ion
        .as_deref()
        .map(|path| read_sample(path, "clamped-ion"))
        .transpose()?;

    let read_substeps = build_read_substeps(&zero, relaxed.len(), clamped.is_some());
    let read_substeps_ref: Vec<&str> = read_substeps.iter().map(|s| s.as_str()).collect();
    progress.complete_step("Reading polarization outputs", &read_substeps_ref);

    progress.step("Fitting dielectric response");
    let report = evaluate(zero, relaxed, clamped, &config)
        .context("Dielectric response evaluation failed")?;
    progress.complete_step(
        "Fitting dielectric response",
        &[
            "Resolve Berry-phase branches",
            "Validate fields and cell geometry",
            "Two-point susceptibility fit",
        ],
    );

    progress.finish();

    if ctx.interactive {
        print_run_summary(&report.runset);
    }

    print_results(&report);

    if cli.plot {
        print_series(&report.runset);
    }

    Ok(())
}

fn read_sample(path: &Path, role: &str) -> Result<PolarizationSample> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} output '{}'", role, path.display()))?;
    io::cp::read(BufReader::new(file), &path.display().to_string())
        .with_context(|| format!("Failed to parse {} output '{}'", role, path.display()))
}

fn build_read_substeps(
    zero: &PolarizationSample,
    relaxed_count: usize,
    has_clamped: bool,
) -> Vec<String> {
    let mut steps = vec![
        format!("Zero-field reference: {}", zero.label),
        format!(
            "{} relaxed-ion run{}",
            relaxed_count,
            if relaxed_count == 1 { "" } else { "s" }
        ),
    ];
    if has_clamped {
        steps.push("Clamped-ion run".to_string());
    }
    steps.push(format!(
        "Cell volume {:.2} Bohr³, quantum {:.6} a.u.",
        zero.volume, zero.quantum
    ));
    steps
}
