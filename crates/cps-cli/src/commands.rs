//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info, info_span};

use cps_ingest::{read_codebook, read_tabstat};
use cps_model::{AuditReport, RangeTable, VariableLookup};
use cps_provenance::{derived_origins, suspicious_origins};
use cps_report::{ReportEnvelope, write_json_report};
use cps_standards::{default_standards_root, load_suspicious_variables, load_valid_ranges,
    verify_standards};
use cps_validate::validate_ranges;

use crate::cli::AuditArgs;
use crate::summary::print_ranges;
use crate::types::AuditOutcome;

fn standards_root(override_dir: Option<&Path>) -> PathBuf {
    override_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(default_standards_root)
}

fn ranges_path(root: &Path) -> PathBuf {
    root.join("cps").join("valid_ranges.csv")
}

fn watchlist_path(root: &Path) -> PathBuf {
    root.join("cps").join("suspicious_variables.csv")
}

pub fn run_audit(args: &AuditArgs, standards_dir: Option<&Path>) -> Result<AuditOutcome> {
    let span = info_span!("audit", codebook = %args.codebook.display());
    let _guard = span.enter();

    let root = standards_root(standards_dir);
    let ranges: RangeTable =
        load_valid_ranges(&ranges_path(&root)).context("load valid ranges")?;
    let watchlist =
        load_suspicious_variables(&watchlist_path(&root)).context("load watchlist")?;

    let records = read_codebook(&args.codebook)?;
    let lookup = VariableLookup::from_records(&records);
    debug!(
        records = records.len(),
        labeled = lookup.len(),
        "codebook loaded"
    );

    let stats = read_tabstat(&args.stats)?;
    debug!(stats = stats.len(), "statistics extracted");

    let out_of_range = validate_ranges(&stats, &ranges);
    let derived = derived_origins(&records);
    let suspicious = suspicious_origins(&records, &watchlist);
    info!(
        out_of_range = out_of_range.len(),
        suspicious = suspicious.len(),
        derived = derived.len(),
        "audit complete"
    );

    let report = AuditReport {
        out_of_range,
        derived,
        suspicious,
    };
    if let Some(path) = &args.report_file {
        let envelope = ReportEnvelope::new(report.clone(), Some(args.codebook.as_path()));
        write_json_report(&envelope, path)?;
        info!(path = %path.display(), "wrote JSON report");
    }

    Ok(AuditOutcome {
        report,
        codebook: args.codebook.clone(),
        codebook_records: records.len(),
        stat_records: stats.len(),
    })
}

pub fn run_ranges(standards_dir: Option<&Path>) -> Result<()> {
    let root = standards_root(standards_dir);
    let ranges = load_valid_ranges(&ranges_path(&root)).context("load valid ranges")?;
    print_ranges(&ranges);
    Ok(())
}

pub fn run_doctor(standards_dir: Option<&Path>) -> Result<()> {
    let root = standards_root(standards_dir);
    let report = verify_standards(&root)?;
    let json = serde_json::to_string_pretty(&report).context("serialize doctor report")?;
    println!("{json}");
    Ok(())
}
