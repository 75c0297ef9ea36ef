//! Canonical text rendering.
//!
//! Fixed order: the two counts, one block per out-of-range variable,
//! then one line per suspicious variable with a resolved origin.

use std::fmt::Write as _;

use cps_model::AuditReport;

pub fn render_text(report: &AuditReport) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Found {} variables with values outside valid ranges",
        report.out_of_range_count()
    );
    let _ = writeln!(
        out,
        "Found {} suspicious derived variables",
        report.suspicious_count()
    );
    for (index, violation) in report.out_of_range.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({})",
            index + 1,
            violation.variable,
            violation.description
        );
        let _ = writeln!(
            out,
            "   Data range: {} to {}",
            violation.data_min, violation.data_max
        );
        let _ = writeln!(
            out,
            "   Valid range: {} to {}",
            violation.valid_min, violation.valid_max
        );
        let _ = writeln!(out, "   Issue: {}", violation.issue);
    }
    for origin in report.suspicious.iter() {
        let Some(original) = &origin.original_variable else {
            continue;
        };
        let _ = writeln!(out, "{} <- {}: {}", origin.variable, original, origin.description);
    }
    out
}
