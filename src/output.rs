//! Report rendering for stdout.

use fakeseek_scan::ScanReport;

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AppError, Result};

/// Render `report` according to `output`.
///
/// # Errors
///
/// Returns [`AppError::Output`] if JSON serialisation fails.
pub fn render(report: &ScanReport, output: &OutputConfig) -> Result<String> {
    match output.format {
        OutputFormat::Json => render_json(report, output.pretty),
        OutputFormat::Text => Ok(render_summary(report)),
    }
}

fn render_json(report: &ScanReport, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(report)
    } else {
        serde_json::to_string(report)
    };
    rendered.map_err(|e| AppError::Output(e.to_string()))
}

/// Short multi-line summary, with one line per related result.
pub fn render_summary(report: &ScanReport) -> String {
    let mut out = format!(
        "Scan Result for {}:\nStatus: {}\nMessage: {}\nTotal Results: {}\nDeepfake Related: {}\n",
        report.full_name, report.status, report.message, report.total_results, report.related_count
    );
    for result in report.results.iter().filter(|r| r.is_related) {
        out.push_str(&format!(
            "  [{:.2}] {} <{}>\n",
            result.confidence, result.title, result.link
        ));
    }
    out.push_str(&"-".repeat(50));
    out
}
