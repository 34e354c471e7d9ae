use crate::domain::model::{FairnessDisplay, FairnessReport, MetricRow, ResolvedUris};
use crate::utils::error::Result;
use serde::Serialize;

const HEADERS: [&str; 4] = ["Metric", "Description", "Score", "Comments"];

pub const EXIT_OK: i32 = 0;
pub const EXIT_INVALID_RESOURCE: i32 = 1;
pub const EXIT_ASSESSMENT_FAILED: i32 = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentEntry {
    pub uri: String,
    pub result: FairnessDisplay,
}

/// One `orkg-fair` run: the input, its resolution (absent with `--direct`)
/// and every assessment that was applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunDocument {
    pub input: String,
    pub resolved: Option<ResolvedUris>,
    pub assessments: Vec<AssessmentEntry>,
}

impl RunDocument {
    pub fn new(input: &str, resolved: Option<ResolvedUris>) -> Self {
        Self {
            input: input.to_string(),
            resolved,
            assessments: Vec::new(),
        }
    }

    pub fn push(&mut self, uri: &str, result: FairnessDisplay) {
        self.assessments.push(AssessmentEntry {
            uri: uri.to_string(),
            result,
        });
    }

    pub fn is_invalid_resource(&self) -> bool {
        self.resolved.as_ref().is_some_and(|uris| !uris.is_valid())
    }

    pub fn any_failed(&self) -> bool {
        self.assessments.iter().any(|entry| entry.result.is_failure())
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_invalid_resource() {
            EXIT_INVALID_RESOURCE
        } else if self.any_failed() {
            EXIT_ASSESSMENT_FAILED
        } else {
            EXIT_OK
        }
    }
}

pub fn render_resolution(uris: &ResolvedUris) -> String {
    if !uris.is_valid() {
        return "Not a valid ORKG Resource URI".to_string();
    }

    let mut lines = vec!["Is a valid ORKG Resource URI".to_string()];
    for (kind, uri) in uris.targets() {
        lines.push(format!("  {}: {}", kind.label(), uri));
    }
    lines.join("\n")
}

pub fn render_text(display: &FairnessDisplay) -> String {
    match display {
        FairnessDisplay::Failure { message } => message.clone(),
        FairnessDisplay::Report(report) => render_report(report),
    }
}

pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn render_report(report: &FairnessReport) -> String {
    let mut out = vec![
        format!("FAIRness: {}%", report.percentage),
        format!(
            "Evaluation Score: {}/{}",
            report.evaluation_score, report.max_score
        ),
        format!(
            "Assessed URI: {}",
            report.assessed_uri.as_deref().unwrap_or("-")
        ),
        String::new(),
    ];

    let cells: Vec<[String; 4]> = report.rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    out.push(format!("  {}", join_padded(&HEADERS.map(str::to_string), &widths)));
    out.push(format!(
        "  {}",
        widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-")
    ));

    for (row, cell) in report.rows.iter().zip(cells.iter()) {
        let mark = if row.success { "✓" } else { "✗" };
        out.push(format!("{} {}", mark, join_padded(cell, &widths)));
    }

    out.join("\n")
}

fn row_cells(row: &MetricRow) -> [String; 4] {
    [
        row.metric.clone(),
        row.description.clone(),
        row.score.to_string(),
        row.comment.clone(),
    ]
}

fn join_padded(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    padded.join(" | ").trim_end().to_string()
}
