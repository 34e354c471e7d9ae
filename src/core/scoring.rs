use crate::domain::model::{FairnessDisplay, FairnessReport, MetricResult, MetricRow};
use chrono::Utc;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Every FAIR-Checker metric is scored 0, 1 or 2.
pub const MAX_METRIC_SCORE: i64 = 2;
pub const FETCH_FAILED_MESSAGE: &str = "FAIR-Checker API Fetch Failed.";

const DESCRIPTION_MARKER: &str = "INFO - Evaluating metrics ";
const COMMENT_MARKER: &str = "INFO - ";

impl MetricResult {
    /// Validates one raw record. Anything malformed degrades to a zero score
    /// with empty text.
    pub fn from_value(value: &Value) -> Self {
        let Some(record) = value.as_object() else {
            tracing::debug!("Malformed FAIR-Checker record: {}", value);
            return Self {
                metric: String::new(),
                score: 0,
                recommendation: String::new(),
                comment: String::new(),
                target_uri: None,
            };
        };

        let text = |key: &str| -> String {
            record
                .get(key)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            metric: text("metric"),
            score: record
                .get("score")
                .map(|v| coerce_score(v).min(MAX_METRIC_SCORE))
                .unwrap_or(0),
            recommendation: text("recommendation"),
            comment: text("comment"),
            target_uri: record
                .get("target_uri")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }

    pub fn is_success(&self) -> bool {
        self.score > 0
    }
}

/// Integer coercion of a score field: integers as-is, floats truncated,
/// strings by their leading sign and digits.
pub fn coerce_score(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => parse_leading_int(s),
        _ => 0,
    }
}

fn parse_leading_int(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse::<i64>().map(|n| sign * n).unwrap_or(0)
}

/// `round(eval / max * 100 * 100) / 100`, 0 when nothing was assessed.
pub fn percentage(evaluation_score: i64, max_score: i64) -> f64 {
    if max_score <= 0 {
        return 0.0;
    }
    (100.0 * (evaluation_score as f64 / max_score as f64) * 100.0).round() / 100.0
}

pub fn aggregate(results: &[MetricResult]) -> (i64, i64) {
    let evaluation_score = results
        .iter()
        .filter(|r| r.is_success())
        .map(|r| r.score)
        .fold(0i64, i64::saturating_add);
    let max_score = MAX_METRIC_SCORE.saturating_mul(results.len() as i64);
    (evaluation_score, max_score)
}

/// 上游文字一律視為不可信：移除標籤並壓縮空白
pub fn sanitize_text(raw: &str) -> String {
    static TAGS: OnceLock<Regex> = OnceLock::new();
    let tags = TAGS.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
    let stripped = tags.replace_all(raw, " ");
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Description from the first comment line, success comment from the last
/// non-blank one. A failed metric shows its recommendation instead.
///
/// This is the last non-blank line, not the second-to-last element of a
/// newline split. The two agree for newline-terminated comments. A comment
/// whose last line is not `INFO - ...` (e.g. a `DEBUG - ` trailer) yields no
/// comment text.
pub fn build_row(result: &MetricResult) -> MetricRow {
    let success = result.is_success();
    let mut description = String::new();
    let mut comment = String::new();

    let first = result.comment.lines().next();
    if let Some(rest) = first.and_then(|line| line.strip_prefix(DESCRIPTION_MARKER)) {
        description = sanitize_text(rest);
    }

    let last = result.comment.lines().rev().find(|line| !line.trim().is_empty());
    if let Some(rest) = last.and_then(|line| line.strip_prefix(COMMENT_MARKER)) {
        comment = if success {
            sanitize_text(rest)
        } else {
            sanitize_text(&result.recommendation)
        };
    }

    MetricRow {
        metric: sanitize_text(&result.metric),
        description,
        score: result.score,
        success,
        comment,
    }
}

pub fn build_report(results: &[MetricResult]) -> FairnessReport {
    let (evaluation_score, max_score) = aggregate(results);
    FairnessReport {
        percentage: percentage(evaluation_score, max_score),
        evaluation_score,
        max_score,
        assessed_uri: results.first().and_then(|r| r.target_uri.clone()),
        rows: results.iter().map(build_row).collect(),
        assessed_at: Utc::now(),
    }
}

/// Turns a raw assessment response into what gets shown. Anything but a JSON
/// list is a fetch failure.
pub fn build_display(response: Option<&Value>) -> FairnessDisplay {
    let Some(Value::Array(records)) = response else {
        tracing::warn!("FAIR-Checker response is not a list of metrics");
        return FairnessDisplay::Failure {
            message: FETCH_FAILED_MESSAGE.to_string(),
        };
    };

    let results: Vec<MetricResult> = records.iter().map(MetricResult::from_value).collect();
    let report = build_report(&results);
    tracing::info!(
        "📊 FAIRness {}% ({}/{}) over {} metrics",
        report.percentage,
        report.evaluation_score,
        report.max_score,
        report.rows.len()
    );
    FairnessDisplay::Report(report)
}
