use std::fmt;

use super::outcome::Failure;

/// Opening tag of every rendered report.
pub const REPORT_OPEN: &str = r#"<ul style="text-align: start;">"#;
/// Closing tag of every rendered report.
pub const REPORT_CLOSE: &str = "</ul>";

/// One failing or missing field in a run.
#[derive(Debug)]
pub struct ReportEntry {
    field_id: String,
    label: Option<String>,
    failure: Failure,
}

impl ReportEntry {
    pub(crate) fn new(field_id: impl Into<String>, label: Option<String>, failure: Failure) -> Self {
        Self {
            field_id: field_id.into(),
            label,
            failure,
        }
    }

    #[must_use]
    pub fn field_id(&self) -> &str {
        &self.field_id
    }

    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    #[must_use]
    pub fn failure(&self) -> &Failure {
        &self.failure
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.failure, &self.label) {
            (Failure::MissingField { .. }, _) | (_, None) => write!(f, "{}", self.failure),
            (failure, Some(label)) => write!(f, "{label} -> {failure}"),
        }
    }
}

/// Ordered list of entries, rendered as an HTML list.
#[derive(Debug, Default)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

impl Report {
    pub(crate) fn push(&mut self, entry: ReportEntry) {
        self.entries.push(entry);
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REPORT_OPEN)?;
        for entry in &self.entries {
            write!(f, "<li>{entry}</li>")?;
        }
        f.write_str(REPORT_CLOSE)
    }
}

/// Aggregate result of a validation run.
#[derive(Debug)]
#[must_use]
pub struct RunResult {
    valid: bool,
    report: String,
    entries: Vec<ReportEntry>,
}

impl RunResult {
    pub(crate) fn from_report(report: Report) -> Self {
        Self {
            valid: report.is_empty(),
            report: report.to_string(),
            entries: report.entries,
        }
    }

    /// `true` when no field was missing or failed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// The rendered list, always a well-formed container even when empty.
    #[must_use]
    pub fn report(&self) -> &str {
        &self.report
    }

    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }
}

impl fmt::Display for RunResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "valid: {}, errors: {}", self.valid, self.entries.len())
    }
}
