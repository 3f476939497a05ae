use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use std::fmt;

/// Byte range in the source document.
pub type Span = std::ops::Range<usize>;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The document could not be loaded at all.
    Error,
    /// Something was tolerated: skipped, left absent, or kept despite a
    /// problem.
    Warning,
}

/// A diagnostic message with source location.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: Severity,
    /// The chunk or line the message is about.
    pub span: Span,
    /// Human-readable description.
    pub message: String,
    /// Optional short text shown next to the span.
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: Span, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attach a label shown next to the span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.severity, self.message)
    }
}

impl Severity {
    fn report_kind(self) -> ReportKind<'static> {
        match self {
            Self::Error => ReportKind::Error,
            Self::Warning => ReportKind::Warning,
        }
    }

    fn color(self) -> Color {
        match self {
            Self::Error => Color::Red,
            Self::Warning => Color::Yellow,
        }
    }
}

/// Render diagnostics against their source document with ariadne.
///
/// Spans are byte ranges, so the reports index the source by byte; dialog
/// and ending text may hold any UTF-8. A span that is empty, as for a file
/// that could not be read, renders the message without a label.
pub fn render_diagnostics(
    source: &str,
    filename: &str,
    diagnostics: &[Diagnostic],
    color: bool,
) -> String {
    let mut output = Vec::new();

    for diag in diagnostics {
        let span = clamp(&diag.span, source.len());
        let config = Config::default()
            .with_index_type(IndexType::Byte)
            .with_color(color);
        let mut report = Report::build(diag.severity.report_kind(), (filename, span.clone()))
            .with_config(config)
            .with_message(&diag.message);

        if !span.is_empty() {
            let text = diag.label.as_deref().unwrap_or(&diag.message);
            report = report.with_label(
                Label::new((filename, span))
                    .with_message(text)
                    .with_color(diag.severity.color()),
            );
        }

        if let Err(e) = report
            .finish()
            .write((filename, Source::from(source)), &mut output)
        {
            tracing::debug!(error = %e, "could not render diagnostic");
        }
    }

    String::from_utf8_lossy(&output).into_owned()
}

/// One-line tally such as `1 error, 2 warnings`, or `None` when there is
/// nothing to report.
pub fn summarize(diagnostics: &[Diagnostic]) -> Option<String> {
    let count = |severity| diagnostics.iter().filter(|d| d.severity == severity).count();
    let plural = |n: usize| if n == 1 { "" } else { "s" };

    match (count(Severity::Error), count(Severity::Warning)) {
        (0, 0) => None,
        (0, w) => Some(format!("{w} warning{}", plural(w))),
        (e, w) => Some(format!("{e} error{}, {w} warning{}", plural(e), plural(w))),
    }
}

fn clamp(span: &Span, len: usize) -> Span {
    span.start.min(len)..span.end.min(len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::warning(0..5, "dropped chunk starting with \"FOO 1\"");
        assert_eq!(d.to_string(), "warning: dropped chunk starting with \"FOO 1\"");
    }

    #[test]
    fn render_shows_message_and_chunk() {
        let source = "PAL 0\n0,0,0\n\nFOO 1\nbar\n";
        let result = load(source);
        let output = render_diagnostics(source, "game.txt", &result.diagnostics, false);
        assert!(output.contains("dropped chunk"));
        assert!(output.contains("FOO 1"));
        assert!(output.contains("unrecognized header"));
    }

    #[test]
    fn label_after_multibyte_text_points_at_its_chunk() {
        let source = "DLG 0\ncafé crème brûlée, déjà vu\n\nFOO 1\n";
        let result = load(source);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(&source[result.diagnostics[0].span.clone()], "FOO 1");

        let output = render_diagnostics(source, "game.txt", &result.diagnostics, false);
        assert!(output.contains("game.txt:4:1"), "{output}");
        assert!(output.contains("│ FOO 1"), "{output}");
        assert!(!output.contains("│ café"), "{output}");
    }

    #[test]
    fn empty_span_renders_without_label() {
        let diags = vec![Diagnostic::error(0..0, "cannot read game.txt")];
        let output = render_diagnostics("", "game.txt", &diags, false);
        assert!(output.contains("cannot read game.txt"));
    }

    #[test]
    fn out_of_range_span_is_clamped() {
        let diags = vec![Diagnostic::warning(3..400, "past the end")];
        let output = render_diagnostics("PAL 0\n", "game.txt", &diags, false);
        assert!(output.contains("past the end"));
    }

    #[test]
    fn summarize_counts_by_severity() {
        assert_eq!(summarize(&[]), None);
        let warnings = vec![Diagnostic::warning(0..1, "a"), Diagnostic::warning(0..1, "b")];
        assert_eq!(summarize(&warnings).as_deref(), Some("2 warnings"));
        let mixed = vec![Diagnostic::error(0..0, "x"), Diagnostic::warning(0..1, "y")];
        assert_eq!(summarize(&mixed).as_deref(), Some("1 error, 1 warning"));
    }
}
