//! Diagnostic types for lint results

use indexmap::IndexMap;
use oxc_span::Span;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticSeverity {
    Error,
    Warning,
}

/// A suggested fix for a diagnostic
#[derive(Debug, Clone)]
pub struct Fix {
    /// Start position of the span to replace
    pub start: u32,
    /// End position of the span to replace
    pub end: u32,
    /// The replacement text
    pub replacement: String,
    /// Description of what the fix does
    pub message: Option<String>,
}

impl Fix {
    pub fn new(span: Span, replacement: impl Into<String>) -> Self {
        Self {
            start: span.start,
            end: span.end,
            replacement: replacement.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// A lint diagnostic
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic
    pub rule: String,
    /// Stable identifier of the message template (e.g. `incorrectName`)
    pub message_id: &'static str,
    /// Values interpolated into the message template, in insertion order
    pub data: IndexMap<&'static str, String>,
    /// Start position of the span
    pub start: u32,
    /// End position of the span
    pub end: u32,
    /// Rendered message
    pub message: String,
    /// Severity level
    pub severity: DiagnosticSeverity,
    /// Suggested fixes
    pub fixes: Vec<Fix>,
}

impl Diagnostic {
    pub fn new(rule: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message_id: "",
            data: IndexMap::new(),
            start: span.start,
            end: span.end,
            message: message.into(),
            severity: DiagnosticSeverity::Warning,
            fixes: Vec::new(),
        }
    }

    /// Build a diagnostic from a message template such as
    /// `"Style name '{{ name }}' has {{ count }} words."`.
    ///
    /// Placeholders are filled from `data`; unknown placeholders are kept verbatim.
    pub fn from_template(
        rule: impl Into<String>,
        span: Span,
        message_id: &'static str,
        template: &str,
        data: &[(&'static str, String)],
    ) -> Self {
        let data: IndexMap<&'static str, String> = data.iter().cloned().collect();
        let message = render_template(template, &data);
        let mut diagnostic = Self::new(rule, span, message);
        diagnostic.message_id = message_id;
        diagnostic.data = data;
        diagnostic
    }

    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }

    pub fn with_severity(mut self, severity: DiagnosticSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fixes.push(fix);
        self
    }
}

/// Substitute `{{key}}` / `{{ key }}` placeholders
fn render_template(template: &str, data: &IndexMap<&'static str, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let key = after[..close].trim();
        match data.get(key) {
            Some(value) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}
