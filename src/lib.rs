//! UI convention linter
//!
//! Lint rules for React + vanilla-extract codebases, built on OXC.
//!
//! ## Usage
//!
//! ```rust
//! use ui_lint::{lint_source, LintConfig};
//!
//! let config = LintConfig::from_json(r#"{ "rules": { "prefer-array-at": "warn" } }"#).unwrap();
//! let result = lint_source("src/list.ts", "const first = items[0];", &config).unwrap();
//! assert_eq!(result.diagnostics[0].message, "Use .at(0) instead of [0] for array access");
//! ```

pub use ui_linter::{
    builtin_rule_names, rules, Diagnostic, DiagnosticSeverity, Fix, LintConfig, LintError,
    LintResult, RulesConfig,
};

#[cfg(feature = "napi")]
use napi_derive::napi;

use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;
use tracing::debug;

use ui_linter::{LintContext, LintRunner, SemanticTypeProvider};

/// A diagnostic as handed to JavaScript
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsDiagnostic {
    /// Rule that reported the diagnostic
    pub rule: String,
    /// Message identifier, e.g. `incorrectName`
    pub message_id: String,
    pub message: String,
    /// "error" or "warning"
    pub severity: String,
    /// Byte offset where the reported span starts
    pub start: u32,
    pub end: u32,
    /// Suggested replacements
    pub fixes: Vec<JsFix>,
}

/// A span → text replacement
#[cfg(feature = "napi")]
#[napi(object)]
pub struct JsFix {
    pub start: u32,
    pub end: u32,
    pub replacement: String,
}

#[cfg(feature = "napi")]
impl From<Diagnostic> for JsDiagnostic {
    fn from(diagnostic: Diagnostic) -> Self {
        let severity = match diagnostic.severity {
            DiagnosticSeverity::Error => "error",
            DiagnosticSeverity::Warning => "warning",
        };
        Self {
            rule: diagnostic.rule,
            message_id: diagnostic.message_id.to_string(),
            message: diagnostic.message,
            severity: severity.to_string(),
            start: diagnostic.start,
            end: diagnostic.end,
            fixes: diagnostic
                .fixes
                .into_iter()
                .map(|fix| JsFix {
                    start: fix.start,
                    end: fix.end,
                    replacement: fix.replacement,
                })
                .collect(),
        }
    }
}

/// Lint a source file
///
/// `config_json` uses the ESLint `rules` shape; when omitted every rule runs
/// at its default level.
#[cfg(feature = "napi")]
#[napi(js_name = "lintSource")]
pub fn lint_source_js(
    path: String,
    source: String,
    config_json: Option<String>,
) -> napi::Result<Vec<JsDiagnostic>> {
    let to_napi = |err: LintError| napi::Error::from_reason(err.to_string());

    let rules = match config_json {
        Some(json) => {
            let config = LintConfig::from_json(&json).map_err(|err| to_napi(err.into()))?;
            RulesConfig::from_config(&config).map_err(|err| to_napi(err.into()))?
        }
        None => RulesConfig::default(),
    };

    let result = lint_source_with_rules(&path, &source, &rules).map_err(to_napi)?;
    Ok(result.diagnostics.into_iter().map(JsDiagnostic::from).collect())
}

/// Lint a source file with a JSON-derived configuration
pub fn lint_source(path: &str, source: &str, config: &LintConfig) -> Result<LintResult, LintError> {
    let rules = RulesConfig::from_config(config)?;
    lint_source_with_rules(path, source, &rules)
}

/// Lint a source file with an already resolved rule set
pub fn lint_source_with_rules(
    path: &str,
    source: &str,
    rules: &RulesConfig,
) -> Result<LintResult, LintError> {
    let file = Path::new(path);
    let source_type = SourceType::from_path(file).unwrap_or(SourceType::tsx());

    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if let Some(error) = ret.errors.first() {
        return Err(LintError::Parse {
            path: path.to_string(),
            message: error.to_string(),
        });
    }

    let ctx = LintContext::new(source, file);

    if rules.type_aware() {
        debug!(path, "building semantic model for type-aware rules");
        let semantic = SemanticBuilder::new().build(&ret.program).semantic;
        let provider = SemanticTypeProvider::new(&semantic, source);
        LintRunner::new(ctx.with_type_provider(&provider), rules).run(&ret.program)
    } else {
        LintRunner::new(ctx, rules).run(&ret.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let result = lint_source_with_rules(
            "src/hooks/use-items.ts",
            "useEffect(() => { load(); }, []);",
            &RulesConfig::default(),
        )
        .unwrap();
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].rule, "require-useeffect-comment");
    }

    #[test]
    fn test_parse_error() {
        let err = lint_source("src/broken.ts", "const = ;", &LintConfig::default()).unwrap_err();
        assert!(matches!(err, LintError::Parse { ref path, .. } if path == "src/broken.ts"));
    }

    #[test]
    fn test_unknown_rule() {
        let config = LintConfig::from_json(r#"{ "rules": { "no-console": "error" } }"#).unwrap();
        assert!(matches!(
            lint_source("src/a.ts", "", &config),
            Err(LintError::Config(_))
        ));
    }
}
