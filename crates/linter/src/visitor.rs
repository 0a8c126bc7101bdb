//! Lint runner: runs every configured rule over one parsed file
//!
//! Each rule walks the AST on its own and keeps its own per-file state, so
//! the runner only sequences rules, applies configured severities and
//! collects diagnostics.

use std::path::Path;

use oxc_ast::ast::Program;
use tracing::debug;

use crate::config::LintConfig;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::{ConfigError, LintError};
use crate::registry::{find_rule, RULES};
use crate::Rule;

/// A rule together with the severity forced onto its diagnostics
#[derive(Debug)]
struct ConfiguredRule {
    rule: Box<dyn Rule>,
    severity: Option<DiagnosticSeverity>,
}

/// Configuration for which rules are enabled
#[derive(Debug)]
pub struct RulesConfig {
    rules: Vec<ConfiguredRule>,
    type_aware: bool,
}

impl Default for RulesConfig {
    /// Every registered rule with default options and default level
    fn default() -> Self {
        let rules = RULES
            .iter()
            .filter_map(|entry| {
                let rule = entry.create(None).ok()?;
                Some(ConfiguredRule {
                    rule,
                    severity: entry.default_level.severity(),
                })
            })
            .collect();
        Self {
            rules,
            type_aware: false,
        }
    }
}

impl RulesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn none() -> Self {
        Self {
            rules: Vec::new(),
            type_aware: false,
        }
    }

    /// Resolve a JSON configuration against the registry
    pub fn from_config(config: &LintConfig) -> Result<Self, ConfigError> {
        let mut rules = Vec::new();
        for (name, setting) in &config.rules {
            let entry = find_rule(name).ok_or_else(|| ConfigError::UnknownRule(name.clone()))?;
            let Some(severity) = setting.level().severity() else {
                debug!(rule = entry.name, "rule disabled");
                continue;
            };
            rules.push(ConfiguredRule {
                rule: entry.create(setting.options())?,
                severity: Some(severity),
            });
        }
        Ok(Self {
            rules,
            type_aware: config.type_aware,
        })
    }

    /// Enable a rule, keeping the severities it reports with
    pub fn with_rule(mut self, rule: impl Rule + 'static) -> Self {
        self.rules.push(ConfiguredRule {
            rule: Box::new(rule),
            severity: None,
        });
        self
    }

    /// Enable a rule and force the severity of its diagnostics
    pub fn with_rule_severity(mut self, rule: impl Rule + 'static, severity: DiagnosticSeverity) -> Self {
        self.rules.push(ConfiguredRule {
            rule: Box::new(rule),
            severity: Some(severity),
        });
        self
    }

    pub fn with_type_aware(mut self, type_aware: bool) -> Self {
        self.type_aware = type_aware;
        self
    }

    /// Whether the host should supply type information
    pub fn type_aware(&self) -> bool {
        self.type_aware
    }

    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(|configured| configured.rule.name())
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Runs all enabled rules against one file
pub struct LintRunner<'a, 'c> {
    ctx: LintContext<'a>,
    config: &'c RulesConfig,
    diagnostics: Vec<Diagnostic>,
}

impl<'a, 'c> LintRunner<'a, 'c> {
    pub fn new(ctx: LintContext<'a>, config: &'c RulesConfig) -> Self {
        Self {
            ctx,
            config,
            diagnostics: Vec::new(),
        }
    }

    /// Run all enabled rules on the given program
    pub fn run(mut self, program: &Program<'a>) -> Result<LintResult, LintError> {
        for configured in &self.config.rules {
            debug!(rule = configured.rule.name(), path = %self.ctx.filename(), "running rule");
            configured.rule.run(&mut self.ctx, program)?;

            let mut reported = self.ctx.take_diagnostics();
            if let Some(severity) = configured.severity {
                for diagnostic in &mut reported {
                    diagnostic.severity = severity;
                }
            }
            self.diagnostics.extend(reported);
        }

        self.diagnostics.sort_by_key(|diagnostic| diagnostic.start);
        Ok(LintResult {
            diagnostics: self.diagnostics,
        })
    }
}

/// Result of running the linter
#[derive(Debug)]
pub struct LintResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintResult {
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Error))
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| matches!(d.severity, DiagnosticSeverity::Warning))
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Error))
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, DiagnosticSeverity::Warning))
            .count()
    }

    /// Diagnostics reported by one rule
    pub fn by_rule<'r>(&'r self, rule: &'r str) -> impl Iterator<Item = &'r Diagnostic> + 'r {
        self.diagnostics.iter().filter(move |d| d.rule == rule)
    }
}

/// Convenience function to lint a program with default configuration
pub fn lint<'a>(source_text: &'a str, path: &'a Path, program: &Program<'a>) -> Result<LintResult, LintError> {
    lint_with_config(source_text, path, program, &RulesConfig::default())
}

/// Convenience function to lint a program with custom configuration
///
/// Type-aware rules fall back to heuristics here; build a [`LintContext`]
/// with a type provider and use [`LintRunner`] directly for type-aware runs.
pub fn lint_with_config<'a>(
    source_text: &'a str,
    path: &'a Path,
    program: &Program<'a>,
    config: &RulesConfig,
) -> Result<LintResult, LintError> {
    let ctx = LintContext::new(source_text, path);
    LintRunner::new(ctx, config).run(program)
}
