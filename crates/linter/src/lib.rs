//! Convention lint rules for component-based UI codebases
//!
//! This crate provides lint rules for React + vanilla-extract projects built on
//! the oxc AST. Rules can be used:
//! 1. Standalone, one rule at a time, through [`Rule::run`]
//! 2. Through [`LintRunner`] with a [`RulesConfig`] built from JSON ([`LintConfig`])
//! 3. With type-aware analysis by handing a [`TypeProvider`] to the [`LintContext`]

pub mod config;
pub mod error;
pub mod fs;
pub mod registry;
pub mod rules;
pub mod type_info;
pub mod visitor;
mod context;
mod diagnostic;

use oxc_ast::ast::Program;

pub use config::{LintConfig, RuleLevel, RuleSetting};
pub use context::LintContext;
pub use diagnostic::{Diagnostic, DiagnosticSeverity, Fix};
pub use error::{ConfigError, LintError, TypeQueryError};
pub use registry::{builtin_rule_names, find_rule, RuleEntry, RULES};
pub use rules::*;
pub use type_info::{ResolvedType, SemanticTypeProvider, TypeKind, TypeProvider};
pub use visitor::{lint, lint_with_config, LintResult, LintRunner, RulesConfig};

/// Rule category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Rules that detect code that breaks a project convention outright
    Correctness,
    /// Rules that suggest a preferred spelling or shape
    Style,
}

/// Rule metadata
pub trait RuleMeta {
    const NAME: &'static str;
    const CATEGORY: RuleCategory;
    /// URL to documentation
    fn docs_url() -> String {
        format!("https://github.com/ui-lint/ui-lint/blob/main/docs/rules/{}.md", Self::NAME)
    }
}

/// A lint rule that can run over one parsed file.
///
/// Rules keep no state between files: everything a rule learns while
/// visiting a file lives in locals of [`Rule::run`].
pub trait Rule: std::fmt::Debug + Send + Sync {
    /// Kebab-case name the rule is registered under
    fn name(&self) -> &'static str;

    fn category(&self) -> RuleCategory;

    /// Visit `program` and report diagnostics through `ctx`
    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError>;
}
