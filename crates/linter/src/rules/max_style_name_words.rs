//! max-style-name-words
//!
//! Limit the number of camelCase words in exported style names of
//! `*.css.ts` modules. A long name such as `messageWallItemTimestamp` means
//! the component owning the styles should be split up.

use oxc_ast::ast::{Declaration, Expression, Program, Statement, VariableDeclaration};
use oxc_span::{GetSpan, Span};
use rustc_hash::FxHashSet;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use common::{callee_name, count_words, is_style_module, module_export_name, STYLE_FACTORY};

use crate::config::parse_options;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const DEFAULT_MAX_WORDS: usize = 3;

const TOO_MANY_WORDS: &str =
    "Style name '{{ name }}' has {{ count }} words. Component is too large and needs refactoring.";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct MaxStyleNameWordsOptions {
    max_words: Option<i64>,
}

/// max-style-name-words rule
#[derive(Debug, Clone)]
pub struct MaxStyleNameWords {
    /// Largest word count that is still accepted
    pub max_words: usize,
}

impl Default for MaxStyleNameWords {
    fn default() -> Self {
        Self {
            max_words: DEFAULT_MAX_WORDS,
        }
    }
}

impl RuleMeta for MaxStyleNameWords {
    const NAME: &'static str = "max-style-name-words";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl MaxStyleNameWords {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_words(mut self, max_words: usize) -> Self {
        self.max_words = max_words;
        self
    }

    fn check_name(&self, name: &str, span: Span) -> Option<Diagnostic> {
        let count = count_words(name);
        if count <= self.max_words {
            return None;
        }
        Some(
            Diagnostic::from_template(
                Self::NAME,
                span,
                "tooManyWords",
                TOO_MANY_WORDS,
                &[("name", name.to_string()), ("count", count.to_string())],
            )
            .with_severity(DiagnosticSeverity::Error),
        )
    }
}

impl FromOptions for MaxStyleNameWords {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: MaxStyleNameWordsOptions = parse_options(Self::NAME, options)?;
        match options.max_words {
            None => Ok(Self::new()),
            Some(max_words) if max_words >= 1 => Ok(Self::new().with_max_words(max_words as usize)),
            Some(max_words) => Err(ConfigError::InvalidValue {
                rule: Self::NAME,
                message: format!("maxWords must be at least 1, got {max_words}"),
            }),
        }
    }
}

/// Whether an initializer is a `style(...)` call
fn is_style_call(init: Option<&Expression<'_>>) -> bool {
    matches!(init, Some(Expression::CallExpression(call)) if callee_name(call) == Some(STYLE_FACTORY))
}

/// Names bound to `style(...)` by declarations that are not exported in place
fn local_style_bindings<'b>(program: &'b Program<'_>) -> FxHashSet<&'b str> {
    let mut bindings = FxHashSet::default();
    for stmt in &program.body {
        if let Statement::VariableDeclaration(decl) = stmt {
            collect_style_bindings(decl, &mut bindings);
        }
    }
    bindings
}

fn collect_style_bindings<'b>(decl: &'b VariableDeclaration<'_>, bindings: &mut FxHashSet<&'b str>) {
    for declarator in &decl.declarations {
        if !is_style_call(declarator.init.as_ref()) {
            continue;
        }
        if let Some(id) = declarator.id.get_binding_identifier() {
            bindings.insert(id.name.as_str());
        }
    }
}

impl Rule for MaxStyleNameWords {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError> {
        if !is_style_module(&ctx.filename()) {
            debug!(rule = Self::NAME, path = %ctx.filename(), "not a style module, skipping");
            return Ok(());
        }

        let local_styles = local_style_bindings(program);

        for stmt in &program.body {
            let Statement::ExportNamedDeclaration(export) = stmt else {
                continue;
            };

            if let Some(Declaration::VariableDeclaration(decl)) = &export.declaration {
                for declarator in &decl.declarations {
                    if !is_style_call(declarator.init.as_ref()) {
                        continue;
                    }
                    let Some(id) = declarator.id.get_binding_identifier() else {
                        continue;
                    };
                    if let Some(diagnostic) = self.check_name(&id.name, id.span) {
                        ctx.report(diagnostic);
                    }
                }
            }

            // Re-exports from other modules are checked where they are defined
            if export.source.is_some() {
                continue;
            }
            for specifier in &export.specifiers {
                let Some(local) = module_export_name(&specifier.local) else {
                    continue;
                };
                if !local_styles.contains(local) {
                    continue;
                }
                if let Some(diagnostic) = self.check_name(local, specifier.local.span()) {
                    ctx.report(diagnostic);
                }
            }
        }

        Ok(())
    }
}
