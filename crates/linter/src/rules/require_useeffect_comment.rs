//! require-useeffect-comment
//!
//! Require a comment inside every `useEffect` callback explaining why the
//! side effect is necessary.

use oxc_ast::ast::{Argument, CallExpression, Expression, Program};
use oxc_ast::Comment;
use oxc_ast_visit::{walk, Visit};
use oxc_span::Span;
use serde_json::Value;

use common::{source_text, strip_parens};

use crate::config::reject_options;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const MISSING_COMMENT: &str =
    "useEffect must have a comment explaining why this side effect is necessary";

/// A justification must be longer than this many UTF-16 code units, after trimming
const MIN_COMMENT_LEN: usize = 10;

#[derive(Debug, Clone, Default)]
pub struct RequireUseeffectComment;

impl RuleMeta for RequireUseeffectComment {
    const NAME: &'static str = "require-useeffect-comment";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl RequireUseeffectComment {
    pub fn new() -> Self {
        Self
    }
}

impl FromOptions for RequireUseeffectComment {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        reject_options(Self::NAME, options)?;
        Ok(Self::new())
    }
}

impl Rule for RequireUseeffectComment {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError> {
        let mut visitor = EffectVisitor {
            source_text: ctx.source_text(),
            comments: &program.comments,
            diagnostics: Vec::new(),
        };
        visitor.visit_program(program);
        for diagnostic in visitor.diagnostics {
            ctx.report(diagnostic);
        }
        Ok(())
    }
}

/// `useEffect(...)` or `React.useEffect(...)`
fn is_use_effect(call: &CallExpression<'_>) -> bool {
    match strip_parens(&call.callee) {
        Expression::Identifier(ident) => ident.name.as_str() == "useEffect",
        Expression::StaticMemberExpression(member) => member.property.name.as_str() == "useEffect",
        _ => false,
    }
}

/// Comment text without its `//` or `/* */` delimiters
fn comment_text<'s>(source: &'s str, comment: &Comment) -> &'s str {
    let raw = source_text(source, comment.span);
    if let Some(line) = raw.strip_prefix("//") {
        return line;
    }
    match raw.strip_prefix("/*") {
        Some(block) => block.strip_suffix("*/").unwrap_or(block),
        None => raw,
    }
}

fn is_justification(text: &str) -> bool {
    text.trim().encode_utf16().count() > MIN_COMMENT_LEN
}

struct EffectVisitor<'s> {
    source_text: &'s str,
    comments: &'s [Comment],
    diagnostics: Vec<Diagnostic>,
}

impl EffectVisitor<'_> {
    /// Block body of the effect callback; expression-bodied arrows have none
    fn effect_body(call: &CallExpression<'_>) -> Option<Span> {
        match call.arguments.first()? {
            Argument::ArrowFunctionExpression(arrow) if !arrow.expression => Some(arrow.body.span),
            Argument::FunctionExpression(func) => func.body.as_ref().map(|body| body.span),
            _ => None,
        }
    }

    fn has_justification(&self, body: Span) -> bool {
        self.comments
            .iter()
            .filter(|comment| comment.span.start >= body.start && comment.span.end <= body.end)
            .any(|comment| is_justification(comment_text(self.source_text, comment)))
    }
}

impl<'a> Visit<'a> for EffectVisitor<'_> {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if is_use_effect(call) {
            if let Some(body) = Self::effect_body(call) {
                if !self.has_justification(body) {
                    self.diagnostics.push(
                        Diagnostic::from_template(
                            RequireUseeffectComment::NAME,
                            call.span,
                            "missingComment",
                            MISSING_COMMENT,
                            &[],
                        )
                        .with_severity(DiagnosticSeverity::Error),
                    );
                }
            }
        }
        walk::walk_call_expression(self, call);
    }
}
