//! prefer-array-at
//!
//! Prefer `arr.at(i)` over `arr[i]` for array element access.
//!
//! With type information the rule only fires on receivers that resolve to
//! an array-like type. Without it, numeric indexes are always reported and
//! other indexes only when the receiver looks like an array by name or by
//! the methods called on it.

use oxc_ast::ast::{ChainElement, ComputedMemberExpression, Expression, Program};
use oxc_ast_visit::{walk, Visit};
use oxc_span::GetSpan;
use oxc_syntax::operator::UnaryOperator;
use serde_json::Value;
use tracing::{debug, trace};

use common::{
    format_js_number, is_array_method, is_array_returning_method, looks_like_array_name,
    member_property_name, source_text, strip_parens, TYPED_ARRAY_RETURNING_METHODS,
};

use crate::config::reject_options;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, Fix};
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::type_info::TypeProvider;
use crate::{Rule, RuleCategory, RuleMeta};

const PREFER_ARRAY_AT: &str = "Use .at({{index}}) instead of [{{index}}] for array access";

/// How receivers are classified as arrays, chosen once per file
#[derive(Clone, Copy)]
pub enum ArrayAccessMode<'t> {
    /// Receivers must resolve to an array-like type
    WithTypeInfo(&'t dyn TypeProvider),
    /// Receivers are judged by naming and call-shape conventions
    HeuristicOnly,
}

impl std::fmt::Debug for ArrayAccessMode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WithTypeInfo(_) => f.write_str("WithTypeInfo"),
            Self::HeuristicOnly => f.write_str("HeuristicOnly"),
        }
    }
}

impl<'t> ArrayAccessMode<'t> {
    pub fn from_provider(provider: Option<&'t dyn TypeProvider>) -> Self {
        provider.map_or(Self::HeuristicOnly, Self::WithTypeInfo)
    }
}

#[derive(Debug, Clone, Default)]
pub struct PreferArrayAt;

impl RuleMeta for PreferArrayAt {
    const NAME: &'static str = "prefer-array-at";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl PreferArrayAt {
    pub fn new() -> Self {
        Self
    }
}

impl FromOptions for PreferArrayAt {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        reject_options(Self::NAME, options)?;
        Ok(Self::new())
    }
}

impl Rule for PreferArrayAt {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError> {
        let mode = ArrayAccessMode::from_provider(ctx.type_provider());
        debug!(rule = Self::NAME, ?mode, "array access mode selected");

        let mut visitor = IndexAccessVisitor {
            source_text: ctx.source_text(),
            mode,
            diagnostics: Vec::new(),
        };
        visitor.visit_program(program);
        for diagnostic in visitor.diagnostics {
            ctx.report(diagnostic);
        }
        Ok(())
    }
}

/// Index shapes that can be rewritten, with the text used in the message and fix
enum IndexShape {
    Numeric(String),
    Expression(String),
}

struct IndexAccessVisitor<'s, 't> {
    source_text: &'s str,
    mode: ArrayAccessMode<'t>,
    diagnostics: Vec<Diagnostic>,
}

impl IndexAccessVisitor<'_, '_> {
    fn index_shape(&self, index: &Expression<'_>) -> Option<IndexShape> {
        match index {
            Expression::NumericLiteral(lit) => Some(IndexShape::Numeric(format_js_number(lit.value))),
            Expression::UnaryExpression(unary) if unary.operator == UnaryOperator::UnaryNegation => {
                match &unary.argument {
                    Expression::NumericLiteral(lit) => {
                        Some(IndexShape::Numeric(format_js_number(-lit.value)))
                    }
                    _ => None,
                }
            }
            Expression::Identifier(_)
            | Expression::BinaryExpression(_)
            | Expression::CallExpression(_) => Some(IndexShape::Expression(
                source_text(self.source_text, index.span()).to_string(),
            )),
            _ => None,
        }
    }

    fn is_array_receiver(&self, object: &Expression<'_>, shape: &IndexShape) -> bool {
        match self.mode {
            ArrayAccessMode::WithTypeInfo(provider) => match provider.type_of(object) {
                Ok(ty) => ty.is_array_like() || is_typed_array_method_call(object),
                Err(err) => {
                    trace!(rule = PreferArrayAt::NAME, error = %err, "type query failed, treating receiver as non-array");
                    false
                }
            },
            ArrayAccessMode::HeuristicOnly => {
                matches!(shape, IndexShape::Numeric(_)) || looks_like_array(object)
            }
        }
    }

    fn check(&mut self, member: &ComputedMemberExpression<'_>) {
        let Some(shape) = self.index_shape(&member.expression) else {
            return;
        };
        if !self.is_array_receiver(&member.object, &shape) {
            return;
        }

        let index = match shape {
            IndexShape::Numeric(index) | IndexShape::Expression(index) => index,
        };
        let object = source_text(self.source_text, member.object.span());
        let accessor = if member.optional { "?." } else { "." };
        let replacement = format!("{object}{accessor}at({index})");

        self.diagnostics.push(
            Diagnostic::from_template(
                PreferArrayAt::NAME,
                member.span,
                "preferArrayAt",
                PREFER_ARRAY_AT,
                &[("index", index)],
            )
            .with_fix(Fix::new(member.span, replacement).with_message("Use `.at()`")),
        );
    }
}

impl<'a> Visit<'a> for IndexAccessVisitor<'_, '_> {
    // Only expression positions: `arr[0] = x` must stay a bracket access
    fn visit_expression(&mut self, expr: &Expression<'a>) {
        if let Expression::ComputedMemberExpression(member) = expr {
            self.check(member);
        }
        walk::walk_expression(self, expr);
    }

    fn visit_chain_element(&mut self, element: &ChainElement<'a>) {
        if let ChainElement::ComputedMemberExpression(member) = element {
            self.check(member);
        }
        walk::walk_chain_element(self, element);
    }
}

/// Naming and call-shape guess at whether an expression evaluates to an array
fn looks_like_array(expr: &Expression<'_>) -> bool {
    match strip_parens(expr) {
        Expression::Identifier(ident) => looks_like_array_name(&ident.name),
        Expression::StaticMemberExpression(member) => {
            is_array_method(&member.property.name) || looks_like_array(&member.object)
        }
        Expression::ComputedMemberExpression(member) => {
            member_property_name(strip_parens(expr)).is_some_and(is_array_method)
                || looks_like_array(&member.object)
        }
        Expression::CallExpression(call) => match strip_parens(&call.callee) {
            Expression::StaticMemberExpression(callee) => {
                is_array_returning_method(&callee.property.name)
                    || matches!(&callee.object, Expression::Identifier(ident) if ident.name.as_str() == "Array")
            }
            _ => false,
        },
        _ => false,
    }
}

/// `xs.filter(...)` and friends, trusted once a type has been resolved
fn is_typed_array_method_call(expr: &Expression<'_>) -> bool {
    let Expression::CallExpression(call) = strip_parens(expr) else {
        return false;
    };
    member_property_name(strip_parens(&call.callee))
        .is_some_and(|method| TYPED_ARRAY_RETURNING_METHODS.contains(method))
}
