//! Expression utilities for working with OXC AST

use oxc_ast::ast::{CallExpression, Expression, ModuleExportName};
use oxc_span::Span;

/// Skip any number of wrapping parentheses
pub fn strip_parens<'b, 'a>(mut expr: &'b Expression<'a>) -> &'b Expression<'a> {
    while let Expression::ParenthesizedExpression(paren) = expr {
        expr = &paren.expression;
    }
    expr
}

/// Name of a call's callee when it is a bare identifier (`style(...)`)
pub fn callee_name<'b>(call: &'b CallExpression<'_>) -> Option<&'b str> {
    match strip_parens(&call.callee) {
        Expression::Identifier(ident) => Some(ident.name.as_str()),
        _ => None,
    }
}

/// Property name of a member expression (`a.b` or `a[b]` with an identifier key)
pub fn member_property_name<'b>(expr: &'b Expression<'_>) -> Option<&'b str> {
    match expr {
        Expression::StaticMemberExpression(member) => Some(member.property.name.as_str()),
        Expression::ComputedMemberExpression(member) => match &member.expression {
            Expression::Identifier(ident) => Some(ident.name.as_str()),
            _ => None,
        },
        _ => None,
    }
}

/// Identifier form of an import/export name; string-literal names yield `None`
pub fn module_export_name<'b>(name: &'b ModuleExportName<'_>) -> Option<&'b str> {
    match name {
        ModuleExportName::IdentifierName(ident) => Some(ident.name.as_str()),
        ModuleExportName::IdentifierReference(ident) => Some(ident.name.as_str()),
        ModuleExportName::StringLiteral(_) => None,
    }
}

/// Slice of source text covered by a span
pub fn source_text(source: &str, span: Span) -> &str {
    source
        .get(span.start as usize..span.end as usize)
        .unwrap_or_default()
}

/// Format a number the way JavaScript's `String(n)` does for common values
pub fn format_js_number(value: f64) -> String {
    if value == 0.0 {
        // Covers -0, which JavaScript prints as "0"
        "0".to_string()
    } else if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
