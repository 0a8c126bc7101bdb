//! Static type information for type-aware rules
//!
//! Rules never depend on a concrete checker: they receive a [`TypeProvider`]
//! through the [`LintContext`](crate::LintContext) when one is available.
//! [`SemanticTypeProvider`] answers queries from oxc_semantic by following an
//! identifier to its declaration and reading the declared TypeScript
//! annotation, or the initializer when there is none.

use oxc_ast::ast::Expression;
use oxc_ast::AstKind;
use oxc_semantic::Semantic;
use oxc_span::{GetSpan, Span};

use common::{callee_name, member_property_name, source_text, strip_parens};

use crate::error::TypeQueryError;

/// How far identifier → initializer chains are followed
const MAX_RESOLVE_DEPTH: usize = 8;

/// Coarse classification of a resolved type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Array,
    ReadonlyArray,
    Tuple,
    Primitive,
    Object,
}

/// A type as reported by a [`TypeProvider`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedType {
    pub kind: TypeKind,
    /// Printed form of the type (`string[]`, `NodeListOf<Element>`)
    pub display: String,
}

impl ResolvedType {
    pub fn new(kind: TypeKind, display: impl Into<String>) -> Self {
        Self {
            kind,
            display: display.into(),
        }
    }

    /// Arrays, tuples and collection types such as `NodeList` or `HTMLCollection`
    pub fn is_array_like(&self) -> bool {
        matches!(
            self.kind,
            TypeKind::Array | TypeKind::ReadonlyArray | TypeKind::Tuple
        ) || ["Array", "List", "Collection"]
            .iter()
            .any(|marker| self.display.contains(marker))
    }
}

/// Source of static type information
pub trait TypeProvider {
    /// Type of `expr`, or an error when it cannot be determined
    fn type_of(&self, expr: &Expression<'_>) -> Result<ResolvedType, TypeQueryError>;
}

/// [`TypeProvider`] backed by oxc_semantic symbol resolution
pub struct SemanticTypeProvider<'a> {
    semantic: &'a Semantic<'a>,
    source_text: &'a str,
}

impl<'a> SemanticTypeProvider<'a> {
    pub fn new(semantic: &'a Semantic<'a>, source_text: &'a str) -> Self {
        Self {
            semantic,
            source_text,
        }
    }

    fn resolve(&self, expr: &Expression<'_>, depth: usize) -> Result<ResolvedType, TypeQueryError> {
        if depth > MAX_RESOLVE_DEPTH {
            return Err(TypeQueryError::DepthExceeded(MAX_RESOLVE_DEPTH));
        }

        match strip_parens(expr) {
            Expression::ArrayExpression(_) => Ok(ResolvedType::new(TypeKind::Array, "any[]")),
            Expression::StringLiteral(_) | Expression::TemplateLiteral(_) => {
                Ok(ResolvedType::new(TypeKind::Primitive, "string"))
            }
            Expression::NumericLiteral(_) => Ok(ResolvedType::new(TypeKind::Primitive, "number")),
            Expression::BooleanLiteral(_) => Ok(ResolvedType::new(TypeKind::Primitive, "boolean")),
            Expression::ObjectExpression(_) => Ok(ResolvedType::new(TypeKind::Object, "{}")),
            Expression::NewExpression(new_expr) => match &new_expr.callee {
                Expression::Identifier(ident) => Ok(classify_annotation(&ident.name)),
                _ => Err(TypeQueryError::Unsupported("constructor call")),
            },
            Expression::TSAsExpression(as_expr) => Ok(classify_annotation(source_text(
                self.source_text,
                as_expr.type_annotation.span(),
            ))),
            Expression::TSSatisfiesExpression(satisfies) => {
                self.resolve(&satisfies.expression, depth + 1)
            }
            Expression::CallExpression(call) => {
                if let Expression::StaticMemberExpression(member) = strip_parens(&call.callee) {
                    let receiver = match &member.object {
                        Expression::Identifier(ident) => Some(ident.name.as_str()),
                        _ => None,
                    };
                    match (receiver, member.property.name.as_str()) {
                        (Some("Array"), "from" | "of") => {
                            return Ok(ResolvedType::new(TypeKind::Array, "any[]"))
                        }
                        (Some("Object"), "keys") => {
                            return Ok(ResolvedType::new(TypeKind::Array, "string[]"))
                        }
                        (Some("Object"), "values" | "entries") => {
                            return Ok(ResolvedType::new(TypeKind::Array, "any[]"))
                        }
                        (_, "querySelectorAll") => {
                            return Ok(ResolvedType::new(TypeKind::Object, "NodeListOf<Element>"))
                        }
                        (_, "split") => return Ok(ResolvedType::new(TypeKind::Array, "string[]")),
                        _ => {}
                    }
                }
                match member_property_name(strip_parens(&call.callee)) {
                    Some(method) if common::TYPED_ARRAY_RETURNING_METHODS.contains(method) => {
                        Ok(ResolvedType::new(TypeKind::Array, "any[]"))
                    }
                    _ if callee_name(call).is_some() => {
                        Err(TypeQueryError::Unsupported("function call result"))
                    }
                    _ => Err(TypeQueryError::Unsupported("method call result")),
                }
            }
            Expression::Identifier(ident) => {
                let name = ident.name.as_str();
                let scoping = self.semantic.scoping();
                let symbol_id = ident
                    .reference_id
                    .get()
                    .and_then(|reference_id| scoping.get_reference(reference_id).symbol_id())
                    .ok_or_else(|| TypeQueryError::Unresolved(name.to_string()))?;

                let binding_span = scoping.symbol_span(symbol_id);
                let declaration = self.semantic.nodes().kind(scoping.symbol_declaration(symbol_id));

                match declaration {
                    // The declared type and initializer describe the whole pattern
                    AstKind::VariableDeclarator(declarator)
                        if declarator.id.get_binding_identifier().is_none() =>
                    {
                        Err(TypeQueryError::Unsupported("destructured binding"))
                    }
                    AstKind::VariableDeclarator(declarator) => {
                        let annotation_end = declarator
                            .init
                            .as_ref()
                            .map_or(declarator.span.end, |init| init.span().start);
                        if let Some(annotation) =
                            self.annotation_between(binding_span, annotation_end)
                        {
                            return Ok(classify_annotation(annotation));
                        }
                        match &declarator.init {
                            Some(init) => self.resolve(init, depth + 1),
                            None => Err(TypeQueryError::Unresolved(name.to_string())),
                        }
                    }
                    AstKind::FormalParameter(param)
                        if param.pattern.get_binding_identifier().is_none() =>
                    {
                        Err(TypeQueryError::Unsupported("destructured binding"))
                    }
                    AstKind::FormalParameter(param) => self
                        .annotation_between(binding_span, param.span.end)
                        .map(classify_annotation)
                        .ok_or_else(|| TypeQueryError::Unresolved(name.to_string())),
                    _ => Err(TypeQueryError::Unsupported("non-variable declaration")),
                }
            }
            _ => Err(TypeQueryError::Unsupported("expression")),
        }
    }

    /// Declared annotation text between a binding name and `end`
    /// (`xs: string[] = …` → `string[]`).
    fn annotation_between(&self, binding: Span, end: u32) -> Option<&'a str> {
        if end <= binding.end {
            return None;
        }
        let text = source_text(self.source_text, Span::new(binding.end, end));
        let text = text.trim_start();
        let text = text.strip_prefix('?').unwrap_or(text).trim_start();
        let text = text.strip_prefix(':')?;
        let annotation = cut_at_initializer(text).trim();
        (!annotation.is_empty()).then_some(annotation)
    }
}

impl TypeProvider for SemanticTypeProvider<'_> {
    fn type_of(&self, expr: &Expression<'_>) -> Result<ResolvedType, TypeQueryError> {
        self.resolve(expr, 0)
    }
}

/// Cut an annotation at a top-level `=` that starts an initializer
fn cut_at_initializer(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'<' | b'(' | b'[' | b'{' => depth += 1,
            b'>' if i > 0 && bytes[i - 1] == b'=' => {}
            b'>' | b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'=' if depth == 0 && bytes.get(i + 1) != Some(&b'>') => return &text[..i],
            _ => {}
        }
    }
    text
}

/// Classify a printed TypeScript type
fn classify_annotation(text: &str) -> ResolvedType {
    let text = text.trim();
    let members: Vec<&str> = split_top_level_union(text)
        .into_iter()
        .filter(|member| !matches!(*member, "undefined" | "null"))
        .collect();
    let single = match members.as_slice() {
        [only] => *only,
        _ => text,
    };

    let kind = if (single.starts_with("readonly ") && single.ends_with("[]"))
        || single.starts_with("ReadonlyArray<")
    {
        TypeKind::ReadonlyArray
    } else if single.ends_with("[]") || single.starts_with("Array<") || single == "Array" {
        TypeKind::Array
    } else if single.starts_with('[') && single.ends_with(']') {
        TypeKind::Tuple
    } else if matches!(
        single,
        "string" | "number" | "boolean" | "bigint" | "symbol" | "undefined" | "null"
    ) {
        TypeKind::Primitive
    } else {
        TypeKind::Object
    };
    ResolvedType::new(kind, single)
}

fn split_top_level_union(text: &str) -> Vec<&str> {
    let mut members = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        match byte {
            b'<' | b'(' | b'[' | b'{' => depth += 1,
            b'>' | b')' | b']' | b'}' => depth = depth.saturating_sub(1),
            b'|' if depth == 0 => {
                members.push(text[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    members.push(text[start..].trim());
    members.retain(|member| !member.is_empty());
    members
}
