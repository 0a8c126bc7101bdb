//! no-child-selectors
//!
//! Forbid selectors that target other elements (`& h3`, `& > li`, `&.active`)
//! inside the `selectors` block of vanilla-extract `style(...)` calls. Styles
//! for descendants belong in their own style export.

use std::sync::LazyLock;

use oxc_ast::ast::{
    Argument, ArrayExpressionElement, CallExpression, Expression, ObjectExpression,
    ObjectPropertyKind, Program, PropertyKey,
};
use oxc_ast_visit::{walk, Visit};
use regex::Regex;
use serde_json::Value;
use tracing::debug;

use common::{callee_name, is_style_module, STYLE_FACTORY};

use crate::config::reject_options;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const NO_CHILD_SELECTOR: &str = "Child selector '{{ selector }}' is not allowed in Vanilla Extract. Create a separate style export instead.";

macro_rules! lazy_regex {
    ($name:ident, $pattern:expr) => {
        static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($pattern).unwrap());
    };
}

lazy_regex!(RE_PSEUDO_ELEMENT, r"::[\w-]+");
// One level of arguments; applied until the selector stops shrinking
lazy_regex!(RE_PSEUDO_CLASS_CALL, r":[\w-]+\([^()]*\)");
lazy_regex!(RE_PSEUDO_CLASS, r":[\w-]+");
lazy_regex!(RE_ATTRIBUTE, r"\[[\w-]+[^\]]*\]");
lazy_regex!(RE_SEPARATORS, r"[\s&,]");
lazy_regex!(RE_COMBINATOR, r"[\s+>~]");
lazy_regex!(RE_ELEMENT_START, r"^[A-Za-z#.]");

/// Whether a selector only refines the styled element itself
/// (pseudo-classes, pseudo-elements, attributes)
fn is_own_element_selector(selector: &str) -> bool {
    let mut remaining = RE_PSEUDO_ELEMENT.replace_all(selector, "").into_owned();
    loop {
        let reduced = RE_PSEUDO_CLASS_CALL.replace_all(&remaining, "").into_owned();
        if reduced == remaining {
            break;
        }
        remaining = reduced;
    }
    let remaining = RE_PSEUDO_CLASS.replace_all(&remaining, "");
    let remaining = RE_ATTRIBUTE.replace_all(&remaining, "");
    RE_SEPARATORS.replace_all(&remaining, "").is_empty()
}

/// Classify a selector key: `true` when it reaches into other elements
pub fn is_child_selector(selector: &str) -> bool {
    let selector = selector.strip_prefix('&').unwrap_or(selector).trim();
    if selector.is_empty() || is_own_element_selector(selector) {
        return false;
    }
    RE_COMBINATOR.is_match(selector) || RE_ELEMENT_START.is_match(selector)
}

#[derive(Debug, Clone, Default)]
pub struct NoChildSelectors;

impl RuleMeta for NoChildSelectors {
    const NAME: &'static str = "no-child-selectors";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl NoChildSelectors {
    pub fn new() -> Self {
        Self
    }
}

impl FromOptions for NoChildSelectors {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        reject_options(Self::NAME, options)?;
        Ok(Self::new())
    }
}

impl Rule for NoChildSelectors {
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

        let mut visitor = SelectorVisitor {
            diagnostics: Vec::new(),
        };
        visitor.visit_program(program);
        for diagnostic in visitor.diagnostics {
            ctx.report(diagnostic);
        }
        Ok(())
    }
}

/// Collects child selectors from every `style(...)` call in a file
struct SelectorVisitor {
    diagnostics: Vec<Diagnostic>,
}

impl SelectorVisitor {
    fn check_style_object(&mut self, object: &ObjectExpression<'_>) {
        for property in &object.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            let PropertyKey::StaticIdentifier(key) = &property.key else {
                continue;
            };
            if key.name.as_str() != "selectors" {
                continue;
            }
            let Expression::ObjectExpression(selectors) = &property.value else {
                continue;
            };
            self.check_selectors(selectors);
        }
    }

    fn check_selectors(&mut self, selectors: &ObjectExpression<'_>) {
        for property in &selectors.properties {
            let ObjectPropertyKind::ObjectProperty(property) = property else {
                continue;
            };
            let PropertyKey::StringLiteral(key) = &property.key else {
                continue;
            };
            if !is_child_selector(&key.value) {
                continue;
            }
            self.diagnostics.push(
                Diagnostic::from_template(
                    NoChildSelectors::NAME,
                    key.span,
                    "noChildSelector",
                    NO_CHILD_SELECTOR,
                    &[("selector", key.value.to_string())],
                )
                .with_severity(DiagnosticSeverity::Error),
            );
        }
    }
}

impl<'a> Visit<'a> for SelectorVisitor {
    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        if callee_name(call) == Some(STYLE_FACTORY) {
            for argument in &call.arguments {
                match argument {
                    Argument::ObjectExpression(object) => self.check_style_object(object),
                    // style([base, { selectors: { ... } }])
                    Argument::ArrayExpression(array) => {
                        for element in &array.elements {
                            if let ArrayExpressionElement::ObjectExpression(object) = element {
                                self.check_style_object(object);
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
        walk::walk_call_expression(self, call);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;
    use std::path::Path;

    fn lint_file(source: &str, filename: &str) -> Vec<Diagnostic> {
        let allocator = Allocator::default();
        let ret = Parser::new(&allocator, source, SourceType::ts()).parse();
        assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
        let mut ctx = LintContext::new(source, Path::new(filename));
        NoChildSelectors::new().run(&mut ctx, &ret.program).unwrap();
        ctx.into_diagnostics()
    }

    fn lint(source: &str) -> Vec<Diagnostic> {
        lint_file(source, "/components/list/styles.css.ts")
    }

    #[test]
    fn test_allowed_selectors() {
        let allowed = [
            "&",
            "&:hover",
            "&:focus-visible",
            "&::before",
            "&:not(:first-child)::before",
            "&:not(:nth-child(2))",
            "&:hover, &:focus",
            "&:first-child, &:nth-child(2n + 1)",
            "&[disabled]",
            "&[data-state=\"open\"]:hover",
            ":hover",
            "*",
        ];
        for selector in allowed {
            assert!(!is_child_selector(selector), "expected allowed: {selector}");
        }
    }

    #[test]
    fn test_child_selectors() {
        let flagged = [
            "& h3",
            "& > li",
            "& + &",
            "& ~ p",
            "&:hover, & p",
            "&.active",
            "&#main",
            "div",
            ".card &",
            "&:not(.selected) span",
        ];
        for selector in flagged {
            assert!(is_child_selector(selector), "expected flagged: {selector}");
        }
    }

    #[test]
    fn test_reports_selector_keys() {
        let source = r#"
            import { style } from "@vanilla-extract/css";
            export const list = style({
                display: "grid",
                selectors: {
                    "&:hover": { color: "red" },
                    "& > li": { margin: 0 },
                    "&:not(:first-child)::before": { content: "''" },
                },
            });
        "#;
        let diagnostics = lint(source);
        assert_eq!(diagnostics.len(), 1);
        insta::assert_snapshot!(diagnostics[0].message, @"Child selector '& > li' is not allowed in Vanilla Extract. Create a separate style export instead.");

        let start = source.find("\"& > li\"").unwrap() as u32;
        assert_eq!(diagnostics[0].start, start);
        assert_eq!(diagnostics[0].end, start + "\"& > li\"".len() as u32);
    }

    #[test]
    fn test_array_and_nested_style_calls() {
        let source = r#"
            const base = style({ padding: 4 });
            export const card = style([base, { selectors: { "& h3": { margin: 0 } } }]);
            export const variants = {
                primary: style({ selectors: { "&.active": {} } }),
            };
        "#;
        let diagnostics = lint(source);
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].data["selector"], "& h3");
        assert_eq!(diagnostics[1].data["selector"], "&.active");
    }

    #[test]
    fn test_ignored_shapes() {
        let source = r#"
            export const a = globalStyle("& h3", {});
            export const b = style({ "& h3": {} });
            export const c = style({ selectors: { [`& ${child}`]: {} } });
            export const d = recipe({ selectors: { "& p": {} } });
        "#;
        assert!(lint(source).is_empty());
    }

    #[test]
    fn test_only_style_modules_are_checked() {
        let source = r#"export const a = style({ selectors: { "& h3": {} } });"#;
        assert!(lint_file(source, "/components/list/index.tsx").is_empty());
    }
}
