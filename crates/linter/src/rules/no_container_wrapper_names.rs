//! no-container-wrapper-names
//!
//! Forbid `container`, `wrapper`, `*Container` and `*Wrapper` export names in
//! `*.css.ts` modules in favour of `root` / `*Root`. Exports created with
//! vanilla-extract's `createContainer` are the exception: those must end
//! with `Container`.

use oxc_ast::ast::{
    Declaration, Expression, ImportDeclarationSpecifier, Program, Statement, VariableDeclarator,
};
use oxc_span::Span;
use serde_json::Value;
use tracing::debug;

use common::{
    callee_name, is_style_module, module_export_name, replace_suffix, BANNED_EXACT_NAMES,
    BANNED_SUFFIXES, CONTAINER_FACTORY, VANILLA_EXTRACT_MODULE,
};

use crate::config::reject_options;
use crate::context::LintContext;
use crate::diagnostic::Diagnostic;
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const BANNED_EXACT_NAME: &str =
    r#"Variable name "{{name}}" is banned in *.css.ts files. Use "root" or "{{suggestion}}"."#;
const BANNED_PATTERN: &str = r#"Variable name "{{name}}" contains banned pattern "{{pattern}}" in *.css.ts files. Use "{{suggestion}}" instead."#;
const REQUIRE_CONTAINER_SUFFIX: &str = r#"Variable name "{{name}}" using createContainer must end with "Container". Use "{{suggestion}}" instead."#;

const CONTAINER_SUFFIX: &str = "Container";
const ROOT_SUFFIX: &str = "Root";

#[derive(Debug, Clone, Default)]
pub struct NoContainerWrapperNames;

impl RuleMeta for NoContainerWrapperNames {
    const NAME: &'static str = "no-container-wrapper-names";
    const CATEGORY: RuleCategory = RuleCategory::Style;
}

impl NoContainerWrapperNames {
    pub fn new() -> Self {
        Self
    }

    /// Check one exported binding name
    pub fn check_name(&self, name: &str, span: Span, uses_container_factory: bool) -> Option<Diagnostic> {
        if uses_container_factory {
            if name.ends_with(CONTAINER_SUFFIX) {
                return None;
            }
            let suggestion = replace_suffix(name, ROOT_SUFFIX, CONTAINER_SUFFIX)
                .unwrap_or_else(|| format!("{name}{CONTAINER_SUFFIX}"));
            return Some(Diagnostic::from_template(
                Self::NAME,
                span,
                "requireContainerSuffix",
                REQUIRE_CONTAINER_SUFFIX,
                &[("name", name.to_string()), ("suggestion", suggestion)],
            ));
        }

        if BANNED_EXACT_NAMES.contains(name) {
            return Some(Diagnostic::from_template(
                Self::NAME,
                span,
                "bannedExactName",
                BANNED_EXACT_NAME,
                &[("name", name.to_string()), ("suggestion", "root".to_string())],
            ));
        }

        BANNED_SUFFIXES.iter().find_map(|pattern| {
            let suggestion = replace_suffix(name, pattern, ROOT_SUFFIX)?;
            Some(Diagnostic::from_template(
                Self::NAME,
                span,
                "bannedPattern",
                BANNED_PATTERN,
                &[
                    ("name", name.to_string()),
                    ("pattern", (*pattern).to_string()),
                    ("suggestion", suggestion),
                ],
            ))
        })
    }
}

/// Local name `createContainer` is imported under, if it is imported
fn container_factory_alias<'b>(program: &'b Program<'_>) -> Option<&'b str> {
    program.body.iter().find_map(|stmt| {
        let Statement::ImportDeclaration(import) = stmt else {
            return None;
        };
        if import.source.value.as_str() != VANILLA_EXTRACT_MODULE {
            return None;
        }
        import.specifiers.as_ref()?.iter().find_map(|specifier| match specifier {
            ImportDeclarationSpecifier::ImportSpecifier(named)
                if module_export_name(&named.imported) == Some(CONTAINER_FACTORY) =>
            {
                Some(named.local.name.as_str())
            }
            _ => None,
        })
    })
}

fn calls_factory(declarator: &VariableDeclarator<'_>, factory: Option<&str>) -> bool {
    match (&declarator.init, factory) {
        (Some(Expression::CallExpression(call)), Some(factory)) => callee_name(call) == Some(factory),
        _ => false,
    }
}

impl FromOptions for NoContainerWrapperNames {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        reject_options(Self::NAME, options)?;
        Ok(Self::new())
    }
}

impl Rule for NoContainerWrapperNames {
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

        let factory = container_factory_alias(program);

        for stmt in &program.body {
            let Statement::ExportNamedDeclaration(export) = stmt else {
                continue;
            };
            let Some(Declaration::VariableDeclaration(decl)) = &export.declaration else {
                continue;
            };
            for declarator in &decl.declarations {
                let Some(id) = declarator.id.get_binding_identifier() else {
                    continue;
                };
                let uses_factory = calls_factory(declarator, factory);
                if let Some(diagnostic) = self.check_name(&id.name, id.span, uses_factory) {
                    ctx.report(diagnostic);
                }
            }
        }

        Ok(())
    }
}
