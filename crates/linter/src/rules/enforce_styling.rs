//! enforce-styling
//!
//! Require component files to import their companion style module as
//! `import * as styles from "./styles.css"`.
//!
//! When no style import exists at all, the rule only asks for one if the
//! companion `*.css.ts` file exists next to the component (unless
//! `requireWhenStylesExist` is turned off).

use oxc_ast::ast::{ImportDeclaration, ImportDeclarationSpecifier, Program, Statement};
use oxc_span::Span;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::config::parse_options;
use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

/// Binding name style modules must be imported under
const STYLES_ALIAS: &str = "styles";

const MISSING_IMPORT: &str = "{{ componentDescription }} must import styles from '{{ expectedImport }}' using 'import * as styles from \"{{ expectedImport }}\"'";
const INCORRECT_IMPORT_TYPE: &str = "{{ componentDescription }} must use namespace import: 'import * as styles from \"{{ expectedImport }}\"'";
const INCORRECT_ALIAS: &str =
    "{{ componentDescription }} must import styles with alias 'styles', not '{{ alias }}'";
const INCORRECT_SOURCE: &str =
    "{{ componentDescription }} must import from '{{ expectedImport }}', not '{{ source }}'";

/// Which style module a kind of component file must import
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StylePattern {
    /// Component kind used in messages (`page.tsx`)
    pub component_description: String,
    /// Import source the component must use (`./styles.css`)
    pub expected_import: String,
    /// Companion file probed for next to the component (`styles.css.ts`)
    pub style_file_extension: String,
    /// Only check imports starting with `./`
    #[serde(default)]
    pub require_relative_imports: bool,
}

impl StylePattern {
    pub fn new(
        component_description: impl Into<String>,
        expected_import: impl Into<String>,
        style_file_extension: impl Into<String>,
    ) -> Self {
        Self {
            component_description: component_description.into(),
            expected_import: expected_import.into(),
            style_file_extension: style_file_extension.into(),
            require_relative_imports: false,
        }
    }

    pub fn with_require_relative_imports(mut self, require: bool) -> Self {
        self.require_relative_imports = require;
        self
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct EnforceStylingOptions {
    patterns: Vec<StylePattern>,
    #[serde(default = "default_require_when_styles_exist")]
    require_when_styles_exist: bool,
}

impl Default for EnforceStylingOptions {
    fn default() -> Self {
        Self {
            patterns: Vec::new(),
            require_when_styles_exist: default_require_when_styles_exist(),
        }
    }
}

fn default_require_when_styles_exist() -> bool {
    true
}

/// enforce-styling rule
#[derive(Debug, Clone)]
pub struct EnforceStyling {
    /// Only the first pattern is consulted
    pub patterns: Vec<StylePattern>,
    /// Ask for an import only when the companion style file exists
    pub require_when_styles_exist: bool,
}

impl Default for EnforceStyling {
    fn default() -> Self {
        let options = EnforceStylingOptions::default();
        Self {
            patterns: options.patterns,
            require_when_styles_exist: options.require_when_styles_exist,
        }
    }
}

impl RuleMeta for EnforceStyling {
    const NAME: &'static str = "enforce-styling";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

/// Outcome of scanning the file's imports
#[derive(Debug, Default)]
struct ImportScan {
    has_correct_import: bool,
    has_incorrect_import: bool,
}

impl EnforceStyling {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: StylePattern) -> Self {
        self.patterns.push(pattern);
        self
    }

    pub fn with_require_when_styles_exist(mut self, require: bool) -> Self {
        self.require_when_styles_exist = require;
        self
    }

    /// Check one import declaration against the pattern
    fn check_import(
        &self,
        pattern: &StylePattern,
        import: &ImportDeclaration<'_>,
        scan: &mut ImportScan,
    ) -> Option<Diagnostic> {
        let source = import.source.value.as_str();
        if !source.ends_with(".css") {
            return None;
        }
        if pattern.require_relative_imports && !source.starts_with("./") {
            return None;
        }

        let description = ("componentDescription", pattern.component_description.clone());
        let expected = ("expectedImport", pattern.expected_import.clone());

        if source != pattern.expected_import {
            scan.has_incorrect_import = true;
            return Some(self.report(
                import.span,
                "incorrectSource",
                INCORRECT_SOURCE,
                &[description, expected, ("source", source.to_string())],
            ));
        }

        let namespace = match import.specifiers.as_ref().and_then(|specifiers| specifiers.first()) {
            Some(ImportDeclarationSpecifier::ImportNamespaceSpecifier(namespace)) => namespace,
            // Side-effect imports and default/named bindings
            _ => {
                scan.has_incorrect_import = true;
                return Some(self.report(
                    import.span,
                    "incorrectImportType",
                    INCORRECT_IMPORT_TYPE,
                    &[description, expected],
                ));
            }
        };

        let alias = namespace.local.name.as_str();
        if alias != STYLES_ALIAS {
            scan.has_incorrect_import = true;
            return Some(self.report(
                import.span,
                "incorrectAlias",
                INCORRECT_ALIAS,
                &[description, ("alias", alias.to_string())],
            ));
        }

        scan.has_correct_import = true;
        None
    }

    fn report(
        &self,
        span: Span,
        message_id: &'static str,
        template: &str,
        data: &[(&'static str, String)],
    ) -> Diagnostic {
        Diagnostic::from_template(Self::NAME, span, message_id, template, data)
            .with_severity(DiagnosticSeverity::Error)
    }
}

impl FromOptions for EnforceStyling {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: EnforceStylingOptions = parse_options(Self::NAME, options)?;
        Ok(Self {
            patterns: options.patterns,
            require_when_styles_exist: options.require_when_styles_exist,
        })
    }
}

impl Rule for EnforceStyling {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError> {
        let Some(pattern) = self.patterns.first() else {
            debug!(rule = Self::NAME, "no style patterns configured, skipping");
            return Ok(());
        };

        let mut scan = ImportScan::default();
        for stmt in &program.body {
            let Statement::ImportDeclaration(import) = stmt else {
                continue;
            };
            if let Some(diagnostic) = self.check_import(pattern, import, &mut scan) {
                ctx.report(diagnostic);
            }
            if scan.has_correct_import {
                break;
            }
        }

        if scan.has_correct_import || scan.has_incorrect_import {
            return Ok(());
        }

        if self.require_when_styles_exist {
            let path = ctx.path();
            let exists = ctx
                .file_system()
                .sibling_exists(path, &pattern.style_file_extension)
                .map_err(|source| LintError::Io {
                    path: path.to_path_buf(),
                    name: pattern.style_file_extension.clone(),
                    source,
                })?;
            if !exists {
                debug!(
                    rule = Self::NAME,
                    path = %ctx.filename(),
                    style_file = %pattern.style_file_extension,
                    "no companion style file, import not required"
                );
                return Ok(());
            }
        }

        let diagnostic = self.report(
            Span::new(0, 0),
            "missingImport",
            MISSING_IMPORT,
            &[
                ("componentDescription", pattern.component_description.clone()),
                ("expectedImport", pattern.expected_import.clone()),
            ],
        );
        ctx.report(diagnostic);
        Ok(())
    }
}
