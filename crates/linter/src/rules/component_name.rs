//! Export scan shared by `enforce-layout-component-name` and
//! `enforce-page-component-name`

use oxc_ast::ast::{Declaration, ExportDefaultDeclarationKind, Program, Statement};
use oxc_span::Span;
use serde::Deserialize;
use tracing::debug;

use common::{module_export_name, starts_with_uppercase};

use crate::context::LintContext;
use crate::diagnostic::{Diagnostic, DiagnosticSeverity};

/// Options accepted by both component-name rules
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct ComponentNameOptions {
    /// File basenames the rule applies to
    pub files: Option<Vec<String>>,
}

/// What a component-name rule requires of its files
#[derive(Debug, Clone, Copy)]
pub(crate) struct RequiredComponent {
    pub rule: &'static str,
    /// Export name the file must provide (`Layout`)
    pub name: &'static str,
    /// File description used in messages (`layout.tsx`)
    pub file_description: &'static str,
}

/// Per-file bookkeeping: whether the required export was seen and every
/// exported name in source order
#[derive(Debug, Default)]
struct ExportScan {
    found: bool,
    exported_names: Vec<String>,
}

impl ExportScan {
    fn record(&mut self, name: &str, required: &str) {
        self.exported_names.push(name.to_string());
        if name == required {
            self.found = true;
        }
    }
}

impl RequiredComponent {
    pub fn run(&self, ctx: &mut LintContext<'_>, program: &Program<'_>, files: &[String]) {
        if !files.iter().any(|file| ctx.file_name_is(file)) {
            debug!(rule = self.rule, path = %ctx.filename(), "not a component file, skipping");
            return;
        }

        let mut scan = ExportScan::default();
        for stmt in &program.body {
            self.scan_statement(stmt, &mut scan);
        }

        if let Some(diagnostic) = self.finish(&scan) {
            ctx.report(diagnostic);
        }
    }

    fn scan_statement(&self, stmt: &Statement<'_>, scan: &mut ExportScan) {
        match stmt {
            Statement::ExportDefaultDeclaration(export) => match &export.declaration {
                ExportDefaultDeclarationKind::FunctionDeclaration(func) => {
                    if let Some(id) = &func.id {
                        scan.record(&id.name, self.name);
                    }
                }
                ExportDefaultDeclarationKind::Identifier(ident) => {
                    scan.record(&ident.name, self.name);
                }
                _ => {}
            },
            Statement::ExportNamedDeclaration(export) => {
                match &export.declaration {
                    Some(Declaration::FunctionDeclaration(func)) => {
                        if let Some(id) = &func.id {
                            scan.record(&id.name, self.name);
                        }
                    }
                    Some(Declaration::VariableDeclaration(decl)) => {
                        for declarator in &decl.declarations {
                            if let Some(id) = declarator.id.get_binding_identifier() {
                                scan.record(&id.name, self.name);
                            }
                        }
                    }
                    _ => {}
                }

                for specifier in &export.specifiers {
                    let exported = module_export_name(&specifier.exported);
                    let local = module_export_name(&specifier.local);
                    if exported == Some(self.name) {
                        scan.found = true;
                    } else if let Some(local) = local {
                        // `export { A }`, `export { A as B }` and `export { A as default }`
                        // all contribute the local name
                        scan.record(local, self.name);
                    }
                }
            }
            _ => {}
        }
    }

    fn finish(&self, scan: &ExportScan) -> Option<Diagnostic> {
        if scan.found {
            return None;
        }

        let file_start = Span::new(0, 0);
        let candidate = scan
            .exported_names
            .iter()
            .find(|name| starts_with_uppercase(name));

        let diagnostic = match candidate {
            Some(name) => Diagnostic::from_template(
                self.rule,
                file_start,
                "incorrectName",
                &format!(
                    "{} must export a component named '{}' (found '{{{{ name }}}}')",
                    self.file_description, self.name
                ),
                &[("name", name.clone())],
            ),
            None => Diagnostic::from_template(
                self.rule,
                file_start,
                "missingExport",
                &format!(
                    "{} must export a component named '{}'",
                    self.file_description, self.name
                ),
                &[],
            ),
        };
        Some(diagnostic.with_severity(DiagnosticSeverity::Error))
    }
}
