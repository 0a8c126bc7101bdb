//! enforce-page-component-name
//!
//! Require `page.tsx` files to export a component named `Page`.

use oxc_ast::ast::Program;
use serde_json::Value;

use super::component_name::{ComponentNameOptions, RequiredComponent};
use crate::config::parse_options;
use crate::context::LintContext;
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const REQUIREMENT: RequiredComponent = RequiredComponent {
    rule: EnforcePageComponentName::NAME,
    name: "Page",
    file_description: "page.tsx",
};

#[derive(Debug, Clone)]
pub struct EnforcePageComponentName {
    pub files: Vec<String>,
}

impl Default for EnforcePageComponentName {
    fn default() -> Self {
        Self {
            files: vec!["page.tsx".to_string()],
        }
    }
}

impl RuleMeta for EnforcePageComponentName {
    const NAME: &'static str = "enforce-page-component-name";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl EnforcePageComponentName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

impl FromOptions for EnforcePageComponentName {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: ComponentNameOptions = parse_options(Self::NAME, options)?;
        Ok(match options.files {
            Some(files) => Self::new().with_files(files),
            None => Self::new(),
        })
    }
}

impl Rule for EnforcePageComponentName {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> RuleCategory {
        Self::CATEGORY
    }

    fn run<'a>(&self, ctx: &mut LintContext<'a>, program: &Program<'a>) -> Result<(), LintError> {
        REQUIREMENT.run(ctx, program, &self.files);
        Ok(())
    }
}
