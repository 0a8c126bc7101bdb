//! enforce-layout-component-name
//!
//! Require `layout.tsx` files to export a component named `Layout`.

use oxc_ast::ast::Program;
use serde_json::Value;

use super::component_name::{ComponentNameOptions, RequiredComponent};
use crate::config::parse_options;
use crate::context::LintContext;
use crate::error::{ConfigError, LintError};
use crate::registry::FromOptions;
use crate::{Rule, RuleCategory, RuleMeta};

const REQUIREMENT: RequiredComponent = RequiredComponent {
    rule: EnforceLayoutComponentName::NAME,
    name: "Layout",
    file_description: "layout.tsx",
};

#[derive(Debug, Clone)]
pub struct EnforceLayoutComponentName {
    /// Basenames of the files this rule checks
    pub files: Vec<String>,
}

impl Default for EnforceLayoutComponentName {
    fn default() -> Self {
        Self {
            files: vec!["layout.tsx".to_string()],
        }
    }
}

impl RuleMeta for EnforceLayoutComponentName {
    const NAME: &'static str = "enforce-layout-component-name";
    const CATEGORY: RuleCategory = RuleCategory::Correctness;
}

impl EnforceLayoutComponentName {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }
}

impl FromOptions for EnforceLayoutComponentName {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError> {
        let options: ComponentNameOptions = parse_options(Self::NAME, options)?;
        Ok(match options.files {
            Some(files) => Self::new().with_files(files),
            None => Self::new(),
        })
    }
}

impl Rule for EnforceLayoutComponentName {
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
