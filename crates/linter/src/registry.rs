//! Rule registry: the name → rule mapping consumed by lint configuration

use serde_json::Value;

use crate::config::RuleLevel;
use crate::error::ConfigError;
use crate::rules::{
    EnforceLayoutComponentName, EnforcePageComponentName, EnforceStyling, MaxStyleNameWords,
    NoChildSelectors, NoContainerWrapperNames, PreferArrayAt, RequireUseeffectComment,
};
use crate::{Rule, RuleCategory, RuleMeta};

/// Build a rule from its (optional) JSON options
pub type RuleFactory = fn(Option<&Value>) -> Result<Box<dyn Rule>, ConfigError>;

/// Rules constructible from configuration options
pub trait FromOptions: Sized {
    fn from_options(options: Option<&Value>) -> Result<Self, ConfigError>;
}

/// One registered rule
#[derive(Debug, Clone, Copy)]
pub struct RuleEntry {
    pub name: &'static str,
    pub category: RuleCategory,
    /// Level used when the rule is enabled without an explicit level
    pub default_level: RuleLevel,
    factory: RuleFactory,
}

impl RuleEntry {
    const fn of<R>(default_level: RuleLevel) -> Self
    where
        R: Rule + RuleMeta + FromOptions + 'static,
    {
        Self {
            name: R::NAME,
            category: R::CATEGORY,
            default_level,
            factory: build::<R>,
        }
    }

    /// Instantiate the rule with the given options
    pub fn create(&self, options: Option<&Value>) -> Result<Box<dyn Rule>, ConfigError> {
        (self.factory)(options)
    }
}

fn build<R>(options: Option<&Value>) -> Result<Box<dyn Rule>, ConfigError>
where
    R: Rule + FromOptions + 'static,
{
    Ok(Box::new(R::from_options(options)?))
}

/// Every rule this crate provides
pub static RULES: &[RuleEntry] = &[
    RuleEntry::of::<NoContainerWrapperNames>(RuleLevel::Warn),
    RuleEntry::of::<NoChildSelectors>(RuleLevel::Error),
    RuleEntry::of::<MaxStyleNameWords>(RuleLevel::Error),
    RuleEntry::of::<EnforceStyling>(RuleLevel::Error),
    RuleEntry::of::<EnforceLayoutComponentName>(RuleLevel::Error),
    RuleEntry::of::<EnforcePageComponentName>(RuleLevel::Error),
    RuleEntry::of::<PreferArrayAt>(RuleLevel::Warn),
    RuleEntry::of::<RequireUseeffectComment>(RuleLevel::Error),
];

/// Look up a rule by name; a plugin prefix (`custom-rules/`) is ignored
pub fn find_rule(name: &str) -> Option<&'static RuleEntry> {
    let bare = name.rsplit_once('/').map_or(name, |(_, rule)| rule);
    RULES.iter().find(|entry| entry.name == bare)
}

/// Names of all registered rules, in registration order
pub fn builtin_rule_names() -> impl Iterator<Item = &'static str> {
    RULES.iter().map(|entry| entry.name)
}
