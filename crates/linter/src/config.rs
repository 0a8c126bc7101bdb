//! JSON lint configuration
//!
//! The shape follows ESLint's `rules` block:
//!
//! ```json
//! {
//!   "rules": {
//!     "custom-rules/require-useeffect-comment": "error",
//!     "custom-rules/max-style-name-words": ["error", { "maxWords": 4 }]
//!   },
//!   "typeAware": true
//! }
//! ```

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::diagnostic::DiagnosticSeverity;
use crate::error::ConfigError;

/// Top-level lint configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LintConfig {
    /// Rule name → level, or `[level, options]`
    #[serde(default)]
    pub rules: IndexMap<String, RuleSetting>,
    /// Resolve static types for type-aware rules
    #[serde(default)]
    pub type_aware: bool,
}

impl LintConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Configured level and options of one rule
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RuleSetting {
    Level(RuleLevel),
    /// `["error"]`
    LevelInArray([RuleLevel; 1]),
    LevelWithOptions(RuleLevel, Value),
}

impl RuleSetting {
    pub fn level(&self) -> RuleLevel {
        match self {
            Self::Level(level) | Self::LevelInArray([level]) | Self::LevelWithOptions(level, _) => {
                *level
            }
        }
    }

    pub fn options(&self) -> Option<&Value> {
        match self {
            Self::Level(_) | Self::LevelInArray(_) => None,
            Self::LevelWithOptions(_, options) => Some(options),
        }
    }
}

/// Rule level, written as a name or as ESLint's `0` / `1` / `2`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "LevelRepr")]
pub enum RuleLevel {
    Off,
    Warn,
    Error,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LevelRepr {
    Name(String),
    Number(u64),
}

impl TryFrom<LevelRepr> for RuleLevel {
    type Error = String;

    fn try_from(repr: LevelRepr) -> Result<Self, String> {
        match repr {
            LevelRepr::Name(name) => match name.as_str() {
                "off" => Ok(Self::Off),
                "warn" => Ok(Self::Warn),
                "error" => Ok(Self::Error),
                _ => Err(format!("unknown rule level `{name}`")),
            },
            LevelRepr::Number(0) => Ok(Self::Off),
            LevelRepr::Number(1) => Ok(Self::Warn),
            LevelRepr::Number(2) => Ok(Self::Error),
            LevelRepr::Number(n) => Err(format!("unknown rule level `{n}`")),
        }
    }
}

impl RuleLevel {
    /// Severity forced onto diagnostics, `None` when the rule is off
    pub fn severity(self) -> Option<DiagnosticSeverity> {
        match self {
            Self::Off => None,
            Self::Warn => Some(DiagnosticSeverity::Warning),
            Self::Error => Some(DiagnosticSeverity::Error),
        }
    }
}

/// Deserialize a rule's options, falling back to defaults when none are given
pub(crate) fn parse_options<T>(rule: &'static str, options: Option<&Value>) -> Result<T, ConfigError>
where
    T: DeserializeOwned + Default,
{
    match options {
        None | Some(Value::Null) => Ok(T::default()),
        Some(value) => serde_json::from_value(value.clone())
            .map_err(|source| ConfigError::InvalidOptions { rule, source }),
    }
}

/// Reject options for rules that take none
pub(crate) fn reject_options(rule: &'static str, options: Option<&Value>) -> Result<(), ConfigError> {
    match options {
        None | Some(Value::Null) => Ok(()),
        Some(_) => Err(ConfigError::InvalidValue {
            rule,
            message: "rule takes no options".to_string(),
        }),
    }
}
