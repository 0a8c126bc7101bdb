//! Integration tests for ui-linter rules

use std::io;
use std::path::Path;

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_semantic::SemanticBuilder;
use oxc_span::SourceType;

use ui_linter::fs::FileSystem;
use ui_linter::rules::{
    EnforceLayoutComponentName, EnforceStyling, MaxStyleNameWords, NoChildSelectors,
    NoContainerWrapperNames, PreferArrayAt, RequireUseeffectComment, StylePattern,
};
use ui_linter::{
    builtin_rule_names, find_rule, DiagnosticSeverity, LintConfig, LintContext, LintError,
    LintResult, LintRunner, Rule, RuleLevel, RulesConfig, SemanticTypeProvider, RULES,
};

fn parse<'a>(allocator: &'a Allocator, source: &'a str, source_type: SourceType) -> oxc_ast::ast::Program<'a> {
    let ret = Parser::new(allocator, source, source_type).parse();
    assert!(ret.errors.is_empty(), "parse errors: {:?}", ret.errors);
    ret.program
}

fn run(config: &RulesConfig, path: &str, source: &str) -> LintResult {
    let allocator = Allocator::default();
    let path = Path::new(path);
    let source_type = SourceType::from_path(path).unwrap();
    let program = parse(&allocator, source, source_type);
    let ctx = LintContext::new(source, path);
    LintRunner::new(ctx, config).run(&program).unwrap()
}

/// Every sibling probe answers `true`
struct StylesEverywhere;

impl FileSystem for StylesEverywhere {
    fn sibling_exists(&self, _file: &Path, _name: &str) -> io::Result<bool> {
        Ok(true)
    }
}

struct PermissionDenied;

impl FileSystem for PermissionDenied {
    fn sibling_exists(&self, _file: &Path, _name: &str) -> io::Result<bool> {
        Err(io::Error::from(io::ErrorKind::PermissionDenied))
    }
}

#[test]
fn test_registry_matches_rule_names() {
    for entry in RULES {
        let rule = entry.create(None).unwrap();
        assert_eq!(rule.name(), entry.name);
        assert_eq!(rule.category(), entry.category);
    }
    assert_eq!(builtin_rule_names().count(), 8);
    assert_eq!(
        find_rule("custom-rules/prefer-array-at").map(|entry| entry.default_level),
        Some(RuleLevel::Warn)
    );
    assert!(find_rule("no-console").is_none());
}

#[test]
fn test_config_round_trip_through_runner() {
    let config = LintConfig::from_json(
        r#"{
            "rules": {
                "custom-rules/max-style-name-words": ["error", { "maxWords": 2 }],
                "custom-rules/no-container-wrapper-names": "off",
                "custom-rules/prefer-array-at": "error"
            }
        }"#,
    )
    .unwrap();
    let rules = RulesConfig::from_config(&config).unwrap();
    assert_eq!(
        rules.rule_names().collect::<Vec<_>>(),
        ["max-style-name-words", "prefer-array-at"]
    );

    let source = r#"export const cardTitle = style({});
export const cardTitleText = style({});
export const wrapper = style({});
const first = tokens[0];
"#;
    let result = run(&rules, "/components/card/styles.css.ts", source);
    let rules_hit: Vec<_> = result.diagnostics.iter().map(|d| d.rule.as_str()).collect();
    assert_eq!(rules_hit, ["max-style-name-words", "prefer-array-at"]);
    assert!(result
        .diagnostics
        .iter()
        .all(|diagnostic| diagnostic.severity == DiagnosticSeverity::Error));
    assert_eq!(result.by_rule("prefer-array-at").count(), 1);
}

#[test]
fn test_builder_config_keeps_rule_severities() {
    let rules = RulesConfig::none()
        .with_rule(NoContainerWrapperNames::new())
        .with_rule(NoChildSelectors::new())
        .with_rule(MaxStyleNameWords::new());

    let source = r#"export const textWrapper = style({ selectors: { "& li": {} } });"#;
    let result = run(&rules, "/components/list/styles.css.ts", source);

    assert_eq!(result.diagnostics.len(), 2);
    assert_eq!(result.warning_count(), 1);
    assert_eq!(result.error_count(), 1);
    assert_eq!(result.diagnostics[0].data["suggestion"], "textRoot");
}

#[test]
fn test_rules_only_touch_their_files() {
    let rules = RulesConfig::none()
        .with_rule(EnforceLayoutComponentName::new())
        .with_rule(NoChildSelectors::new());
    let source = r#"export const Header = style({ selectors: { "& p": {} } });"#;
    assert!(run(&rules, "/app/header.tsx", source).diagnostics.is_empty());
}

#[test]
fn test_type_aware_runner() {
    let source = r#"const lookup: Record<number, string> = {};
const tags = ["a", "b"];
const label = lookup[0];
const head = tags[0];
"#;
    let path = Path::new("/src/tags.ts");
    let allocator = Allocator::default();
    let program = parse(&allocator, source, SourceType::ts());
    let semantic = SemanticBuilder::new().build(&program).semantic;
    let provider = SemanticTypeProvider::new(&semantic, source);

    let rules = RulesConfig::none().with_rule(PreferArrayAt::new()).with_type_aware(true);
    let ctx = LintContext::new(source, path).with_type_provider(&provider);
    let result = LintRunner::new(ctx, &rules).run(&program).unwrap();

    assert_eq!(result.diagnostics.len(), 1);
    let start = source.find("tags[0]").unwrap() as u32;
    assert_eq!(result.diagnostics[0].start, start);
    assert_eq!(result.diagnostics[0].fixes[0].replacement, "tags.at(0)");
}

#[test]
fn test_enforce_styling_with_injected_file_system() {
    let rule = EnforceStyling::new().with_pattern(StylePattern::new(
        "Component",
        "./styles.css",
        "styles.css.ts",
    ));
    let source = "export function Card() { return <div />; }";
    let path = Path::new("/components/card/index.tsx");
    let allocator = Allocator::default();
    let program = parse(&allocator, source, SourceType::tsx());

    let mut ctx = LintContext::new(source, path).with_file_system(&StylesEverywhere);
    rule.run(&mut ctx, &program).unwrap();
    let diagnostics = ctx.into_diagnostics();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].message_id, "missingImport");

    let mut ctx = LintContext::new(source, path).with_file_system(&PermissionDenied);
    let err = rule.run(&mut ctx, &program).unwrap_err();
    assert!(matches!(err, LintError::Io { ref name, .. } if name == "styles.css.ts"));
}

#[test]
fn test_enforce_styling_against_real_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("styles.css.ts"), "").unwrap();
    let component = dir.path().join("index.tsx");

    let rules = RulesConfig::none().with_rule(EnforceStyling::new().with_pattern(StylePattern::new(
        "Component",
        "./styles.css",
        "styles.css.ts",
    )));
    let result = run(&rules, component.to_str().unwrap(), "export const Card = () => null;");
    assert_eq!(result.diagnostics.len(), 1);

    let result = run(
        &rules,
        component.to_str().unwrap(),
        r#"import * as styles from "./styles.css";
export const Card = () => null;"#,
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_effects_in_nested_components() {
    let rules = RulesConfig::none().with_rule(RequireUseeffectComment::new());
    let source = r#"export function List({ items }) {
  return items.map((item) => {
    function Row() {
      React.useEffect(() => {
        track(item.id);
      }, []);
      return <li />;
    }
    return <Row key={item.id} />;
  });
}
"#;
    let result = run(&rules, "/components/list/index.tsx", source);
    assert_eq!(result.diagnostics.len(), 1);
    assert!(result.has_errors());
}
