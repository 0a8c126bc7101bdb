//! End-to-end lint tests
//!
//! These tests drive the public `lint_source` entry point the way an editor
//! integration or CLI would: a path, the file contents and a JSON config.

use std::fs;

use ui_lint::{lint_source, DiagnosticSeverity, LintConfig, LintError, LintResult};

fn config(json: &str) -> LintConfig {
    LintConfig::from_json(json).unwrap()
}

fn lint(path: &str, source: &str, json: &str) -> LintResult {
    lint_source(path, source, &config(json)).unwrap()
}

/// Apply the first fix of every diagnostic, skipping fixes that overlap
fn apply_fixes(source: &str, result: &LintResult) -> String {
    let mut fixes: Vec<_> = result
        .diagnostics
        .iter()
        .filter_map(|diagnostic| diagnostic.fixes.first())
        .collect();
    fixes.sort_by_key(|fix| fix.start);

    let mut output = String::new();
    let mut cursor = 0usize;
    for fix in fixes {
        let (start, end) = (fix.start as usize, fix.end as usize);
        if start < cursor {
            continue;
        }
        output.push_str(&source[cursor..start]);
        output.push_str(&fix.replacement);
        cursor = end;
    }
    output.push_str(&source[cursor..]);
    output
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_plugin_prefixed_rule_names() {
    let result = lint(
        "src/app/layout.tsx",
        "export default function Shell() { return null; }",
        r#"{ "rules": { "custom-rules/enforce-layout-component-name": "error" } }"#,
    );
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].rule, "enforce-layout-component-name");
    assert_eq!(result.diagnostics[0].message_id, "incorrectName");
}

#[test]
fn test_level_overrides_default_severity() {
    let source = "useEffect(() => { poll(); }, []);";
    let result = lint(
        "src/hooks/use-poll.ts",
        source,
        r#"{ "rules": { "require-useeffect-comment": "warn" } }"#,
    );
    assert_eq!(result.diagnostics[0].severity, DiagnosticSeverity::Warning);
    assert!(!result.has_errors());
    assert_eq!(result.warning_count(), 1);
}

#[test]
fn test_rule_options_are_validated() {
    let err = lint_source(
        "src/a.css.ts",
        "",
        &config(r#"{ "rules": { "max-style-name-words": ["error", { "maxWords": 0 }] } }"#),
    )
    .unwrap_err();
    assert!(matches!(err, LintError::Config(_)));
    assert!(err.to_string().contains("max-style-name-words"));

    let err = lint_source(
        "src/a.css.ts",
        "",
        &config(r#"{ "rules": { "no-child-selectors": ["error", { "strict": true }] } }"#),
    )
    .unwrap_err();
    assert!(matches!(err, LintError::Config(_)));
}

#[test]
fn test_malformed_config() {
    assert!(LintConfig::from_json(r#"{ "rules": { "prefer-array-at": "sometimes" } }"#).is_err());
    assert!(LintConfig::from_json(r#"{ "plugins": [] }"#).is_err());
}

#[test]
fn test_parse_errors_are_reported() {
    let err = lint_source("src/broken.tsx", "export const = <div", &LintConfig::default())
        .unwrap_err();
    match err {
        LintError::Parse { path, message } => {
            assert_eq!(path, "src/broken.tsx");
            assert!(!message.is_empty());
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

// ============================================================================
// Style modules
// ============================================================================

#[test]
fn test_style_module_rules_together() {
    let source = r#"import { style, createContainer } from "@vanilla-extract/css";

export const wrapper = style({ display: "flex" });
export const sidebar = createContainer();
export const cardHeaderTitleText = style({
  selectors: {
    "&:hover": { color: "red" },
    "& > span": { margin: 0 },
  },
});
"#;
    let json = r#"{ "rules": {
        "no-container-wrapper-names": "warn",
        "no-child-selectors": "error",
        "max-style-name-words": "error"
    } }"#;
    let result = lint("src/components/card/styles.css.ts", source, json);

    let ids: Vec<_> = result
        .diagnostics
        .iter()
        .map(|diagnostic| (diagnostic.rule.as_str(), diagnostic.message_id))
        .collect();
    assert_eq!(
        ids,
        [
            ("no-container-wrapper-names", "bannedExactName"),
            ("no-container-wrapper-names", "requireContainerSuffix"),
            ("max-style-name-words", "tooManyWords"),
            ("no-child-selectors", "noChildSelector"),
        ]
    );
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.warning_count(), 2);
}

#[test]
fn test_style_rules_ignore_component_files() {
    let source = r#"export const wrapper = style({ selectors: { "& p": {} } });"#;
    let json = r#"{ "rules": {
        "no-container-wrapper-names": "error",
        "no-child-selectors": "error",
        "max-style-name-words": "error"
    } }"#;
    assert!(lint("src/components/card/index.tsx", source, json).diagnostics.is_empty());
}

// ============================================================================
// Component files
// ============================================================================

#[test]
fn test_enforce_styling_probes_sibling_file() {
    let dir = tempfile::tempdir().unwrap();
    let page = dir.path().join("page.tsx");
    let source = "export default function Page() { return <main />; }";
    let json = r#"{ "rules": { "enforce-styling": ["error", { "patterns": [{
        "componentDescription": "page.tsx",
        "expectedImport": "./page.css",
        "styleFileExtension": "page.css.ts"
    }] }] } }"#;

    let result = lint(page.to_str().unwrap(), source, json);
    assert!(result.diagnostics.is_empty());

    fs::write(dir.path().join("page.css.ts"), "export const root = style({});").unwrap();
    let result = lint(page.to_str().unwrap(), source, json);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].message_id, "missingImport");
    assert_eq!(
        result.diagnostics[0].message,
        r#"page.tsx must import styles from './page.css' using 'import * as styles from "./page.css"'"#
    );
}

#[test]
fn test_enforce_styling_import_shape() {
    let dir = tempfile::tempdir().unwrap();
    let component = dir.path().join("index.tsx");
    let json = r#"{ "rules": { "enforce-styling": ["error", { "patterns": [{
        "componentDescription": "Component",
        "expectedImport": "./styles.css",
        "styleFileExtension": "styles.css.ts"
    }] }] } }"#;

    let result = lint(
        component.to_str().unwrap(),
        r#"import * as css from "./styles.css";"#,
        json,
    );
    assert_eq!(result.diagnostics[0].message_id, "incorrectAlias");

    let result = lint(
        component.to_str().unwrap(),
        r#"import * as styles from "./styles.css";"#,
        json,
    );
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_page_and_layout_names() {
    let json = r#"{ "rules": {
        "enforce-page-component-name": "error",
        "enforce-layout-component-name": "error"
    } }"#;

    assert!(lint("app/page.tsx", "export default function Page() {}", json).diagnostics.is_empty());
    assert!(lint("app/layout.tsx", "export function Layout() {}", json).diagnostics.is_empty());

    let result = lint("app/page.tsx", "const helper = 1;", json);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].message_id, "missingExport");

    // Other files are not component entry points
    assert!(lint("app/header.tsx", "export default function Header() {}", json)
        .diagnostics
        .is_empty());
}

// ============================================================================
// Array access
// ============================================================================

#[test]
fn test_prefer_array_at_fixes_reparse() {
    let source = "const first = items[0];\nconst last = items[items.length - 1];\nconst name = user?.tags?.[2];\n";
    let result = lint(
        "src/list.ts",
        source,
        r#"{ "rules": { "prefer-array-at": "warn" } }"#,
    );
    assert_eq!(result.diagnostics.len(), 3);

    let fixed = apply_fixes(source, &result);
    assert_eq!(
        fixed,
        "const first = items.at(0);\nconst last = items.at(items.length - 1);\nconst name = user?.tags?.at(2);\n"
    );

    let again = lint(
        "src/list.ts",
        &fixed,
        r#"{ "rules": { "prefer-array-at": "warn" } }"#,
    );
    assert!(again.diagnostics.is_empty());
}

#[test]
fn test_type_aware_mode_uses_declared_types() {
    let source = r#"const config = { 0: "zero" };
const grid: string[] = load();
const a = config[0];
const b = grid[index];
"#;

    let heuristic = lint(
        "src/table.ts",
        source,
        r#"{ "rules": { "prefer-array-at": "warn" } }"#,
    );
    let flagged: Vec<_> = heuristic
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.data["index"].as_str())
        .collect();
    assert_eq!(flagged, ["0"]);

    let typed = lint(
        "src/table.ts",
        source,
        r#"{ "rules": { "prefer-array-at": "warn" }, "typeAware": true }"#,
    );
    let flagged: Vec<_> = typed
        .diagnostics
        .iter()
        .map(|diagnostic| diagnostic.data["index"].as_str())
        .collect();
    assert_eq!(flagged, ["index"]);
}

// ============================================================================
// Effects
// ============================================================================

#[test]
fn test_useeffect_comment_in_component() {
    let source = r#"import { useEffect, useState } from "react";

export function Clock() {
  const [now, setNow] = useState(Date.now());
  useEffect(() => {
    // Ticks once a second so the rendered time stays current
    const id = setInterval(() => setNow(Date.now()), 1000);
    return () => clearInterval(id);
  }, []);
  useEffect(() => {
    document.title = String(now);
  }, [now]);
  return <time>{now}</time>;
}
"#;
    let result = lint(
        "src/components/clock/index.tsx",
        source,
        r#"{ "rules": { "require-useeffect-comment": "error" } }"#,
    );
    assert_eq!(result.diagnostics.len(), 1);
    let start = source.find("useEffect(() => {\n    document").unwrap() as u32;
    assert_eq!(result.diagnostics[0].start, start);
}
