//! Static word lists shared by the lint rules

use phf::phf_set;

/// File suffix of vanilla-extract style definition modules
pub const STYLE_MODULE_SUFFIX: &str = ".css.ts";

/// Module that provides `style` and `createContainer`
pub const VANILLA_EXTRACT_MODULE: &str = "@vanilla-extract/css";

/// Style factory whose exports are style class names
pub const STYLE_FACTORY: &str = "style";

/// Container factory whose exports must end with `Container`
pub const CONTAINER_FACTORY: &str = "createContainer";

/// Array methods; a member access through one of these suggests an array receiver
pub static ARRAY_METHODS: phf::Set<&'static str> = phf_set! {
    "filter",
    "map",
    "reduce",
    "sort",
    "slice",
    "splice",
    "concat",
    "reverse",
    "join",
    "push",
    "pop",
    "shift",
    "unshift",
    "indexOf",
    "lastIndexOf",
    "find",
    "findIndex",
    "some",
    "every",
    "forEach",
    "includes",
    "flat",
    "flatMap",
};

/// Methods whose result is an array (or treated as one when guessing)
pub static ARRAY_RETURNING_METHODS: phf::Set<&'static str> = phf_set! {
    "filter",
    "map",
    "slice",
    "concat",
    "sort",
    "reverse",
    "flat",
    "flatMap",
    "splice",
    "split",
};

/// Array-returning methods trusted on top of resolved type information.
/// `split` is excluded because a resolved type already covers strings.
pub static TYPED_ARRAY_RETURNING_METHODS: phf::Set<&'static str> = phf_set! {
    "filter",
    "map",
    "slice",
    "concat",
    "sort",
    "reverse",
    "flat",
    "flatMap",
    "splice",
};

/// Identifier stems that name collections
pub static ARRAY_NAME_STEMS: phf::Set<&'static str> = phf_set! {
    "arr",
    "array",
    "list",
    "items",
    "elements",
    "data",
    "rows",
    "cols",
    "values",
    "entries",
};

/// Lowercased identifiers that name objects even when they look plural
pub static OBJECT_LIKE_NAMES: phf::Set<&'static str> = phf_set! {
    "obj",
    "object",
    "config",
    "settings",
    "options",
    "props",
    "attrs",
    "style",
    "styles",
    "class",
    "this",
    "window",
    "document",
    "global",
    "process",
    "console",
};

/// Names banned outright in style modules
pub static BANNED_EXACT_NAMES: phf::Set<&'static str> = phf_set! {
    "container",
    "wrapper",
};

/// Suffixes banned in style modules, checked in order
pub const BANNED_SUFFIXES: &[&str] = &["Container", "Wrapper"];
