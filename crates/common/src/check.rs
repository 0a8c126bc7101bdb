//! Naming checks shared by the lint rules

use crate::constants::{
    ARRAY_METHODS, ARRAY_NAME_STEMS, ARRAY_RETURNING_METHODS, OBJECT_LIKE_NAMES,
    STYLE_MODULE_SUFFIX,
};

/// Check if a name looks like a component (starts with an ASCII uppercase letter)
pub fn starts_with_uppercase(name: &str) -> bool {
    name.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Count camelCase words: a new word starts at every ASCII uppercase letter.
///
/// `root` is one word, `messageWallTitle` three, `URL` three.
pub fn count_words(name: &str) -> usize {
    let upper = name.chars().filter(char::is_ascii_uppercase).count();
    match name.chars().next() {
        None => 0,
        Some(first) if first.is_ascii_uppercase() => upper,
        Some(_) => upper + 1,
    }
}

/// Check if a file path names a vanilla-extract style module (`*.css.ts`)
pub fn is_style_module(path: &str) -> bool {
    path.ends_with(STYLE_MODULE_SUFFIX)
}

/// Guess from naming conventions whether an identifier holds an array
pub fn looks_like_array_name(name: &str) -> bool {
    let name = name.to_lowercase();
    if OBJECT_LIKE_NAMES.contains(name.as_str()) {
        return false;
    }
    ARRAY_NAME_STEMS.iter().any(|stem| name.starts_with(stem)) || name.ends_with('s')
}

/// Check if a method name belongs to `Array.prototype`
pub fn is_array_method(name: &str) -> bool {
    ARRAY_METHODS.contains(name)
}

/// Check if a method name returns an array
pub fn is_array_returning_method(name: &str) -> bool {
    ARRAY_RETURNING_METHODS.contains(name)
}

/// Replace `suffix` at the end of `name` with `replacement`
pub fn replace_suffix(name: &str, suffix: &str, replacement: &str) -> Option<String> {
    name.strip_suffix(suffix)
        .map(|stem| format!("{stem}{replacement}"))
}
