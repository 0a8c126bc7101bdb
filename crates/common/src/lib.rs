pub mod check;
pub mod constants;
pub mod expression;

pub use check::*;
pub use constants::*;
pub use expression::{
    callee_name, format_js_number, member_property_name, module_export_name, source_text,
    strip_parens,
};
