//! Project convention lint rules
//!
//! One module per rule; the two component-name rules share their export scan.

mod component_name;
pub mod enforce_layout_component_name;
pub mod enforce_page_component_name;
pub mod enforce_styling;
pub mod max_style_name_words;
pub mod no_child_selectors;
pub mod no_container_wrapper_names;
pub mod prefer_array_at;
pub mod require_useeffect_comment;

// Re-export rule structs
pub use enforce_layout_component_name::EnforceLayoutComponentName;
pub use enforce_page_component_name::EnforcePageComponentName;
pub use enforce_styling::{EnforceStyling, StylePattern};
pub use max_style_name_words::MaxStyleNameWords;
pub use no_child_selectors::NoChildSelectors;
pub use no_container_wrapper_names::NoContainerWrapperNames;
pub use prefer_array_at::{ArrayAccessMode, PreferArrayAt};
pub use require_useeffect_comment::RequireUseeffectComment;
