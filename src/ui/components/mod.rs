//! Reusable line-level widgets used by the page sections.

pub mod input_field;
pub mod project_card;
pub mod selector;
