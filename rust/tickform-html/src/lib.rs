//! Tickform HTML
//!
//! Markup generation for checkbox-list form helpers: a minimal tag
//! builder plus the renderer entry points over `tickform-core`'s model.

pub mod attrs;
pub mod markup;
pub mod render;
pub mod tag;

pub use attrs::Attributes;
pub use markup::Markup;
pub use render::{
    checkbox_list, checkbox_list_for, enum_checkbox_list, enum_checkbox_list_for,
    enum_checkbox_list_from_options,
};
