//! The checkbox-list row type.

use serde::{Deserialize, Serialize};

/// One row of a checkbox list bound to a list-shaped model property.
///
/// `text` and `value` ride along in hidden fields so the row survives a
/// form post intact; `is_checked` maps to the checkbox state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckboxListItem {
    pub text: String,
    pub value: String,
    pub is_checked: bool,
}

impl CheckboxListItem {
    pub fn new(text: impl Into<String>, value: impl Into<String>, is_checked: bool) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            is_checked,
        }
    }

    pub fn checked(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(text, value, true)
    }

    pub fn unchecked(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(text, value, false)
    }
}
