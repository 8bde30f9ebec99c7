//! Field-name construction and id sanitization.
//!
//! Form fields address list elements with the indexed path form
//! `base[i].Subfield`, which the host's model binder reads back into a
//! list. Element ids are the field name with every character the HTML
//! id grammar rejects replaced by `_`.

/// Subfield carrying the checkbox state of a list row.
pub const IS_CHECKED: &str = "IsChecked";
/// Subfield carrying the row's display text.
pub const TEXT: &str = "Text";
/// Subfield carrying the row's value.
pub const VALUE: &str = "Value";

/// Field name of one subfield of the list element at `index`.
pub fn child_control_name(parent: &str, index: usize, child: &str) -> String {
    format!("{}[{}].{}", parent, index, child)
}

/// Derive an element id from a field name.
///
/// Letters, digits, `-`, `_` and `:` pass through; everything else
/// (including the `[`, `]` and `.` of indexed paths) becomes `_`.
pub fn sanitize_id(name: &str) -> String {
    name.chars()
        .map(|ch| {
            if ch.is_ascii_alphanumeric() || matches!(ch, '-' | '_' | ':') {
                ch
            } else {
                '_'
            }
        })
        .collect()
}

/// Translates a model expression into its full form field name.
///
/// Passed explicitly into the `*_for` render entry points; there is no
/// ambient registry to resolve it from.
pub trait FieldNameResolver {
    fn field_name(&self, expression: &str) -> String;
}

/// Naming scope for the template being rendered.
///
/// Carries the host template's field prefix, if any, and prepends it to
/// field names the way the host's template info does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamingScope {
    prefix: Option<String>,
}

impl NamingScope {
    /// Scope with no prefix: field names pass through unchanged.
    pub fn root() -> Self {
        Self::default()
    }

    /// Scope rendering inside a template bound to `prefix`.
    pub fn prefixed(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }

    /// Full field name for `name` under this scope.
    ///
    /// Names opening with an indexer attach directly (`Items[0]`, not
    /// `Items.[0]`); an empty `name` yields the prefix itself.
    pub fn full_field_name(&self, name: &str) -> String {
        match self.prefix.as_deref() {
            None | Some("") => name.to_string(),
            Some(prefix) if name.is_empty() => prefix.to_string(),
            Some(prefix) if name.starts_with('[') => format!("{}{}", prefix, name),
            Some(prefix) => format!("{}.{}", prefix, name),
        }
    }
}

impl FieldNameResolver for NamingScope {
    fn field_name(&self, expression: &str) -> String {
        self.full_field_name(expression)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_names_are_indexed_paths() {
        assert_eq!(child_control_name("Colors", 0, IS_CHECKED), "Colors[0].IsChecked");
        assert_eq!(child_control_name("Colors", 12, TEXT), "Colors[12].Text");
        assert_eq!(child_control_name("Form.Colors", 1, VALUE), "Form.Colors[1].Value");
    }

    #[test]
    fn sanitize_replaces_path_punctuation() {
        assert_eq!(sanitize_id("Colors"), "Colors");
        assert_eq!(sanitize_id("Colors[0].IsChecked"), "Colors_0__IsChecked");
        assert_eq!(sanitize_id("Form.Colors"), "Form_Colors");
        assert_eq!(sanitize_id(""), "");
    }

    #[test]
    fn root_scope_passes_names_through() {
        assert_eq!(NamingScope::root().full_field_name("Colors"), "Colors");
        assert_eq!(NamingScope::root().full_field_name(""), "");
    }

    #[test]
    fn prefixed_scope_joins_with_dot() {
        let scope = NamingScope::prefixed("Form");
        assert_eq!(scope.full_field_name("Colors"), "Form.Colors");
        assert_eq!(scope.full_field_name(""), "Form");
        assert_eq!(scope.full_field_name("[0].Name"), "Form[0].Name");
    }

    #[test]
    fn empty_prefix_behaves_like_root() {
        let scope = NamingScope::prefixed("");
        assert_eq!(scope.full_field_name("Colors"), "Colors");
    }
}
