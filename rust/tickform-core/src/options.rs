//! Enum option descriptors for checkbox groups.

use std::fmt;

use strum::{EnumProperty, IntoEnumIterator};

use crate::labels::display_name;

/// One member of an enumerated type, rendered as a checkbox sharing a
/// group name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumOption {
    pub label: String,
    pub value: i64,
    pub selected: bool,
}

/// Implemented by enums renderable as a checkbox group.
///
/// Deriving `EnumIter`, `EnumProperty` and `Display` from `strum`
/// covers iteration, label metadata and the canonical string form; the
/// enum supplies its underlying value itself, usually `*self as i64`.
pub trait CheckboxEnum: IntoEnumIterator + EnumProperty + fmt::Display + Copy {
    /// Underlying numeric value, rendered into the checkbox `value`
    /// attribute.
    fn underlying(&self) -> i64;
}

/// Materialize the full option list for `T`, in declaration order.
///
/// Every declared member appears exactly once regardless of selection
/// state. A member is selected iff its canonical string form equals
/// that of some element of `selected`; matching is by string form, not
/// by value.
pub fn enum_options<T: CheckboxEnum>(selected: &[T]) -> Vec<EnumOption> {
    let selected_forms: Vec<String> = selected.iter().map(|value| value.to_string()).collect();
    T::iter()
        .map(|member| {
            let form = member.to_string();
            EnumOption {
                label: display_name(&member),
                value: member.underlying(),
                selected: selected_forms.iter().any(|chosen| *chosen == form),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum_macros::{Display, EnumIter, EnumProperty};

    #[derive(Debug, Clone, Copy, Display, EnumIter, EnumProperty)]
    enum Weekday {
        #[strum(props(display = "Monday"))]
        Mon = 1,
        #[strum(props(display = "Tuesday"))]
        Tue = 2,
        Wed = 3,
    }

    impl CheckboxEnum for Weekday {
        fn underlying(&self) -> i64 {
            *self as i64
        }
    }

    #[test]
    fn options_cover_all_members_in_declaration_order() {
        let options = enum_options::<Weekday>(&[]);
        let values: Vec<i64> = options.iter().map(|o| o.value).collect();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(options.iter().all(|o| !o.selected));
    }

    #[test]
    fn selection_matches_by_string_form() {
        let options = enum_options(&[Weekday::Tue]);
        let selected: Vec<i64> = options.iter().filter(|o| o.selected).map(|o| o.value).collect();
        assert_eq!(selected, vec![2]);
    }

    #[test]
    fn all_selected_when_every_member_supplied() {
        let options = enum_options(&[Weekday::Mon, Weekday::Tue, Weekday::Wed]);
        assert!(options.iter().all(|o| o.selected));
    }

    #[test]
    fn labels_resolve_through_metadata() {
        let options = enum_options::<Weekday>(&[]);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Monday", "Tuesday", "Wed"]);
    }

    #[test]
    fn duplicate_selections_do_not_duplicate_options() {
        let options = enum_options(&[Weekday::Mon, Weekday::Mon]);
        assert_eq!(options.len(), 3);
        assert_eq!(options.iter().filter(|o| o.selected).count(), 1);
    }
}
