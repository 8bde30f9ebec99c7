//! Reassembly of posted checkbox-list fields into items.

use crate::item::CheckboxListItem;
use crate::naming;

/// Rebuild the items posted under `base` from a form's decoded
/// `(name, value)` pairs.
///
/// Walks indices from 0 and stops at the first index with none of the
/// three subfields present, the way a list-model binder does. A checked
/// box posts `true` alongside its companion hidden `false`, so a row is
/// checked iff any posted `IsChecked` value for its index is `true`.
/// Missing `Text`/`Value` subfields bind as empty strings.
pub fn collect_items(base: &str, pairs: &[(String, String)]) -> Vec<CheckboxListItem> {
    let mut items = Vec::new();
    for index in 0.. {
        let checked_name = naming::child_control_name(base, index, naming::IS_CHECKED);
        let text_name = naming::child_control_name(base, index, naming::TEXT);
        let value_name = naming::child_control_name(base, index, naming::VALUE);

        let present = pairs
            .iter()
            .any(|(name, _)| name == &checked_name || name == &text_name || name == &value_name);
        if !present {
            break;
        }

        let is_checked = pairs
            .iter()
            .any(|(name, value)| name == &checked_name && value == "true");
        items.push(CheckboxListItem {
            text: first_value(pairs, &text_name).unwrap_or_default(),
            value: first_value(pairs, &value_name).unwrap_or_default(),
            is_checked,
        });
    }
    items
}

fn first_value(pairs: &[(String, String)], name: &str) -> Option<String> {
    pairs
        .iter()
        .find(|(candidate, _)| candidate == name)
        .map(|(_, value)| value.clone())
}
