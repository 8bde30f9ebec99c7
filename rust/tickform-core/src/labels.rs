//! Display-name resolution for enum members.
//!
//! Labels come from compile-time `strum` properties instead of runtime
//! type inspection: a member may carry `display` and `description`
//! properties, and resolution falls through to the identifier name.

use std::fmt;

use strum::EnumProperty;

/// Human-readable label for an enum member.
///
/// Resolution order: the member's `display` property, else its
/// `description` property, else its `Display` form (the identifier
/// name). Total over every member of any enum; never fails.
pub fn display_name<T: EnumProperty + fmt::Display>(value: &T) -> String {
    if let Some(name) = value.get_str("display") {
        return name.to_string();
    }
    if let Some(description) = value.get_str("description") {
        return description.to_string();
    }
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum_macros::{Display, EnumProperty};

    #[derive(Debug, Clone, Copy, Display, EnumProperty)]
    enum Notification {
        #[strum(props(display = "Email me", description = "electronic mail"))]
        Email,
        #[strum(props(description = "short message service"))]
        Sms,
        Push,
    }

    #[test]
    fn display_property_wins_over_description() {
        assert_eq!(display_name(&Notification::Email), "Email me");
    }

    #[test]
    fn description_used_when_no_display() {
        assert_eq!(display_name(&Notification::Sms), "short message service");
    }

    #[test]
    fn falls_back_to_identifier_name() {
        assert_eq!(display_name(&Notification::Push), "Push");
    }
}
