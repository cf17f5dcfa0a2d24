//! Built-in reminder templates.
//!
//! The add-reminder sheet offers these options; picking one pre-fills the
//! draft (the user only chooses the time).

use serde::{Deserialize, Serialize};

use super::model::ReminderCategory;

/// A selectable reminder template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReminderOption {
    /// The ritual this template points at.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Category the created reminder inherits.
    pub category: ReminderCategory,
}

fn option(id: &str, label: &str, category: ReminderCategory) -> ReminderOption {
    ReminderOption {
        id: id.to_string(),
        label: label.to_string(),
        category,
    }
}

/// Returns the built-in reminder templates.
pub fn builtin_reminder_options() -> Vec<ReminderOption> {
    vec![
        option("fajr", "Fajr prayer", ReminderCategory::Prayer),
        option("dhuhr", "Dhuhr prayer", ReminderCategory::Prayer),
        option("asr", "Asr prayer", ReminderCategory::Prayer),
        option("maghrib", "Maghrib prayer", ReminderCategory::Prayer),
        option("isha", "Isha prayer", ReminderCategory::Prayer),
        option("tawaf", "Tawaf", ReminderCategory::Ritual),
        option("sai", "Sa'i", ReminderCategory::Ritual),
        option("ihram", "Enter Ihram", ReminderCategory::Ritual),
        option("wuquf", "Wuquf at Arafah", ReminderCategory::Hajj),
        option("muzdalifah", "Night at Muzdalifah", ReminderCategory::Hajj),
        option("jamarat", "Stoning of the Jamarat", ReminderCategory::Hajj),
        option("custom", "Custom reminder", ReminderCategory::Custom),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_options_have_unique_ids() {
        let options = builtin_reminder_options();
        let mut ids = std::collections::HashSet::new();
        for opt in &options {
            assert!(ids.insert(opt.id.clone()), "duplicate option id: {}", opt.id);
        }
    }

    #[test]
    fn test_every_category_is_represented() {
        let options = builtin_reminder_options();
        for category in [
            ReminderCategory::Prayer,
            ReminderCategory::Ritual,
            ReminderCategory::Hajj,
            ReminderCategory::Custom,
        ] {
            assert!(options.iter().any(|o| o.category == category));
        }
    }
}
