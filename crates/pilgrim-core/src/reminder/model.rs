//! Reminder domain models.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The kind of event a reminder points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ReminderCategory {
    /// One of the five daily prayers.
    Prayer,
    /// An Umrah/general ritual (Tawaf, Sa'i, ...).
    Ritual,
    /// A Hajj-day event (Arafah, Muzdalifah, Jamarat, ...).
    Hajj,
    /// A user-defined reminder.
    Custom,
}

/// A single user-created reminder.
///
/// Reminders are created from a template or free-form, toggled in place,
/// and deleted by id. Ids are generated at creation and never reused.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    /// Opaque unique identifier (`rem-<uuid>`).
    pub id: String,
    /// The ritual this reminder refers to (foreign key into the ritual
    /// dataset; `custom` for free-form reminders).
    pub ritual_id: String,
    /// Display label.
    pub label: String,
    /// Time of day, "HH:MM".
    pub time: String,
    /// Category used for grouping and badge color.
    pub category: ReminderCategory,
    /// Whether the reminder is active.
    pub enabled: bool,
    /// Timestamp when the reminder was created (ISO 8601 format).
    pub created_at: String,
}

/// The caller-supplied part of a reminder; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReminderDraft {
    pub ritual_id: String,
    pub label: String,
    pub time: String,
    pub category: ReminderCategory,
    pub enabled: bool,
}

impl ReminderDraft {
    pub fn new(
        ritual_id: impl Into<String>,
        label: impl Into<String>,
        time: impl Into<String>,
        category: ReminderCategory,
    ) -> Self {
        Self {
            ritual_id: ritual_id.into(),
            label: label.into(),
            time: time.into(),
            category,
            enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_defaults_to_enabled() {
        let draft = ReminderDraft::new("tawaf", "Tawaf al-Qudum", "06:00", ReminderCategory::Ritual);
        assert!(draft.enabled);
    }

    #[test]
    fn test_category_display_is_snake_case() {
        assert_eq!(ReminderCategory::Prayer.to_string(), "prayer");
        assert_eq!(ReminderCategory::Hajj.to_string(), "hajj");
    }
}
