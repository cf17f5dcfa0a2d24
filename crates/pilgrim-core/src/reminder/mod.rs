//! Reminder domain module.
//!
//! - `model`: the reminder record and draft (`Reminder`, `ReminderDraft`,
//!   `ReminderCategory`)
//! - `preset`: built-in templates (`ReminderOption`)

mod model;
mod preset;

pub use model::{Reminder, ReminderCategory, ReminderDraft};
pub use preset::{ReminderOption, builtin_reminder_options};
