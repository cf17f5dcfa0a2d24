//! Conversation message types.
//!
//! This module contains types for representing messages in the guide
//! conversation, including roles, optional navigation actions, and the
//! draft type the store completes into a full message.

use serde::{Deserialize, Serialize};

/// Represents the role of a message in the guide conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    /// Message typed by the pilgrim.
    User,
    /// Message produced by the guide assistant.
    Assistant,
}

/// A navigation hint an assistant reply can carry.
///
/// Actions are rendered as a tappable chip under the reply. `route` points
/// at a content browser (rituals, audio, tours, map); `location_id` points
/// into the location dataset for the spatial scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageAction {
    /// Display label for the chip.
    pub label: String,
    /// Target route, if the action navigates to a content browser.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    /// Target location id, if the action focuses the scene.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location_id: Option<String>,
}

/// A single message in the conversation history.
///
/// Messages are created only by the store (which assigns `id` and
/// `created_at`), are immutable once created, and are appended in display
/// order. They are never mutated or individually removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Opaque unique identifier (`msg-<uuid>`).
    pub id: String,
    /// Who authored the message.
    pub role: MessageRole,
    /// The message text.
    pub text: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub created_at: String,
    /// Optional navigation action (assistant messages only in practice).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
}

/// The caller-supplied part of a message; the store fills in the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageDraft {
    pub role: MessageRole,
    pub text: String,
    pub action: Option<MessageAction>,
}

impl MessageDraft {
    /// Creates a user message draft with no action.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: MessageRole::User,
            text: text.into(),
            action: None,
        }
    }

    /// Creates an assistant message draft.
    pub fn assistant(text: impl Into<String>, action: Option<MessageAction>) -> Self {
        Self {
            role: MessageRole::Assistant,
            text: text.into(),
            action,
        }
    }
}
