//! Conversation domain module.
//!
//! # Module Structure
//!
//! - `message`: conversation message types (`ChatMessage`, `MessageRole`,
//!   `MessageAction`, `MessageDraft`)
//! - `rules`: the canned-response rule table and matcher (`RuleTable`,
//!   `ResponseRule`, `MatchedReply`)
//! - `preset`: the built-in rule table content (`RuleTable::builtin`)

mod message;
mod preset;
mod rules;

pub use message::{ChatMessage, MessageAction, MessageDraft, MessageRole};
pub use rules::{MatchedReply, ResponseRule, RuleTable};
