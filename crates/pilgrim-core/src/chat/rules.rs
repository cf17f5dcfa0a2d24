//! The guide's canned-response rule table.
//!
//! The assistant is a fixed-corpus keyword matcher: an ordered list of
//! keyword sets, each paired with a reply and an optional navigation
//! action. Matching is a linear scan, first rule wins. Rule order in the
//! source data is part of the contract and is preserved verbatim.

use serde::{Deserialize, Serialize};

use super::message::MessageAction;
use crate::error::Result;

/// A single keyword-to-reply mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRule {
    /// Lowercase keywords; any one matching as a substring fires the rule.
    pub keywords: Vec<String>,
    /// The canned reply text.
    pub reply: String,
    /// Optional navigation hint attached to the reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<MessageAction>,
}

/// The matched (or fallback) outcome for one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedReply {
    pub text: String,
    pub action: Option<MessageAction>,
}

/// The full conversational rule table.
///
/// Carries the session greeting, the no-match fallback, the suggestion
/// prompts shown when the conversation is fresh, and the ordered rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleTable {
    /// Assistant greeting sent once per session, before any user message.
    pub greeting: String,
    /// Reply used when no rule matches.
    pub fallback: String,
    /// Prompt chips offered while the conversation has at most one message.
    #[serde(default)]
    pub suggestions: Vec<String>,
    /// Ordered keyword rules; earlier rules take precedence.
    pub rules: Vec<ResponseRule>,
}

impl RuleTable {
    /// Parses a rule table from externally supplied JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not match the table
    /// shape.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves an input text to a reply.
    ///
    /// The input is case-folded once; the first rule (in table order) any
    /// of whose keywords occurs as a substring wins. No match yields the
    /// fallback reply with no action. This never fails.
    pub fn reply_for(&self, input: &str) -> MatchedReply {
        let folded = input.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| folded.contains(kw.as_str())) {
                return MatchedReply {
                    text: rule.reply.clone(),
                    action: rule.action.clone(),
                };
            }
        }
        MatchedReply {
            text: self.fallback.clone(),
            action: None,
        }
    }
}
