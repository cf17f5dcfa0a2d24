//! Interaction layer for the Pilgrim Guide.
//!
//! Hosts the two controllers that sit between the view regions and the
//! store: [`GuideSession`], which turns user free text into a simulated
//! assistant exchange, and [`scene_bridge::SceneBridge`], which links
//! scene hotspot selection to the store.

pub mod scene_bridge;

pub use scene_bridge::SceneBridge;

use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::debug;

use pilgrim_core::chat::{MessageDraft, RuleTable};
use pilgrim_core::store::GuideStore;

/// Default simulated thinking delay, milliseconds (half-open range).
const DEFAULT_DELAY_MS: Range<u64> = 900..1500;

/// The conversational session controller.
///
/// Turns user free text into a visible exchange: echo the user's message,
/// simulate "thinking" for a bounded random interval, then append the
/// matched (or fallback) reply. At most one send is in flight at a time;
/// the store's loading flag is the sole admission guard, so replies are
/// always appended in the order their triggering messages were.
pub struct GuideSession {
    store: Arc<GuideStore>,
    rules: RuleTable,
    delay_ms: Range<u64>,
}

impl GuideSession {
    /// Creates a session over the built-in rule table with the default
    /// thinking delay.
    pub fn new(store: Arc<GuideStore>) -> Self {
        Self {
            store,
            rules: RuleTable::builtin(),
            delay_ms: DEFAULT_DELAY_MS,
        }
    }

    /// Replaces the rule table (e.g. one loaded from external JSON).
    pub fn with_rules(mut self, rules: RuleTable) -> Self {
        self.rules = rules;
        self
    }

    /// Overrides the simulated thinking delay. Intended for tests; the
    /// default range is part of the production contract.
    pub fn with_delay_range(mut self, delay_ms: Range<u64>) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// The rule table this session answers from.
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Sends one user message and produces the assistant reply.
    ///
    /// Empty (after trimming) input and sends arriving while a reply is
    /// already in flight are silently dropped - no state change, no
    /// error. Once the thinking delay begins the exchange always
    /// completes; there is no cancellation.
    pub async fn send_message(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            debug!("dropping empty message");
            return;
        }
        if self.store.is_loading() {
            debug!("dropping message while a reply is in flight");
            return;
        }

        self.store.append_message(MessageDraft::user(trimmed));
        self.store.set_loading(true);

        let delay = self.pick_delay();
        tokio::time::sleep(delay).await;

        let matched = self.rules.reply_for(trimmed);

        self.store.set_loading(false);
        self.store
            .append_message(MessageDraft::assistant(matched.text, matched.action));
    }

    /// Appends the assistant greeting, with no action and no delay.
    /// Intended to fire once per session, before any user message exists.
    pub fn send_greeting(&self) {
        self.store
            .append_message(MessageDraft::assistant(self.rules.greeting.clone(), None));
    }

    fn pick_delay(&self) -> Duration {
        let ms = if self.delay_ms.is_empty() {
            self.delay_ms.start
        } else {
            rand::thread_rng().gen_range(self.delay_ms.clone())
        };
        Duration::from_millis(ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pilgrim_core::chat::MessageRole;

    fn session() -> (Arc<GuideStore>, GuideSession) {
        let store = Arc::new(GuideStore::new());
        let session = GuideSession::new(store.clone()).with_delay_range(0..1);
        (store, session)
    }

    #[tokio::test]
    async fn test_send_appends_user_then_assistant() {
        let (store, session) = session();
        session.send_message("Tell me about the Kaaba").await;

        let messages = store.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[0].text, "Tell me about the Kaaba");
        assert_eq!(messages[1].role, MessageRole::Assistant);
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_input_is_trimmed_before_echo() {
        let (store, session) = session();
        session.send_message("  zamzam  ").await;
        assert_eq!(store.messages()[0].text, "zamzam");
    }

    #[tokio::test]
    async fn test_whitespace_only_input_is_dropped() {
        let (store, session) = session();
        session.send_message("   \n\t ").await;
        assert!(store.messages().is_empty());
        assert!(!store.is_loading());
    }

    #[tokio::test]
    async fn test_send_while_loading_is_dropped() {
        let (store, session) = session();
        store.set_loading(true);
        session.send_message("Tawaf").await;
        assert!(store.messages().is_empty());
        // The guard does not touch the flag it rejected on.
        assert!(store.is_loading());
    }

    #[tokio::test]
    async fn test_greeting_is_a_single_assistant_message_with_no_action() {
        let (store, session) = session();
        session.send_greeting();

        let messages = store.messages();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].role, MessageRole::Assistant);
        assert_eq!(messages[0].text, session.rules().greeting);
        assert!(messages[0].action.is_none());
    }

    #[tokio::test]
    async fn test_unmatched_input_gets_the_fallback() {
        let (store, session) = session();
        session.send_message("completely unrelated question").await;
        let messages = store.messages();
        assert_eq!(messages[1].text, session.rules().fallback);
        assert!(messages[1].action.is_none());
    }
}
