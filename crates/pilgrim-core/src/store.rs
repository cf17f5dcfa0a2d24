//! The process-wide reactive store.
//!
//! `GuideStore` is the single source of truth every view region reads.
//! Mutation goes through named methods only; each mutator applies its
//! change under the write lock, releases it, and then broadcasts exactly
//! one [`StoreEvent`] before returning. Subscribers that take a snapshot
//! after receiving an event therefore always observe the fully applied
//! update - in particular, a scene selection never shows a camera target
//! without its matching location id (see [`GuideStore::select_scene_location`]).

use std::sync::RwLock;

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::chat::{ChatMessage, MessageDraft};
use crate::panel::PanelState;
use crate::reminder::{Reminder, ReminderDraft};

/// The point the spatial scene's camera should track.
pub type CameraTarget = [f32; 3];

/// Default camera target: the scene origin.
pub const CAMERA_ORIGIN: CameraTarget = [0.0, 0.0, 0.0];

/// Notification sent to subscribers after each store mutation.
///
/// Events carry the applied value so simple subscribers can react without
/// taking a fresh snapshot. Exactly one event is sent per mutation; a
/// no-op (unknown reminder id) sends none.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreEvent {
    /// A message was appended to the conversation.
    MessageAppended(ChatMessage),
    /// The conversation was cleared.
    MessagesCleared,
    /// The in-flight-reply flag changed.
    LoadingChanged(bool),
    /// The panel moved to a new discrete state.
    PanelChanged(PanelState),
    /// A reminder was created.
    ReminderAdded(Reminder),
    /// A reminder was deleted.
    ReminderRemoved(String),
    /// A reminder's enabled flag flipped.
    ReminderToggled { id: String, enabled: bool },
    /// The camera target moved (independent setter).
    CameraChanged(CameraTarget),
    /// The selected location changed (independent setter).
    SelectionChanged(Option<String>),
    /// A scene selection updated location and camera together.
    SceneSelectionChanged {
        location_id: Option<String>,
        camera_target: CameraTarget,
    },
}

#[derive(Debug)]
struct StoreState {
    messages: Vec<ChatMessage>,
    is_loading: bool,
    panel_state: PanelState,
    reminders: Vec<Reminder>,
    camera_target: CameraTarget,
    selected_location_id: Option<String>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            is_loading: false,
            panel_state: PanelState::Collapsed,
            reminders: Vec::new(),
            camera_target: CAMERA_ORIGIN,
            selected_location_id: None,
        }
    }
}

/// The shared session-state container.
///
/// All state is process-lifetime only; nothing here persists. The store is
/// cheap to share behind an `Arc` and safe to touch from any task, though
/// the intended model is cooperative single-threaded event handling.
pub struct GuideStore {
    state: RwLock<StoreState>,
    events: broadcast::Sender<StoreEvent>,
}

impl Default for GuideStore {
    fn default() -> Self {
        Self::new()
    }
}

impl GuideStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(256);
        Self {
            state: RwLock::new(StoreState::default()),
            events,
        }
    }

    /// Subscribes to store change notifications.
    ///
    /// Every mutation emits one event to all current subscribers. A
    /// receiver that falls more than the channel capacity behind observes
    /// a lag error, not a partially applied update.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    fn notify(&self, event: StoreEvent) {
        // A send with no live receivers is fine; views may not be mounted.
        let _ = self.events.send(event);
    }

    // ------------------------------------------------------------------
    // Conversation
    // ------------------------------------------------------------------

    /// Appends a message, generating its id and timestamp.
    ///
    /// Never fails and never validates: an empty text is appended as-is
    /// (input validation belongs to the session controller).
    pub fn append_message(&self, draft: MessageDraft) -> ChatMessage {
        let message = ChatMessage {
            id: format!("msg-{}", Uuid::new_v4()),
            role: draft.role,
            text: draft.text,
            created_at: chrono::Utc::now().to_rfc3339(),
            action: draft.action,
        };
        {
            let mut state = self.state.write().unwrap();
            state.messages.push(message.clone());
        }
        self.notify(StoreEvent::MessageAppended(message.clone()));
        message
    }

    /// Removes all messages. This is the only way messages leave the store.
    pub fn clear_messages(&self) {
        {
            let mut state = self.state.write().unwrap();
            state.messages.clear();
        }
        self.notify(StoreEvent::MessagesCleared);
    }

    /// Sets the in-flight-reply flag read by send callers to disable
    /// duplicate submission.
    pub fn set_loading(&self, loading: bool) {
        {
            let mut state = self.state.write().unwrap();
            state.is_loading = loading;
        }
        self.notify(StoreEvent::LoadingChanged(loading));
    }

    /// Returns a snapshot of the conversation in insertion order.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.state.read().unwrap().messages.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().unwrap().is_loading
    }

    // ------------------------------------------------------------------
    // Panel
    // ------------------------------------------------------------------

    /// Unconditionally sets the panel state. The gesture reconciler
    /// resolves transitions before calling this.
    pub fn set_panel_state(&self, panel_state: PanelState) {
        {
            let mut state = self.state.write().unwrap();
            state.panel_state = panel_state;
        }
        self.notify(StoreEvent::PanelChanged(panel_state));
    }

    pub fn panel_state(&self) -> PanelState {
        self.state.read().unwrap().panel_state
    }

    // ------------------------------------------------------------------
    // Reminders
    // ------------------------------------------------------------------

    /// Creates a reminder from a draft, generating its id and timestamp.
    /// Identical drafts yield distinct reminders with distinct ids.
    pub fn add_reminder(&self, draft: ReminderDraft) -> Reminder {
        let reminder = Reminder {
            id: format!("rem-{}", Uuid::new_v4()),
            ritual_id: draft.ritual_id,
            label: draft.label,
            time: draft.time,
            category: draft.category,
            enabled: draft.enabled,
            created_at: chrono::Utc::now().to_rfc3339(),
        };
        {
            let mut state = self.state.write().unwrap();
            state.reminders.push(reminder.clone());
        }
        self.notify(StoreEvent::ReminderAdded(reminder.clone()));
        reminder
    }

    /// Deletes a reminder by id. An unknown id is a silent no-op and
    /// emits no event.
    pub fn remove_reminder(&self, id: &str) {
        let removed = {
            let mut state = self.state.write().unwrap();
            let before = state.reminders.len();
            state.reminders.retain(|r| r.id != id);
            state.reminders.len() != before
        };
        if removed {
            self.notify(StoreEvent::ReminderRemoved(id.to_string()));
        }
    }

    /// Flips a reminder's enabled flag in place. An unknown id is a
    /// silent no-op and emits no event.
    pub fn toggle_reminder(&self, id: &str) {
        let toggled = {
            let mut state = self.state.write().unwrap();
            state.reminders.iter_mut().find(|r| r.id == id).map(|r| {
                r.enabled = !r.enabled;
                r.enabled
            })
        };
        if let Some(enabled) = toggled {
            self.notify(StoreEvent::ReminderToggled {
                id: id.to_string(),
                enabled,
            });
        }
    }

    /// Returns a snapshot of the reminders in creation order.
    pub fn reminders(&self) -> Vec<Reminder> {
        self.state.read().unwrap().reminders.clone()
    }

    // ------------------------------------------------------------------
    // Scene
    // ------------------------------------------------------------------

    /// Sets the camera target alone. Last write wins; no history is kept.
    pub fn set_camera_target(&self, target: CameraTarget) {
        {
            let mut state = self.state.write().unwrap();
            state.camera_target = target;
        }
        self.notify(StoreEvent::CameraChanged(target));
    }

    /// Sets the selected location alone. `None` clears the selection.
    pub fn set_selected_location(&self, id: Option<String>) {
        {
            let mut state = self.state.write().unwrap();
            state.selected_location_id = id.clone();
        }
        self.notify(StoreEvent::SelectionChanged(id));
    }

    /// Atomic combined scene-selection update.
    ///
    /// Both fields are written under one lock hold and announced with a
    /// single event, so a renderer reading them in the same pass never
    /// sees a camera pointing at one location while the selection names
    /// another.
    pub fn select_scene_location(&self, id: Option<String>, target: CameraTarget) {
        {
            let mut state = self.state.write().unwrap();
            state.selected_location_id = id.clone();
            state.camera_target = target;
        }
        self.notify(StoreEvent::SceneSelectionChanged {
            location_id: id,
            camera_target: target,
        });
    }

    pub fn camera_target(&self) -> CameraTarget {
        self.state.read().unwrap().camera_target
    }

    pub fn selected_location(&self) -> Option<String> {
        self.state.read().unwrap().selected_location_id.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::MessageRole;
    use crate::reminder::ReminderCategory;

    fn draft() -> ReminderDraft {
        ReminderDraft::new("tawaf", "Tawaf", "06:00", ReminderCategory::Ritual)
    }

    #[test]
    fn test_append_message_generates_id_and_timestamp() {
        let store = GuideStore::new();
        let message = store.append_message(MessageDraft::user("hello"));
        assert!(message.id.starts_with("msg-"));
        assert!(!message.created_at.is_empty());
        assert_eq!(store.messages(), vec![message]);
    }

    #[test]
    fn test_append_message_accepts_empty_text() {
        let store = GuideStore::new();
        store.append_message(MessageDraft::user(""));
        assert_eq!(store.messages().len(), 1);
    }

    #[test]
    fn test_messages_keep_insertion_order() {
        let store = GuideStore::new();
        store.append_message(MessageDraft::user("first"));
        store.append_message(MessageDraft::assistant("second", None));
        let messages = store.messages();
        assert_eq!(messages[0].text, "first");
        assert_eq!(messages[0].role, MessageRole::User);
        assert_eq!(messages[1].text, "second");
        assert_eq!(messages[1].role, MessageRole::Assistant);
    }

    #[test]
    fn test_clear_messages_empties_the_list() {
        let store = GuideStore::new();
        store.append_message(MessageDraft::user("hello"));
        store.clear_messages();
        assert!(store.messages().is_empty());
    }

    #[test]
    fn test_every_mutation_notifies_subscribers() {
        let store = GuideStore::new();
        let mut events = store.subscribe();

        let message = store.append_message(MessageDraft::user("hi"));
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::MessageAppended(message)
        );

        store.set_loading(true);
        assert_eq!(events.try_recv().unwrap(), StoreEvent::LoadingChanged(true));

        store.set_panel_state(PanelState::Half);
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::PanelChanged(PanelState::Half)
        );
    }

    #[test]
    fn test_identical_drafts_yield_distinct_reminder_ids() {
        let store = GuideStore::new();
        let a = store.add_reminder(draft());
        let b = store.add_reminder(draft());
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, b.label);
        assert_eq!(store.reminders().len(), 2);
    }

    #[test]
    fn test_remove_reminder_unknown_id_is_a_silent_noop() {
        let store = GuideStore::new();
        store.add_reminder(draft());
        let mut events = store.subscribe();

        store.remove_reminder("rem-does-not-exist");
        assert_eq!(store.reminders().len(), 1);
        assert!(events.try_recv().is_err(), "no-op must not notify");
    }

    #[test]
    fn test_toggle_reminder_twice_restores_enabled() {
        let store = GuideStore::new();
        let reminder = store.add_reminder(draft());
        assert!(reminder.enabled);

        store.toggle_reminder(&reminder.id);
        assert!(!store.reminders()[0].enabled);

        store.toggle_reminder(&reminder.id);
        assert!(store.reminders()[0].enabled);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_silent_noop() {
        let store = GuideStore::new();
        let mut events = store.subscribe();
        store.toggle_reminder("rem-nope");
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_camera_defaults_to_origin_and_is_last_write_wins() {
        let store = GuideStore::new();
        assert_eq!(store.camera_target(), CAMERA_ORIGIN);
        store.set_camera_target([1.0, 2.0, 3.0]);
        store.set_camera_target([4.0, 5.0, 6.0]);
        assert_eq!(store.camera_target(), [4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_scene_selection_is_atomic_and_single_event() {
        let store = GuideStore::new();
        let mut events = store.subscribe();

        store.select_scene_location(Some("kaaba".to_string()), [0.0, 1.5, 0.0]);

        assert_eq!(store.selected_location().as_deref(), Some("kaaba"));
        assert_eq!(store.camera_target(), [0.0, 1.5, 0.0]);
        assert_eq!(
            events.try_recv().unwrap(),
            StoreEvent::SceneSelectionChanged {
                location_id: Some("kaaba".to_string()),
                camera_target: [0.0, 1.5, 0.0],
            }
        );
        // Exactly one event for the combined update.
        assert!(events.try_recv().is_err());
    }

    #[test]
    fn test_clearing_selection_sets_none() {
        let store = GuideStore::new();
        store.set_selected_location(Some("safa".to_string()));
        store.set_selected_location(None);
        assert!(store.selected_location().is_none());
    }
}
