//! Writes resolved gesture outcomes into the store.

use std::sync::Arc;

use super::gesture::{DragRelease, resolve_release};
use super::state::PanelState;
use crate::store::GuideStore;

/// Bridges the drag gesture stream to the store's panel state.
///
/// The reconciler reads the current `PanelState`, resolves the gesture
/// against it, and writes the result back through `set_panel_state` (the
/// store setter is unconditional; all ambiguity is resolved here first).
/// Two simpler triggers are layered on top of the drag rule: tapping the
/// handle and focusing the text input both open a collapsed panel to
/// `Half`, and take precedence when they fire.
pub struct PanelReconciler {
    store: Arc<GuideStore>,
}

impl PanelReconciler {
    pub fn new(store: Arc<GuideStore>) -> Self {
        Self { store }
    }

    /// Applies a completed drag. `None` (a tap or malformed gesture per
    /// `GestureTracker`) leaves the state untouched.
    pub fn release(&self, release: Option<DragRelease>) {
        let Some(release) = release else { return };
        let current = self.store.panel_state();
        let next = resolve_release(current, release);
        if next != current {
            self.store.set_panel_state(next);
        }
    }

    /// A plain tap on the handle: opens a collapsed panel to `Half`.
    pub fn tap_handle(&self) {
        if self.store.panel_state() == PanelState::Collapsed {
            self.store.set_panel_state(PanelState::Half);
        }
    }

    /// Focusing the text input: same promotion as a handle tap.
    pub fn focus_input(&self) {
        if self.store.panel_state() == PanelState::Collapsed {
            self.store.set_panel_state(PanelState::Half);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconciler() -> (Arc<GuideStore>, PanelReconciler) {
        let store = Arc::new(GuideStore::new());
        let reconciler = PanelReconciler::new(store.clone());
        (store, reconciler)
    }

    #[test]
    fn test_release_writes_resolved_state() {
        let (store, reconciler) = reconciler();
        reconciler.release(Some(DragRelease {
            offset: -70.0,
            velocity: 0.0,
        }));
        assert_eq!(store.panel_state(), PanelState::Half);
    }

    #[test]
    fn test_none_release_is_ignored() {
        let (store, reconciler) = reconciler();
        store.set_panel_state(PanelState::Full);
        reconciler.release(None);
        assert_eq!(store.panel_state(), PanelState::Full);
    }

    #[test]
    fn test_tap_opens_collapsed_panel_only() {
        let (store, reconciler) = reconciler();
        reconciler.tap_handle();
        assert_eq!(store.panel_state(), PanelState::Half);

        // A second tap while already open does nothing.
        reconciler.tap_handle();
        assert_eq!(store.panel_state(), PanelState::Half);
    }

    #[test]
    fn test_focus_opens_collapsed_panel() {
        let (store, reconciler) = reconciler();
        reconciler.focus_input();
        assert_eq!(store.panel_state(), PanelState::Half);

        store.set_panel_state(PanelState::Full);
        reconciler.focus_input();
        assert_eq!(store.panel_state(), PanelState::Full);
    }
}
