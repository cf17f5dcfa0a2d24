//! Discrete panel extent states.

use serde::{Deserialize, Serialize};
use strum::Display;

/// The vertical-extent mode of the conversational panel.
///
/// The three states form a total order (`Collapsed < Half < Full`) used
/// both as the gesture reconciler's discrete output and as the renderable
/// panel height. Exactly one value is current at a time for the whole
/// process.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PanelState {
    /// Only the handle and input row are visible.
    #[default]
    Collapsed,
    /// Roughly half the viewport.
    Half,
    /// Near-full viewport.
    Full,
}

impl PanelState {
    /// One step toward `Full`; `Full` stays `Full`.
    pub fn promote(self) -> Self {
        match self {
            PanelState::Collapsed => PanelState::Half,
            PanelState::Half | PanelState::Full => PanelState::Full,
        }
    }

    /// One step toward `Collapsed`; `Collapsed` stays `Collapsed`.
    pub fn demote(self) -> Self {
        match self {
            PanelState::Full => PanelState::Half,
            PanelState::Half | PanelState::Collapsed => PanelState::Collapsed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_totally_ordered() {
        assert!(PanelState::Collapsed < PanelState::Half);
        assert!(PanelState::Half < PanelState::Full);
    }

    #[test]
    fn test_promote_is_single_step_and_saturating() {
        assert_eq!(PanelState::Collapsed.promote(), PanelState::Half);
        assert_eq!(PanelState::Half.promote(), PanelState::Full);
        assert_eq!(PanelState::Full.promote(), PanelState::Full);
    }

    #[test]
    fn test_demote_is_single_step_and_saturating() {
        assert_eq!(PanelState::Full.demote(), PanelState::Half);
        assert_eq!(PanelState::Half.demote(), PanelState::Collapsed);
        assert_eq!(PanelState::Collapsed.demote(), PanelState::Collapsed);
    }

    #[test]
    fn test_default_is_collapsed() {
        assert_eq!(PanelState::default(), PanelState::Collapsed);
    }
}
