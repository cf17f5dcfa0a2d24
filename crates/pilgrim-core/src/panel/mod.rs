//! Conversational panel domain module.
//!
//! # Module Structure
//!
//! - `state`: the discrete panel extent (`PanelState`)
//! - `gesture`: drag summarization and the release transition rule
//!   (`GestureTracker`, `DragRelease`, `resolve_release`)
//! - `reconciler`: store-writing side (`PanelReconciler`)

mod gesture;
mod reconciler;
mod state;

pub use gesture::{DragRelease, GestureSample, GestureTracker, resolve_release};
pub use reconciler::PanelReconciler;
pub use state::PanelState;
