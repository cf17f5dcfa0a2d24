//! Pilgrim Guide core: shared state, gesture reconciliation, and the
//! pure leaf functions behind the guide assistant.
//!
//! Three simultaneously visible view regions - the 3D scene, the
//! conversational panel, and the content browsers - all read and mutate
//! one [`store::GuideStore`]. Each controller owns a disjoint slice of
//! the store's fields; every mutation flows through a named method and is
//! announced to subscribers with exactly one event.
//!
//! The reference datasets (locations, rituals, audio guides, tours,
//! reminder templates, and the conversational rule table) are immutable
//! lookup tables; the core never writes to them.

pub mod audio;
pub mod chat;
pub mod error;
pub mod highlight;
pub mod location;
pub mod panel;
pub mod reminder;
pub mod ritual;
pub mod store;
pub mod tour;

// Re-export common error type
pub use error::PilgrimError;
