//! Two-way link between scene hotspot interaction and the store.

use std::sync::Arc;

use tracing::info;

use pilgrim_core::store::{CAMERA_ORIGIN, CameraTarget, GuideStore};

/// Translates scene hotspot events into store updates and exposes the
/// camera target for the renderer's per-frame read.
///
/// Selection and camera target always move together through the store's
/// atomic combined update, so a renderer reading both in the same pass
/// never sees a camera pointing at one location while the info panel
/// describes another.
pub struct SceneBridge {
    store: Arc<GuideStore>,
}

impl SceneBridge {
    pub fn new(store: Arc<GuideStore>) -> Self {
        Self { store }
    }

    /// Reports a hotspot selection from the scene renderer.
    pub fn on_hotspot_selected(&self, location_id: &str, position: CameraTarget) {
        info!(location_id, "scene hotspot selected");
        self.store
            .select_scene_location(Some(location_id.to_string()), position);
    }

    /// Clears the selection and returns the camera to the scene origin,
    /// as one atomic update.
    pub fn clear_selection(&self) {
        self.store.select_scene_location(None, CAMERA_ORIGIN);
    }

    /// The point the camera should currently track; read every frame by
    /// the renderer.
    pub fn camera_target(&self) -> CameraTarget {
        self.store.camera_target()
    }
}
