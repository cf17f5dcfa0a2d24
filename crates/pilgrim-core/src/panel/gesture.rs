//! Drag gesture interpretation.
//!
//! A drag gesture is a stream of vertical pointer samples ending in a
//! release. `GestureTracker` reduces the stream to a `DragRelease` (net
//! displacement plus release velocity), and `resolve_release` maps that to
//! a discrete panel transition. Malformed gestures always resolve to "no
//! state change" - nothing here panics.

use super::state::PanelState;

/// Net displacement threshold in display-independent units.
const OFFSET_THRESHOLD: f32 = 60.0;
/// Release velocity threshold in units per second.
const VELOCITY_THRESHOLD: f32 = 300.0;

/// One vertical pointer sample during a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Vertical position; positive axis points downward.
    pub y: f32,
    /// Milliseconds since an arbitrary gesture-local epoch.
    pub millis: u64,
}

impl GestureSample {
    pub fn new(y: f32, millis: u64) -> Self {
        Self { y, millis }
    }
}

/// The summary of a completed drag: net displacement and release velocity.
///
/// Positive values point downward (toward closing the panel).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Net vertical displacement over the whole gesture.
    pub offset: f32,
    /// Vertical speed at release, units per second.
    pub velocity: f32,
}

/// Accumulates pointer samples for one drag and summarizes them on release.
#[derive(Debug, Default)]
pub struct GestureTracker {
    samples: Vec<GestureSample>,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one pointer sample. Non-finite positions are dropped.
    pub fn push(&mut self, sample: GestureSample) {
        if sample.y.is_finite() {
            self.samples.push(sample);
        }
    }

    /// Ends the gesture and summarizes it.
    ///
    /// Returns `None` for gestures that carry no usable motion: fewer than
    /// two samples, or zero elapsed time (the caller treats `None` as a
    /// tap/jitter, i.e. no state change from the drag rule).
    pub fn release(self) -> Option<DragRelease> {
        let first = self.samples.first()?;
        let last = self.samples.last()?;
        if self.samples.len() < 2 || last.millis <= first.millis {
            return None;
        }

        let offset = last.y - first.y;

        // Velocity from the final sample pair; falls back to the whole
        // gesture when the last two samples share a timestamp.
        let prev = self.samples[self.samples.len() - 2];
        let (dy, dt_ms) = if last.millis > prev.millis {
            (last.y - prev.y, last.millis - prev.millis)
        } else {
            (offset, last.millis - first.millis)
        };
        let velocity = dy / (dt_ms as f32 / 1000.0);

        Some(DragRelease { offset, velocity })
    }
}

/// Maps a drag release onto a single-step panel transition.
///
/// A strong upward gesture (offset past `-60` or velocity past `-300`)
/// promotes one step; a strong downward gesture demotes one step; anything
/// else - including non-finite samples - leaves the state unchanged. A
/// drag never skips a step.
pub fn resolve_release(current: PanelState, release: DragRelease) -> PanelState {
    let DragRelease { offset, velocity } = release;
    if !offset.is_finite() || !velocity.is_finite() {
        return current;
    }

    if offset < -OFFSET_THRESHOLD || velocity < -VELOCITY_THRESHOLD {
        current.promote()
    } else if offset > OFFSET_THRESHOLD || velocity > VELOCITY_THRESHOLD {
        current.demote()
    } else {
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn release(offset: f32, velocity: f32) -> DragRelease {
        DragRelease { offset, velocity }
    }

    #[test]
    fn test_upward_offset_promotes_one_step() {
        assert_eq!(
            resolve_release(PanelState::Collapsed, release(-70.0, 0.0)),
            PanelState::Half
        );
        assert_eq!(
            resolve_release(PanelState::Half, release(-70.0, 0.0)),
            PanelState::Full
        );
    }

    #[test]
    fn test_upward_velocity_alone_promotes() {
        assert_eq!(
            resolve_release(PanelState::Half, release(0.0, -350.0)),
            PanelState::Full
        );
    }

    #[test]
    fn test_small_offset_is_jitter() {
        assert_eq!(
            resolve_release(PanelState::Half, release(10.0, 0.0)),
            PanelState::Half
        );
    }

    #[test]
    fn test_downward_gesture_demotes_one_step() {
        assert_eq!(
            resolve_release(PanelState::Full, release(80.0, 0.0)),
            PanelState::Half
        );
        assert_eq!(
            resolve_release(PanelState::Half, release(0.0, 400.0)),
            PanelState::Collapsed
        );
    }

    #[test]
    fn test_transitions_saturate_at_the_ends() {
        assert_eq!(
            resolve_release(PanelState::Full, release(-200.0, -900.0)),
            PanelState::Full
        );
        assert_eq!(
            resolve_release(PanelState::Collapsed, release(200.0, 900.0)),
            PanelState::Collapsed
        );
    }

    #[test]
    fn test_thresholds_are_exclusive() {
        // Exactly at the threshold counts as jitter.
        assert_eq!(
            resolve_release(PanelState::Half, release(-60.0, 0.0)),
            PanelState::Half
        );
        assert_eq!(
            resolve_release(PanelState::Half, release(0.0, 300.0)),
            PanelState::Half
        );
    }

    #[test]
    fn test_non_finite_samples_leave_state_unchanged() {
        assert_eq!(
            resolve_release(PanelState::Half, release(f32::NAN, 0.0)),
            PanelState::Half
        );
        assert_eq!(
            resolve_release(PanelState::Half, release(0.0, f32::INFINITY)),
            PanelState::Half
        );
    }

    #[test]
    fn test_tracker_summarizes_a_drag() {
        let mut tracker = GestureTracker::new();
        tracker.push(GestureSample::new(0.0, 0));
        tracker.push(GestureSample::new(-40.0, 100));
        tracker.push(GestureSample::new(-80.0, 200));
        let release = tracker.release().unwrap();
        assert_eq!(release.offset, -80.0);
        assert_eq!(release.velocity, -400.0);
    }

    #[test]
    fn test_tracker_rejects_zero_duration() {
        let mut tracker = GestureTracker::new();
        tracker.push(GestureSample::new(0.0, 50));
        tracker.push(GestureSample::new(-100.0, 50));
        assert!(tracker.release().is_none());
    }

    #[test]
    fn test_tracker_rejects_single_sample() {
        let mut tracker = GestureTracker::new();
        tracker.push(GestureSample::new(12.0, 0));
        assert!(tracker.release().is_none());
    }

    #[test]
    fn test_tracker_drops_non_finite_samples() {
        let mut tracker = GestureTracker::new();
        tracker.push(GestureSample::new(0.0, 0));
        tracker.push(GestureSample::new(f32::NAN, 50));
        tracker.push(GestureSample::new(-90.0, 100));
        let release = tracker.release().unwrap();
        assert_eq!(release.offset, -90.0);
    }
}
