//! The gesture vocabulary and the common detector interface.

use std::time::Duration;

use crate::landmark::Landmark;

/// A resolved directional gesture. "No gesture this frame" is
/// `Option<Gesture>::None` everywhere — gestures are ephemeral, computed
/// and consumed within a single frame iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gesture {
    Left,
    Right,
    Up,
    Down,
}

impl Gesture {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gesture::Left => "left",
            Gesture::Right => "right",
            Gesture::Up => "up",
            Gesture::Down => "down",
        }
    }
}

/// A stateful per-frame gesture classifier.
///
/// Both detectors implement this, so the composition layer can treat them
/// uniformly even though their internal state shapes differ. `landmarks`
/// is the set produced by the external perception model for this frame
/// (`None` when nothing was detected — a normal idle state, not an error);
/// `now` is sampled once per frame from the injected [`crate::Clock`].
pub trait FrameProcessor {
    fn process_frame(
        &mut self,
        landmarks: Option<&[Landmark]>,
        now: Duration,
    ) -> Option<Gesture>;
}
