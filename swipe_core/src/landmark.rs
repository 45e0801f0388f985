//! Normalized 2D landmark points and the fixed anatomical indices the
//! detectors consume.

/// A 2D point in normalized frame coordinates — both axes in [0, 1],
/// relative to frame width/height. Produced fresh each frame by the
/// external perception model; never persisted beyond one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
}

impl Landmark {
    pub const fn new(x: f32, y: f32) -> Self {
        Landmark { x, y }
    }
}

/// Hand landmark scheme: 21 points per hand, indexed 0–20.
/// Only the index fingertip is consumed here.
pub mod hand {
    /// Number of points in one hand's landmark set.
    pub const LANDMARK_COUNT: usize = 21;

    /// Tip of the index finger.
    pub const INDEX_FINGERTIP: usize = 8;
}

/// Face-mesh landmark indices bounding one eye (the left, in the refined
/// mesh scheme). Four points: top/bottom lid and the two corners.
pub mod eye {
    pub const TOP: usize = 159;
    pub const BOTTOM: usize = 145;
    pub const OUTER: usize = 33;
    pub const INNER: usize = 133;

    /// Minimum face-landmark slice length that covers all four eye points.
    pub const MIN_LANDMARKS: usize = TOP + 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_min_landmarks_covers_all_indices() {
        for idx in [eye::TOP, eye::BOTTOM, eye::OUTER, eye::INNER] {
            assert!(idx < eye::MIN_LANDMARKS);
        }
    }

    #[test]
    fn fingertip_within_hand_set() {
        assert!(hand::INDEX_FINGERTIP < hand::LANDMARK_COUNT);
    }
}
