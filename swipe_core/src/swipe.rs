//! Motion-swipe detection — one fingertip tracked across frames.

use std::time::Duration;

use crate::gesture::{FrameProcessor, Gesture};
use crate::landmark::{hand, Landmark};

/// Tunable thresholds for [`SwipeTracker`].
#[derive(Clone, Copy, Debug)]
pub struct SwipeConfig {
    /// Minimum frame-to-frame |dx| (normalized units) for a horizontal swipe.
    pub threshold_x: f32,
    /// Minimum frame-to-frame |dy| for a vertical swipe.
    pub threshold_y: f32,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        SwipeConfig {
            threshold_x: 0.05,
            threshold_y: 0.05,
        }
    }
}

/// Tracks the index fingertip across consecutive frames and emits a
/// directional gesture when the displacement on the dominant axis exceeds
/// that axis's threshold.
///
/// The horizontal mapping is mirrored on purpose: a fingertip moving
/// toward +x (the user's hand sweeping to their left in a mirrored camera
/// view) emits `Left`. The vertical mapping is direct. Do not "fix" the
/// mirroring — downstream swipe payloads are calibrated to it.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    config: SwipeConfig,
    last_pos: Option<Landmark>,
}

impl SwipeTracker {
    pub fn new(config: SwipeConfig) -> Self {
        SwipeTracker {
            config,
            last_pos: None,
        }
    }

    /// The fingertip position seen on the previous frame, if any.
    pub fn last_pos(&self) -> Option<Landmark> {
        self.last_pos
    }

    fn classify(&self, dx: f32, dy: f32) -> Option<Gesture> {
        if dx.abs() > self.config.threshold_x && dx.abs() > dy.abs() {
            // Mirrored: +x displacement is a LEFT swipe.
            Some(if dx > 0.0 { Gesture::Left } else { Gesture::Right })
        } else if dy.abs() > self.config.threshold_y && dy.abs() > dx.abs() {
            Some(if dy > 0.0 { Gesture::Down } else { Gesture::Up })
        } else {
            None
        }
    }
}

impl FrameProcessor for SwipeTracker {
    fn process_frame(
        &mut self,
        landmarks: Option<&[Landmark]>,
        _now: Duration,
    ) -> Option<Gesture> {
        // A slice too short to contain the fingertip counts as no hand.
        let tip = match landmarks.and_then(|l| l.get(hand::INDEX_FINGERTIP)) {
            Some(&tip) => tip,
            None => {
                self.last_pos = None;
                return None;
            }
        };

        let gesture = self.last_pos.and_then(|prev| {
            self.classify(tip.x - prev.x, tip.y - prev.y)
        });

        // Re-baseline every frame, whatever was (or wasn't) emitted.
        self.last_pos = Some(tip);
        gesture
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T: Duration = Duration::ZERO;

    fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
        let mut set = vec![Landmark::default(); hand::LANDMARK_COUNT];
        set[hand::INDEX_FINGERTIP] = Landmark::new(x, y);
        set
    }

    fn feed(tracker: &mut SwipeTracker, x: f32, y: f32) -> Option<Gesture> {
        tracker.process_frame(Some(&hand_at(x, y)), T)
    }

    #[test]
    fn first_frame_only_baselines() {
        let mut t = SwipeTracker::default();
        assert_eq!(feed(&mut t, 0.5, 0.5), None);
        assert_eq!(t.last_pos(), Some(Landmark::new(0.5, 0.5)));
    }

    #[test]
    fn positive_dx_is_mirrored_to_left() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.50, 0.50);
        assert_eq!(feed(&mut t, 0.60, 0.50), Some(Gesture::Left));
    }

    #[test]
    fn negative_dx_is_mirrored_to_right() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.60, 0.50);
        assert_eq!(feed(&mut t, 0.50, 0.50), Some(Gesture::Right));
    }

    #[test]
    fn positive_dy_is_down() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.5, 0.40);
        assert_eq!(feed(&mut t, 0.5, 0.50), Some(Gesture::Down));
    }

    #[test]
    fn negative_dy_is_up() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.5, 0.50);
        assert_eq!(feed(&mut t, 0.5, 0.40), Some(Gesture::Up));
    }

    #[test]
    fn below_threshold_emits_nothing() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.50, 0.50);
        assert_eq!(feed(&mut t, 0.54, 0.50), None);
        assert_eq!(feed(&mut t, 0.54, 0.53), None);
    }

    #[test]
    fn equal_axes_have_no_dominant_and_emit_nothing() {
        // |dx| == |dy| fails both strict dominance checks.
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.50, 0.50);
        assert_eq!(feed(&mut t, 0.60, 0.60), None);
    }

    #[test]
    fn dominant_axis_wins_when_both_exceed_thresholds() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.50, 0.50);
        // dx = 0.10, dy = 0.07 — horizontal dominates.
        assert_eq!(feed(&mut t, 0.60, 0.57), Some(Gesture::Left));
    }

    #[test]
    fn hand_loss_rebaselines_on_reappearance() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.10, 0.50);
        assert_eq!(t.process_frame(None, T), None);
        // Large apparent jump, but the first frame back must emit nothing.
        assert_eq!(feed(&mut t, 0.90, 0.50), None);
        // Motion resumes normally afterwards.
        assert_eq!(feed(&mut t, 0.80, 0.50), Some(Gesture::Right));
    }

    #[test]
    fn short_slice_is_treated_as_no_hand() {
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.50, 0.50);
        let partial = vec![Landmark::default(); hand::INDEX_FINGERTIP];
        assert_eq!(t.process_frame(Some(&partial), T), None);
        assert_eq!(t.last_pos(), None);
    }

    #[test]
    fn last_pos_updates_even_when_emitting() {
        // Two consecutive over-threshold moves both fire.
        let mut t = SwipeTracker::default();
        feed(&mut t, 0.30, 0.50);
        assert_eq!(feed(&mut t, 0.40, 0.50), Some(Gesture::Left));
        assert_eq!(feed(&mut t, 0.50, 0.50), Some(Gesture::Left));
    }

    #[test]
    fn custom_thresholds_apply_per_axis() {
        let mut t = SwipeTracker::new(SwipeConfig {
            threshold_x: 0.20,
            threshold_y: 0.05,
        });
        feed(&mut t, 0.50, 0.50);
        // dx = 0.10 dominates but is below the raised x threshold.
        assert_eq!(feed(&mut t, 0.60, 0.50), None);
        assert_eq!(feed(&mut t, 0.60, 0.60), Some(Gesture::Down));
    }
}
