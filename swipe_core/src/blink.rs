//! Blink-sequence detection — eye-openness ratio, debounced blink
//! counting, and single/double-blink gesture resolution.

use std::time::Duration;

use crate::gesture::{FrameProcessor, Gesture};
use crate::landmark::{eye, Landmark};

/// Tunable timing and threshold parameters for [`BlinkDetector`].
#[derive(Clone, Copy, Debug)]
pub struct BlinkConfig {
    /// Eye-openness ratio below which the eye counts as closed.
    pub ear_threshold: f32,
    /// Minimum gap between two counted blinks, so one physical blink
    /// spanning several frames is counted once.
    pub debounce: Duration,
    /// A second blink within this window of the first makes the pair a
    /// double blink.
    pub double_window: Duration,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        BlinkConfig {
            ear_threshold: 0.20,
            debounce: Duration::from_millis(250),
            double_window: Duration::from_millis(700),
        }
    }
}

/// Counts discrete blink events and resolves them into gestures:
/// a lone blink emits `Down` once the double-blink window has expired
/// (so a single-blink gesture carries up to that much latency); a second
/// blink inside the window emits `Up` immediately.
#[derive(Debug, Default)]
pub struct BlinkDetector {
    config: BlinkConfig,
    blink_count: u8,
    last_blink: Option<Duration>,
}

impl BlinkDetector {
    pub fn new(config: BlinkConfig) -> Self {
        BlinkDetector {
            config,
            blink_count: 0,
            last_blink: None,
        }
    }

    /// Blinks counted toward the sequence in progress (0, 1 or 2).
    pub fn blink_count(&self) -> u8 {
        self.blink_count
    }

    /// Vertical eye opening over horizontal eye width. Low values mean a
    /// closed eye. Defined as 0 when the width is 0 (degenerate geometry).
    pub fn eye_openness(face: &[Landmark]) -> Option<f32> {
        if face.len() < eye::MIN_LANDMARKS {
            return None;
        }
        let vert = (face[eye::TOP].y - face[eye::BOTTOM].y).abs();
        let horiz = (face[eye::OUTER].x - face[eye::INNER].x).abs();
        Some(if horiz == 0.0 { 0.0 } else { vert / horiz })
    }
}

impl FrameProcessor for BlinkDetector {
    fn process_frame(
        &mut self,
        landmarks: Option<&[Landmark]>,
        now: Duration,
    ) -> Option<Gesture> {
        let ear = match landmarks.and_then(Self::eye_openness) {
            Some(ear) => ear,
            None => {
                // No face: abandon any sequence in progress. `last_blink`
                // is kept so the debounce still spans a brief dropout.
                self.blink_count = 0;
                return None;
            }
        };

        if ear < self.config.ear_threshold {
            let debounced = self
                .last_blink
                .map_or(true, |t| now.saturating_sub(t) > self.config.debounce);
            if debounced {
                self.blink_count += 1;
                self.last_blink = Some(now);
            }
        }

        // Resolution runs every frame, not just on a fresh blink: a lone
        // blink's Down fires when the window lapses, closed eye or not.
        match (self.blink_count, self.last_blink) {
            (1, Some(t)) if now.saturating_sub(t) > self.config.double_window => {
                self.blink_count = 0;
                Some(Gesture::Down)
            }
            (2, _) => {
                self.blink_count = 0;
                Some(Gesture::Up)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    /// A face whose four eye points produce exactly the requested EAR,
    /// with a 0.15-wide eye.
    fn face_with_ear(ear: f32) -> Vec<Landmark> {
        let mut face = vec![Landmark::default(); eye::MIN_LANDMARKS];
        face[eye::OUTER] = Landmark::new(0.40, 0.50);
        face[eye::INNER] = Landmark::new(0.55, 0.50);
        let half = ear * 0.15 / 2.0;
        face[eye::TOP] = Landmark::new(0.47, 0.50 - half);
        face[eye::BOTTOM] = Landmark::new(0.47, 0.50 + half);
        face
    }

    fn open() -> Vec<Landmark> {
        face_with_ear(0.30)
    }

    fn closed() -> Vec<Landmark> {
        face_with_ear(0.10)
    }

    #[test]
    fn eye_openness_matches_constructed_ratio() {
        let ear = BlinkDetector::eye_openness(&face_with_ear(0.25)).unwrap();
        assert!((ear - 0.25).abs() < 1e-4);
    }

    #[test]
    fn zero_eye_width_yields_zero_ear() {
        let mut face = face_with_ear(0.25);
        let x = face[eye::OUTER].x;
        face[eye::INNER] = Landmark::new(x, 0.9);
        assert_eq!(BlinkDetector::eye_openness(&face), Some(0.0));
    }

    #[test]
    fn short_face_slice_is_no_face() {
        let face = vec![Landmark::default(); eye::MIN_LANDMARKS - 1];
        assert_eq!(BlinkDetector::eye_openness(&face), None);
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), ms(0));
        assert_eq!(det.blink_count(), 1);
        det.process_frame(Some(&face), ms(100));
        assert_eq!(det.blink_count(), 0);
    }

    #[test]
    fn single_blink_emits_down_after_window() {
        // EAR sequence [0.25, 0.15, 0.25] at t = [0.0, 0.1, 0.9] s.
        let mut det = BlinkDetector::default();
        assert_eq!(det.process_frame(Some(&face_with_ear(0.25)), ms(0)), None);
        assert_eq!(det.process_frame(Some(&face_with_ear(0.15)), ms(100)), None);
        assert_eq!(det.blink_count(), 1);
        assert_eq!(
            det.process_frame(Some(&face_with_ear(0.25)), ms(900)),
            Some(Gesture::Down)
        );
        assert_eq!(det.blink_count(), 0);
    }

    #[test]
    fn down_waits_for_the_window_to_lapse() {
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), ms(0));
        // Inside the 700 ms window: nothing yet.
        assert_eq!(det.process_frame(Some(&open()), ms(400)), None);
        assert_eq!(det.process_frame(Some(&open()), ms(650)), None);
        assert_eq!(det.process_frame(Some(&open()), ms(750)), Some(Gesture::Down));
    }

    #[test]
    fn double_blink_emits_up_immediately() {
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), ms(0));
        assert_eq!(det.process_frame(Some(&open()), ms(150)), None);
        // Second blink: > 250 ms after the first, within the 700 ms window.
        assert_eq!(det.process_frame(Some(&closed()), ms(300)), Some(Gesture::Up));
        assert_eq!(det.blink_count(), 0);
        // No trailing Down once the window would have lapsed.
        assert_eq!(det.process_frame(Some(&open()), ms(1200)), None);
    }

    #[test]
    fn debounce_counts_a_held_closure_once() {
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), ms(0));
        det.process_frame(Some(&closed()), ms(100));
        det.process_frame(Some(&closed()), ms(200));
        assert_eq!(det.blink_count(), 1);
    }

    #[test]
    fn face_loss_abandons_the_sequence() {
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), ms(0));
        assert_eq!(det.blink_count(), 1);
        assert_eq!(det.process_frame(None, ms(100)), None);
        assert_eq!(det.blink_count(), 0);
        // The lapsed window emits nothing once the face returns.
        assert_eq!(det.process_frame(Some(&open()), ms(900)), None);
    }

    #[test]
    fn first_ever_blink_needs_no_debounce() {
        let mut det = BlinkDetector::default();
        det.process_frame(Some(&closed()), Duration::ZERO);
        assert_eq!(det.blink_count(), 1);
    }
}
