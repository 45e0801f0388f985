//! Landmark frame sources — where per-frame landmark sets come from.
//!
//! The public interface is [`FrameEvent`] delivered over a `mpsc` channel.
//! Consumers don't care whether frames came from a real perception model
//! or the keyboard simulator.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::Duration;

use swipe_core::{eye, hand, Clock, Landmark, MonotonicClock};

// ════════════════════════════════════════════════════════════════════════════
// FrameEvent
// ════════════════════════════════════════════════════════════════════════════

/// One frame's worth of perception output: zero-or-one hand landmark set,
/// zero-or-one face landmark set, and the capture timestamp.
#[derive(Clone, Debug)]
pub struct FrameEvent {
    pub hand: Option<Vec<Landmark>>,
    pub face: Option<Vec<Landmark>>,
    pub timestamp: Duration,
}

// ════════════════════════════════════════════════════════════════════════════
// LandmarkSource trait — unified interface for perception and simulation
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can deliver [`FrameEvent`]s over a channel.
pub trait LandmarkSource: Send + 'static {
    fn run(self: Box<Self>, tx: Sender<FrameEvent>);
}

/// Spawn a landmark source on its own thread and return the receiving end.
pub fn spawn_landmark_source<S: LandmarkSource>(source: S) -> Receiver<FrameEvent> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || Box::new(source).run(tx));
    rx
}

// ════════════════════════════════════════════════════════════════════════════
// Synthetic landmark sets
// ════════════════════════════════════════════════════════════════════════════

/// A full 21-point hand set with the index fingertip at `tip`.
pub fn synthetic_hand(tip: Landmark) -> Vec<Landmark> {
    vec![tip; hand::LANDMARK_COUNT]
}

/// A face set whose four eye points measure exactly `ear`, using a
/// 0.15-wide eye centered in the frame.
pub fn synthetic_face(ear: f32) -> Vec<Landmark> {
    const EYE_WIDTH: f32 = 0.15;
    let mut face = vec![Landmark::default(); eye::MIN_LANDMARKS];
    face[eye::OUTER] = Landmark::new(0.425, 0.5);
    face[eye::INNER] = Landmark::new(0.425 + EYE_WIDTH, 0.5);
    let half = ear.max(0.0) * EYE_WIDTH / 2.0;
    face[eye::TOP] = Landmark::new(0.5, 0.5 - half);
    face[eye::BOTTOM] = Landmark::new(0.5, 0.5 + half);
    face
}

// ════════════════════════════════════════════════════════════════════════════
// SimLandmarkSource — keyboard-driven synthesis (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimInput {
    KeyDown(SimKey),
}

/// Simulated key codes (mapped from minifb keys by the visualizer).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SimKey {
    NudgeLeft,  // ←
    NudgeRight, // →
    NudgeUp,    // ↑
    NudgeDown,  // ↓
    Blink,      // B
    ToggleHand, // H
    ToggleFace, // F
    Quit,       // Q
}

/// Synthesizes landmark frames at ~60 fps from [`SimInput`] events.
///
/// A synthetic fingertip starts at frame center; each nudge moves it by
/// more than the default swipe threshold, so holding an arrow key streams
/// swipe gestures through the real detectors. Vertical nudges exercise
/// the motion detector only — up/down swipes are reserved for blinks.
/// A blink closes the synthetic eye for a handful of frames.
pub struct SimLandmarkSource {
    rx: Receiver<SimInput>,
    clock: MonotonicClock,
}

impl SimLandmarkSource {
    pub fn new(rx: Receiver<SimInput>, clock: MonotonicClock) -> Self {
        SimLandmarkSource { rx, clock }
    }
}

/// Fingertip movement per nudge — comfortably above the 0.05 threshold.
const NUDGE: f32 = 0.08;
/// Frames the synthetic eye stays shut after a blink key press.
const BLINK_FRAMES: u32 = 6;
const EAR_OPEN: f32 = 0.28;
const EAR_CLOSED: f32 = 0.08;

impl LandmarkSource for SimLandmarkSource {
    fn run(self: Box<Self>, tx: Sender<FrameEvent>) {
        let mut tip = Landmark::new(0.5, 0.5);
        let mut hand_visible = true;
        let mut face_visible = true;
        let mut eye_shut_for = 0u32;

        loop {
            // ── drain pending key events ──────────────────────────────────
            let (mut dx, mut dy) = (0.0f32, 0.0f32);
            loop {
                match self.rx.try_recv() {
                    Ok(SimInput::KeyDown(key)) => match key {
                        SimKey::NudgeLeft => dx -= NUDGE,
                        SimKey::NudgeRight => dx += NUDGE,
                        SimKey::NudgeUp => dy -= NUDGE,
                        SimKey::NudgeDown => dy += NUDGE,
                        SimKey::Blink => eye_shut_for = BLINK_FRAMES,
                        SimKey::ToggleHand => hand_visible = !hand_visible,
                        SimKey::ToggleFace => face_visible = !face_visible,
                        SimKey::Quit => return,
                    },
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => return,
                }
            }

            // ── synthesize this frame ─────────────────────────────────────
            tip = Landmark::new(
                (tip.x + dx).clamp(0.05, 0.95),
                (tip.y + dy).clamp(0.05, 0.95),
            );

            let ear = if eye_shut_for > 0 {
                eye_shut_for -= 1;
                EAR_CLOSED
            } else {
                EAR_OPEN
            };

            let frame = FrameEvent {
                hand: hand_visible.then(|| synthetic_hand(tip)),
                face: face_visible.then(|| synthetic_face(ear)),
                timestamp: self.clock.now(),
            };
            if tx.send(frame).is_err() {
                return;
            }

            thread::sleep(Duration::from_millis(16)); // ~60 fps
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ScriptedSource — replay a fixed frame sequence
// ════════════════════════════════════════════════════════════════════════════

/// Delivers a pre-built frame sequence as fast as the consumer drains it.
pub struct ScriptedSource {
    pub frames: Vec<FrameEvent>,
}

impl LandmarkSource for ScriptedSource {
    fn run(self: Box<Self>, tx: Sender<FrameEvent>) {
        for frame in self.frames {
            if tx.send(frame).is_err() {
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_core::BlinkDetector;

    #[test]
    fn synthetic_face_measures_the_requested_ear() {
        for want in [0.08, 0.20, 0.28] {
            let got = BlinkDetector::eye_openness(&synthetic_face(want)).unwrap();
            assert!((got - want).abs() < 1e-4, "ear {} measured {}", want, got);
        }
    }

    #[test]
    fn synthetic_hand_places_the_fingertip() {
        let tip = Landmark::new(0.3, 0.7);
        let set = synthetic_hand(tip);
        assert_eq!(set.len(), hand::LANDMARK_COUNT);
        assert_eq!(set[hand::INDEX_FINGERTIP], tip);
    }

    #[test]
    fn scripted_source_replays_in_order() {
        let frames: Vec<FrameEvent> = (0..4)
            .map(|i| FrameEvent {
                hand: None,
                face: None,
                timestamp: Duration::from_millis(i * 100),
            })
            .collect();
        let rx = spawn_landmark_source(ScriptedSource { frames });

        let mut stamps = Vec::new();
        while let Ok(f) = rx.recv() {
            stamps.push(f.timestamp.as_millis());
        }
        assert_eq!(stamps, vec![0, 100, 200, 300]);
    }
}
