//! Demonstrates both detectors on scripted landmark sequences.

use std::time::Duration;

use swipe_core::{
    eye, hand, BlinkDetector, FrameProcessor, Gesture, Landmark, SwipeTracker,
};

fn hand_at(x: f32, y: f32) -> Vec<Landmark> {
    let mut set = vec![Landmark::default(); hand::LANDMARK_COUNT];
    set[hand::INDEX_FINGERTIP] = Landmark::new(x, y);
    set
}

fn face_with_ear(ear: f32) -> Vec<Landmark> {
    let mut face = vec![Landmark::default(); eye::MIN_LANDMARKS];
    face[eye::OUTER] = Landmark::new(0.40, 0.50);
    face[eye::INNER] = Landmark::new(0.55, 0.50);
    let half = ear * 0.15 / 2.0;
    face[eye::TOP] = Landmark::new(0.47, 0.50 - half);
    face[eye::BOTTOM] = Landmark::new(0.47, 0.50 + half);
    face
}

fn show(label: &str, g: Option<Gesture>) {
    match g {
        Some(g) => println!("   {:28} → {}", label, g.as_str().to_uppercase()),
        None => println!("   {:28} → (none)", label),
    }
}

fn main() {
    println!("\n=== Gesture Classifier Demo ===\n");

    // ── 1. A horizontal swipe, mirrored ───────────────────────────────────
    println!("1. Fingertip sweeping toward +x (mirrored to LEFT)");
    let mut tracker = SwipeTracker::default();
    let t = Duration::ZERO;
    show("(0.50, 0.50) baseline", tracker.process_frame(Some(&hand_at(0.50, 0.50)), t));
    show("(0.60, 0.50) dx=+0.10", tracker.process_frame(Some(&hand_at(0.60, 0.50)), t));
    show("(0.70, 0.50) dx=+0.10", tracker.process_frame(Some(&hand_at(0.70, 0.50)), t));
    println!();

    // ── 2. Hand dropout re-baselines ──────────────────────────────────────
    println!("2. Hand disappears for one frame, then jumps across the frame");
    show("no hand", tracker.process_frame(None, t));
    show("(0.10, 0.50) reappears", tracker.process_frame(Some(&hand_at(0.10, 0.50)), t));
    show("(0.10, 0.62) dy=+0.12", tracker.process_frame(Some(&hand_at(0.10, 0.62)), t));
    println!();

    // ── 3. Single blink resolves Down after the window ────────────────────
    println!("3. One blink, no follow-up (EAR 0.25 / 0.15 / 0.25)");
    let mut blink = BlinkDetector::default();
    show("t=0.0s EAR 0.25", blink.process_frame(Some(&face_with_ear(0.25)), Duration::from_millis(0)));
    show("t=0.1s EAR 0.15 (blink)", blink.process_frame(Some(&face_with_ear(0.15)), Duration::from_millis(100)));
    show("t=0.9s EAR 0.25", blink.process_frame(Some(&face_with_ear(0.25)), Duration::from_millis(900)));
    println!();

    // ── 4. Double blink resolves Up immediately ───────────────────────────
    println!("4. Two blinks 300 ms apart");
    let mut blink = BlinkDetector::default();
    show("t=0.0s EAR 0.10 (blink)", blink.process_frame(Some(&face_with_ear(0.10)), Duration::from_millis(0)));
    show("t=0.15s EAR 0.30", blink.process_frame(Some(&face_with_ear(0.30)), Duration::from_millis(150)));
    show("t=0.3s EAR 0.10 (blink)", blink.process_frame(Some(&face_with_ear(0.10)), Duration::from_millis(300)));
    println!();
}
