//! Interactive menu for exercising the two gesture detectors from the
//! keyboard — type fingertip coordinates or eye-openness readings and see
//! what the classifiers emit.

use std::io::{self, Write};
use std::time::Duration;

use swipe_core::{
    eye, hand, BlinkConfig, BlinkDetector, FrameProcessor, Landmark, SwipeConfig,
    SwipeTracker,
};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════╗");
    println!("║          Landmark Gesture Classifier Explorer        ║");
    println!("╚══════════════════════════════════════════════════════╝");
    println!();

    loop {
        println!("  ┌──────────────────────────────────────────────────────┐");
        println!("  │  1. Motion-swipe tracker (fingertip coordinates)     │");
        println!("  │  2. Blink detector (EAR + timestamp readings)        │");
        println!("  └──────────────────────────────────────────────────────┘");
        println!();
        let choice = read_line("Select a detector (1–2, or q to quit): ");

        match choice.trim() {
            "1" => run_swipe_session(),
            "2" => run_blink_session(),
            c if c.eq_ignore_ascii_case("q") => {
                println!("\nGoodbye!\n");
                break;
            }
            _ => println!("  ⚠  Please enter 1, 2 or q.\n"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Motion-swipe session
// ════════════════════════════════════════════════════════════════════════════

fn run_swipe_session() {
    let threshold: f32 = read_line("  Axis threshold (default 0.05): ")
        .trim()
        .parse()
        .unwrap_or(0.05);

    let mut tracker = SwipeTracker::new(SwipeConfig {
        threshold_x: threshold,
        threshold_y: threshold,
    });

    println!();
    println!("  Enter \"x y\" in [0,1] per frame, \"-\" for a frame with no");
    println!("  hand, or a blank line to return to the menu.");
    println!();

    loop {
        let line = read_line("  frame> ");
        let line = line.trim();
        if line.is_empty() {
            println!();
            return;
        }

        let result = if line == "-" {
            tracker.process_frame(None, Duration::ZERO)
        } else {
            let mut parts = line.split_whitespace();
            let x: f32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.5);
            let y: f32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.5);
            let mut set = vec![Landmark::default(); hand::LANDMARK_COUNT];
            set[hand::INDEX_FINGERTIP] = Landmark::new(x, y);
            tracker.process_frame(Some(&set), Duration::ZERO)
        };

        match result {
            Some(g) => println!("    → gesture: {}", g.as_str().to_uppercase()),
            None => println!("    → (none)"),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Blink session
// ════════════════════════════════════════════════════════════════════════════

fn run_blink_session() {
    let mut detector = BlinkDetector::new(BlinkConfig::default());

    println!();
    println!("  Enter \"EAR t_seconds\" per frame (e.g. \"0.15 0.1\"), \"-\" for");
    println!("  a frame with no face, or a blank line to return to the menu.");
    println!();

    loop {
        let line = read_line("  frame> ");
        let line = line.trim();
        if line.is_empty() {
            println!();
            return;
        }

        let result = if line == "-" {
            detector.process_frame(None, Duration::ZERO)
        } else {
            let mut parts = line.split_whitespace();
            let ear: f32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.3);
            let t: f64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
            let face = face_with_ear(ear);
            detector.process_frame(Some(&face), Duration::from_secs_f64(t.max(0.0)))
        };

        match result {
            Some(g) => println!(
                "    → gesture: {}  (blinks pending: {})",
                g.as_str().to_uppercase(),
                detector.blink_count()
            ),
            None => println!("    → (none)  blinks pending: {}", detector.blink_count()),
        }
    }
}

/// Build a minimal face mesh whose eye points measure the given EAR.
fn face_with_ear(ear: f32) -> Vec<Landmark> {
    let mut face = vec![Landmark::default(); eye::MIN_LANDMARKS];
    face[eye::OUTER] = Landmark::new(0.40, 0.50);
    face[eye::INNER] = Landmark::new(0.55, 0.50);
    let half = ear.max(0.0) * 0.15 / 2.0;
    face[eye::TOP] = Landmark::new(0.47, 0.50 - half);
    face[eye::BOTTOM] = Landmark::new(0.47, 0.50 + half);
    face
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
