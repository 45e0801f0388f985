//! Demonstrates gesture→payload mapping and cooldown gating, dry-run.

use std::time::Duration;

use swipe_adb::{Dispatcher, InputSender, MemorySender, SwipeCommand};
use swipe_core::Gesture;

fn main() {
    println!("\n=== Dispatch Demo (no device needed) ===\n");

    // ── 1. The four fixed payloads ────────────────────────────────────────
    println!("1. Payload per direction (duration 200 ms)");
    for g in [Gesture::Left, Gesture::Right, Gesture::Up, Gesture::Down] {
        let c = SwipeCommand::for_gesture(g);
        println!(
            "   {:5} : ({:>4}, {:>4}) → ({:>4}, {:>4})",
            g.as_str(),
            c.x1,
            c.y1,
            c.x2,
            c.y2
        );
    }
    println!();

    // ── 2. Cooldown gating ────────────────────────────────────────────────
    println!("2. Three gestures at t = 0.4s / 0.5s / 0.9s, cooldown 0.3s");
    let mut dispatcher = Dispatcher::new(Duration::from_millis(300), Duration::ZERO);
    let mut sender = MemorySender::new();

    for (t_ms, g) in [(400, Gesture::Left), (500, Gesture::Left), (900, Gesture::Up)] {
        let fired = dispatcher.dispatch(Some(g), Duration::from_millis(t_ms));
        match fired {
            Some(cmd) => {
                sender.send_swipe(&cmd);
                println!("   t={:.1}s {:5} → FIRED", t_ms as f32 / 1000.0, g.as_str());
            }
            None => println!(
                "   t={:.1}s {:5} → suppressed (cooldown)",
                t_ms as f32 / 1000.0,
                g.as_str()
            ),
        }
    }
    println!("\n   delivered: {} of 3\n", sender.sent.len());
}
