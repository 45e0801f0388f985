//! gaze_swipe — interactive entry point.

use std::io::{self, Write};
use std::time::Duration;

use gaze_swipe::app::{run, AppConfig};
use swipe_core::{BlinkConfig, SwipeConfig};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║      Gaze Swipe — blink & fingertip device swipe control     ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();
    println!("  Frames: keyboard simulation (the perception model is an");
    println!("  external collaborator; arrow keys drive a synthetic fingertip,");
    println!("  B drives the synthetic eye).");
    println!();

    let cfg = if std::env::args().any(|a| a == "--quick") {
        println!("  Quick-start: default thresholds, 0.3s cooldown, auto adb\n");
        AppConfig::default()
    } else if std::env::args().any(|a| a == "--dry-run") {
        println!("  Dry run: default thresholds, no device output\n");
        AppConfig {
            dry_run: true,
            ..AppConfig::default()
        }
    } else {
        configure_interactively()
    };

    println!();
    println!("  Opening overlay window…");
    println!();

    if let Err(e) = run(cfg) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn configure_interactively() -> AppConfig {
    println!("  Motion-swipe detector:");
    let threshold_x = read_f32("    Horizontal threshold (default 0.05): ", 0.05);
    let threshold_y = read_f32("    Vertical threshold (default 0.05): ", 0.05);

    println!("  Blink detector:");
    let ear_threshold = read_f32("    EAR blink threshold (default 0.20): ", 0.20);
    let debounce = read_secs("    Blink debounce seconds (default 0.25): ", 0.25);
    let double_window = read_secs("    Double-blink window seconds (default 0.7): ", 0.7);

    println!("  Dispatch:");
    let cooldown = read_secs("    Cooldown seconds (default 0.3): ", 0.3);
    let serial = read_line("    adb serial (blank = default device): ");
    let serial = match serial.trim() {
        "" => None,
        s => Some(s.to_string()),
    };
    let dry_run = read_line("    Dry run, no device output? [y/N]: ")
        .trim()
        .eq_ignore_ascii_case("y");

    AppConfig {
        swipe: SwipeConfig {
            threshold_x,
            threshold_y,
        },
        blink: BlinkConfig {
            ear_threshold,
            debounce,
            double_window,
        },
        cooldown,
        adb_serial: serial,
        dry_run,
    }
}

fn read_f32(prompt: &str, default: f32) -> f32 {
    let v: f32 = read_line(prompt).trim().parse().unwrap_or(default);
    v.clamp(0.0, 1.0)
}

fn read_secs(prompt: &str, default: f64) -> Duration {
    let v: f64 = read_line(prompt).trim().parse().unwrap_or(default);
    Duration::from_secs_f64(v.clamp(0.0, 10.0))
}

fn read_line(prompt: &str) -> String {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).ok();
    buf
}
