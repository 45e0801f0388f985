//! One-shot manual swipe tool — fire a single directional swipe at the
//! attached device, bypassing the detectors. Handy for checking that adb
//! delivery works before strapping a camera to the pipeline.

use std::env;

use swipe_adb::{open_input_sender, InputSender, SwipeCommand};
use swipe_core::Gesture;

fn main() {
    let mut serial = None;
    let mut direction = None;

    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-s" | "--serial" => serial = args.next(),
            "left" => direction = Some(Gesture::Left),
            "right" => direction = Some(Gesture::Right),
            "up" => direction = Some(Gesture::Up),
            "down" => direction = Some(Gesture::Down),
            other => {
                eprintln!("Unknown argument: {}", other);
                usage();
                std::process::exit(2);
            }
        }
    }

    let Some(gesture) = direction else {
        usage();
        std::process::exit(2);
    };

    let cmd = SwipeCommand::for_gesture(gesture);
    println!(
        "Swiping {}: ({}, {}) → ({}, {}) over {} ms",
        gesture.as_str(),
        cmd.x1,
        cmd.y1,
        cmd.x2,
        cmd.y2,
        cmd.duration_ms
    );

    open_input_sender(serial).send_swipe(&cmd);
}

fn usage() {
    eprintln!("Usage: swipe_adb [-s SERIAL] <left|right|up|down>");
}
