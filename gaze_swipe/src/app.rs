//! Top-level control loop.
//!
//! `AppState` owns the two detectors (behind the shared `FrameProcessor`
//! seam), the cooldown dispatcher, the device sender, and the overlay
//! state the visualizer draws from. One `handle_frame` call per captured
//! frame, fully sequential.

use std::collections::VecDeque;
use std::sync::mpsc::{self, TryRecvError};
use std::time::Duration;

use swipe_adb::{open_input_sender, Dispatcher, InputSender, NullSender, SwipeCommand};
use swipe_core::{
    hand, BlinkConfig, BlinkDetector, Clock, FrameProcessor, Gesture, Landmark,
    MonotonicClock, SwipeConfig, SwipeTracker,
};

use crate::source::{spawn_landmark_source, FrameEvent, SimLandmarkSource};
use crate::visualizer::Visualizer;

// ════════════════════════════════════════════════════════════════════════════
// AppConfig
// ════════════════════════════════════════════════════════════════════════════

/// Configuration for the full application. Every tunable of the two
/// detectors and the dispatcher is exposed here.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub swipe: SwipeConfig,
    pub blink: BlinkConfig,
    /// Minimum gap between two dispatched swipes, whichever detector
    /// produced them.
    pub cooldown: Duration,
    /// adb device serial, or `None` for the sole attached device.
    pub adb_serial: Option<String>,
    /// Classify and log, but never touch a device.
    pub dry_run: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            swipe: SwipeConfig::default(),
            blink: BlinkConfig::default(),
            cooldown: Duration::from_millis(300),
            adb_serial: None,
            dry_run: false,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// AppState
// ════════════════════════════════════════════════════════════════════════════

/// How many trail points the overlay keeps.
const TRAIL_LEN: usize = 48;
/// How many render frames a dispatched gesture stays flashed on screen.
const FLASH_FRAMES: u32 = 36;

pub struct AppState {
    // ── detection ────────────────────────────────────────────────────────
    tracker: Box<dyn FrameProcessor>,
    blink: Box<dyn FrameProcessor>,
    dispatcher: Dispatcher,
    sender: Box<dyn InputSender>,

    // ── overlay state ────────────────────────────────────────────────────
    pub status: String,
    fingertip: Option<Landmark>,
    trail: VecDeque<Landmark>,
    ear: Option<f32>,
    flash: Option<(Gesture, u32)>,
    swipes_sent: usize,
}

impl AppState {
    pub fn new(cfg: &AppConfig, sender: Box<dyn InputSender>, now: Duration) -> Self {
        AppState {
            tracker: Box::new(SwipeTracker::new(cfg.swipe)),
            blink: Box::new(BlinkDetector::new(cfg.blink)),
            dispatcher: Dispatcher::new(cfg.cooldown, now),
            sender,
            status: "Ready — waiting for landmarks".to_string(),
            fingertip: None,
            trail: VecDeque::with_capacity(TRAIL_LEN),
            ear: None,
            flash: None,
            swipes_sent: 0,
        }
    }

    // ── process one frame ─────────────────────────────────────────────────

    /// Classify one frame, dispatch at most one gesture, and return the
    /// swipe that was actually delivered (if any).
    pub fn handle_frame(&mut self, frame: &FrameEvent) -> Option<SwipeCommand> {
        let now = frame.timestamp;
        let hand_gesture = self.tracker.process_frame(frame.hand.as_deref(), now);
        let blink_gesture = self.blink.process_frame(frame.face.as_deref(), now);

        // Overlay bookkeeping.
        self.fingertip = frame
            .hand
            .as_deref()
            .and_then(|h| h.get(hand::INDEX_FINGERTIP))
            .copied();
        if let Some(tip) = self.fingertip {
            if self.trail.len() == TRAIL_LEN {
                self.trail.pop_front();
            }
            self.trail.push_back(tip);
        } else {
            self.trail.clear();
        }
        self.ear = frame.face.as_deref().and_then(BlinkDetector::eye_openness);

        // Blink gestures (up/down) take priority; the hand detector only
        // contributes horizontal swipes — a vertical fingertip motion is
        // classified but never fires a device swipe.
        let horizontal = hand_gesture.filter(|g| matches!(g, Gesture::Left | Gesture::Right));
        let gesture = blink_gesture.or(horizontal)?;

        match self.dispatcher.dispatch(Some(gesture), now) {
            Some(cmd) => {
                self.sender.send_swipe(&cmd);
                self.swipes_sent += 1;
                self.flash = Some((gesture, FLASH_FRAMES));
                self.status = format!(
                    "{} → swipe ({},{})→({},{})  total {}",
                    gesture.as_str().to_uppercase(),
                    cmd.x1,
                    cmd.y1,
                    cmd.x2,
                    cmd.y2,
                    self.swipes_sent
                );
                eprintln!("[app] {}", self.status);
                Some(cmd)
            }
            None => {
                self.status = format!("{} suppressed (cooldown)", gesture.as_str());
                None
            }
        }
    }

    // ── per-render-frame tick ─────────────────────────────────────────────

    pub fn tick(&mut self) {
        if let Some((g, left)) = self.flash {
            self.flash = if left > 1 { Some((g, left - 1)) } else { None };
        }
    }

    // ── accessors for the render loop ─────────────────────────────────────

    pub fn fingertip(&self) -> Option<Landmark> {
        self.fingertip
    }
    pub fn trail(&self) -> &VecDeque<Landmark> {
        &self.trail
    }
    pub fn ear(&self) -> Option<f32> {
        self.ear
    }
    pub fn flash(&self) -> Option<Gesture> {
        self.flash.map(|(g, _)| g)
    }
    pub fn swipes_sent(&self) -> usize {
        self.swipes_sent
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the full application: keyboard-simulated landmark source, overlay
/// window, detectors and dispatcher, at ~60 fps until the window closes
/// or `Q` is pressed.
pub fn run(cfg: AppConfig) -> Result<(), String> {
    let clock = MonotonicClock::new();

    // ── sim frame channel ─────────────────────────────────────────────────
    let (sim_tx, sim_rx) = mpsc::channel();
    let frame_rx = spawn_landmark_source(SimLandmarkSource::new(sim_rx, clock.clone()));

    // ── visualizer (owns the window and the sim input sender) ────────────
    let mut vis = Visualizer::new(sim_tx)?;

    // ── device sender ─────────────────────────────────────────────────────
    let sender: Box<dyn InputSender> = if cfg.dry_run {
        eprintln!("[app] dry run — swipes are classified but not delivered");
        Box::new(NullSender)
    } else {
        open_input_sender(cfg.adb_serial.clone())
    };

    let mut app = AppState::new(&cfg, sender, clock.now());

    // ── main loop ─────────────────────────────────────────────────────────
    while vis.is_open() {
        if !vis.poll_input() {
            break;
        }

        // Drain every frame the source produced since the last pass.
        loop {
            match frame_rx.try_recv() {
                Ok(frame) => {
                    app.handle_frame(&frame);
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => return Ok(()),
            }
        }

        app.tick();
        vis.render(&app);
    }

    Ok(())
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
