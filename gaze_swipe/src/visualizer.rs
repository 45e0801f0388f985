//! Software-rendered overlay window using `minifb`.
//!
//! Layout:
//!
//! ```text
//! ┌───────────────────────────┬────────────────────────────┐
//! │                           │  EYE OPENNESS              │
//! │   HAND PANEL              │  [■■■■■□□□□□]  ear=0.28    │
//! │   (fingertip + trail,     │  threshold marker          │
//! │    normalized [0,1]²)     │                            │
//! │                           │  [flashed gesture label]   │
//! ├───────────────────────────┴────────────────────────────┤
//! │  status bar                                            │
//! │  key legend                                            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The window doubles as the simulation input device: key presses are
//! forwarded as [`SimInput`] to the frame synthesizer.

use minifb::{Key, KeyRepeat, Window, WindowOptions};

use std::sync::mpsc::Sender;

use swipe_core::Landmark;

use crate::app::AppState;
use crate::source::{SimInput, SimKey};

// ════════════════════════════════════════════════════════════════════════════
// Layout constants
// ════════════════════════════════════════════════════════════════════════════

pub const WIN_W: usize = 920;
pub const WIN_H: usize = 480;

const HAND_X: usize = 24;
const HAND_Y: usize = 48;
const HAND_SIZE: usize = 360;

const EYE_X: usize = 440;
const EYE_Y: usize = 48;
const EYE_BAR_W: usize = 320;
const EYE_BAR_H: usize = 26;
/// EAR value that fills the openness bar completely.
const EAR_FULL_SCALE: f32 = 0.40;
const EAR_THRESHOLD: f32 = 0.20;

const FLASH_X: usize = 480;
const FLASH_Y: usize = 220;

const STATUS_Y: usize = WIN_H - 52;

const BG_COLOR: u32 = 0xFF101826;
const PANEL_BG: u32 = 0xFF182436;
const PANEL_BORDER: u32 = 0xFF3A5070;
const TRAIL_COLOR: u32 = 0xFF3C96C8;
const TIP_COLOR: u32 = 0xFFFFD24A;
const BAR_COLOR: u32 = 0xFF46C88C;
const BAR_CLOSED: u32 = 0xFFD25050;
const THRESHOLD_COLOR: u32 = 0xFFFFFFFF;
const FLASH_COLOR: u32 = 0xFFFF6A5A;
const TEXT_COLOR: u32 = 0xFFDCE6F0;
const DIM_TEXT: u32 = 0xFF7890A8;
const STATUS_BG: u32 = 0xFF0C1420;

// ════════════════════════════════════════════════════════════════════════════
// Visualizer
// ════════════════════════════════════════════════════════════════════════════

pub struct Visualizer {
    window: Window,
    buf: Vec<u32>,
    sim_tx: Sender<SimInput>,
}

impl Visualizer {
    pub fn new(sim_tx: Sender<SimInput>) -> Result<Self, String> {
        let mut window = Window::new(
            "Gaze Swipe — landmark gesture control",
            WIN_W,
            WIN_H,
            WindowOptions {
                resize: false,
                ..WindowOptions::default()
            },
        )
        .map_err(|e| e.to_string())?;

        window.limit_update_rate(Some(std::time::Duration::from_millis(16))); // ~60fps

        Ok(Visualizer {
            window,
            buf: vec![BG_COLOR; WIN_W * WIN_H],
            sim_tx,
        })
    }

    /// Returns false when the window should close.
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// Poll keyboard inputs and forward them as SimInput events.
    pub fn poll_input(&mut self) -> bool {
        if !self.window.is_open() {
            return false;
        }

        // One-shot keys
        let one_shot = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::No);
        // Keys that repeat while held (continuous swiping)
        let held = |w: &Window, k: Key| w.is_key_pressed(k, KeyRepeat::Yes);

        if one_shot(&self.window, Key::Q) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Quit));
            return false;
        }
        if one_shot(&self.window, Key::B) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::Blink));
        }
        if one_shot(&self.window, Key::H) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::ToggleHand));
        }
        if one_shot(&self.window, Key::F) {
            let _ = self.sim_tx.send(SimInput::KeyDown(SimKey::ToggleFace));
        }

        for (key, sim) in [
            (Key::Left, SimKey::NudgeLeft),
            (Key::Right, SimKey::NudgeRight),
            (Key::Up, SimKey::NudgeUp),
            (Key::Down, SimKey::NudgeDown),
        ] {
            if held(&self.window, key) {
                let _ = self.sim_tx.send(SimInput::KeyDown(sim));
            }
        }

        true
    }

    /// Render one frame from the app's overlay state.
    pub fn render(&mut self, app: &AppState) {
        self.buf.fill(BG_COLOR);

        self.draw_hand_panel(app.fingertip(), app.trail().iter().copied());
        self.draw_eye_panel(app.ear());

        // ── Flashed gesture label ─────────────────────────────────────────
        if let Some(g) = app.flash() {
            self.draw_label_scaled(&g.as_str().to_uppercase(), FLASH_X, FLASH_Y, 8, FLASH_COLOR);
        }

        // ── Status bar ────────────────────────────────────────────────────
        self.fill_rect(0, STATUS_Y, WIN_W, WIN_H - STATUS_Y, STATUS_BG);
        self.draw_label(&app.status, 12, STATUS_Y + 8, TEXT_COLOR);
        self.draw_label(
            &format!("SWIPES SENT: {}", app.swipes_sent()),
            12,
            STATUS_Y + 20,
            DIM_TEXT,
        );

        // ── Key legend ────────────────────────────────────────────────────
        self.draw_label(
            "ARROWS=MOVE FINGERTIP  B=BLINK (2X=UP)  H=HAND  F=FACE  Q=QUIT",
            12,
            WIN_H - 14,
            DIM_TEXT,
        );

        self.window.update_with_buffer(&self.buf, WIN_W, WIN_H).ok();
    }

    // ── Hand panel ─────────────────────────────────────────────────────────

    fn draw_hand_panel(
        &mut self,
        tip: Option<Landmark>,
        trail: impl ExactSizeIterator<Item = Landmark>,
    ) {
        self.fill_rect(HAND_X, HAND_Y, HAND_SIZE, HAND_SIZE, PANEL_BG);
        self.draw_border(HAND_X, HAND_Y, HAND_SIZE, HAND_SIZE, PANEL_BORDER);
        self.draw_label("HAND (NORMALIZED FRAME)", HAND_X, HAND_Y - 14, DIM_TEXT);

        let to_panel = |p: Landmark| {
            let px = HAND_X + (p.x.clamp(0.0, 1.0) * (HAND_SIZE - 1) as f32) as usize;
            let py = HAND_Y + (p.y.clamp(0.0, 1.0) * (HAND_SIZE - 1) as f32) as usize;
            (px, py)
        };

        // Trail, oldest dimmest
        let n = trail.len().max(1);
        for (i, p) in trail.enumerate() {
            let (px, py) = to_panel(p);
            let fade = (i + 1) as f32 / n as f32;
            let color = dim(TRAIL_COLOR, 0.25 + 0.75 * fade);
            self.fill_rect(px.saturating_sub(1), py.saturating_sub(1), 3, 3, color);
        }

        match tip {
            Some(p) => {
                let (px, py) = to_panel(p);
                // Crosshair on the live fingertip
                self.fill_rect(px.saturating_sub(5), py, 11, 1, TIP_COLOR);
                self.fill_rect(px, py.saturating_sub(5), 1, 11, TIP_COLOR);
                self.fill_rect(px.saturating_sub(2), py.saturating_sub(2), 5, 5, TIP_COLOR);
            }
            None => {
                self.draw_label("NO HAND", HAND_X + HAND_SIZE / 2 - 16, HAND_Y + HAND_SIZE / 2, DIM_TEXT);
            }
        }
    }

    // ── Eye panel ──────────────────────────────────────────────────────────

    fn draw_eye_panel(&mut self, ear: Option<f32>) {
        self.draw_label("EYE OPENNESS", EYE_X, EYE_Y - 14, DIM_TEXT);
        self.fill_rect(EYE_X, EYE_Y, EYE_BAR_W, EYE_BAR_H, PANEL_BG);
        self.draw_border(EYE_X, EYE_Y, EYE_BAR_W, EYE_BAR_H, PANEL_BORDER);

        match ear {
            Some(ear) => {
                let frac = (ear / EAR_FULL_SCALE).clamp(0.0, 1.0);
                let w = (frac * (EYE_BAR_W - 2) as f32) as usize;
                let color = if ear < EAR_THRESHOLD { BAR_CLOSED } else { BAR_COLOR };
                self.fill_rect(EYE_X + 1, EYE_Y + 1, w, EYE_BAR_H - 2, color);

                self.draw_label(
                    &format!("EAR = {:.3}", ear),
                    EYE_X,
                    EYE_Y + EYE_BAR_H + 10,
                    TEXT_COLOR,
                );
            }
            None => {
                self.draw_label("NO FACE", EYE_X + 8, EYE_Y + 9, DIM_TEXT);
            }
        }

        // Blink threshold marker
        let tx = EYE_X + ((EAR_THRESHOLD / EAR_FULL_SCALE) * EYE_BAR_W as f32) as usize;
        self.fill_rect(tx, EYE_Y - 4, 1, EYE_BAR_H + 8, THRESHOLD_COLOR);
        self.draw_label("BLINK", tx.saturating_sub(10), EYE_Y + EYE_BAR_H + 24, DIM_TEXT);
    }

    // ── Primitive drawing helpers ─────────────────────────────────────────

    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        for row in y..(y + h).min(WIN_H) {
            let base = row * WIN_W;
            for col in x..(x + w).min(WIN_W) {
                self.buf[base + col] = color;
            }
        }
    }

    fn draw_border(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        self.fill_rect(x, y, w, 1, color);
        self.fill_rect(x, y + h - 1, w, 1, color);
        self.fill_rect(x, y, 1, h, color);
        self.fill_rect(x + w - 1, y, 1, h, color);
    }

    fn draw_label(&mut self, text: &str, x: usize, y: usize, color: u32) {
        self.draw_label_scaled(text, x, y, 1, color);
    }

    /// 3×5 bitmap font, each glyph pixel drawn `scale`×`scale`.
    fn draw_label_scaled(&mut self, text: &str, x: usize, y: usize, scale: usize, color: u32) {
        let mut cx = x;
        for ch in text.chars() {
            let bits = glyph(ch);
            for row in 0..5 {
                for col in 0..3 {
                    if bits >> ((4 - row) * 3 + (2 - col)) & 1 != 0 {
                        self.fill_rect(cx + col * scale, y + row * scale, scale, scale, color);
                    }
                }
            }
            cx += 4 * scale; // 3 wide + 1 gap
            if cx + 4 * scale > WIN_W {
                break;
            }
        }
    }
}

/// Scale a color's RGB channels toward black. `f` = 1.0 keeps the color.
fn dim(color: u32, f: f32) -> u32 {
    let f = f.clamp(0.0, 1.0);
    let ch = |c: u32| ((c & 0xFF) as f32 * f) as u32;
    0xFF000000 | (ch(color >> 16) << 16) | (ch(color >> 8) << 8) | ch(color)
}

// ────────────────────────────────────────────────────────────────────────────
// Minimal 3×5 bitmap font — 15 bits per glyph, row-major from the top
// ────────────────────────────────────────────────────────────────────────────

fn glyph(c: char) -> u16 {
    match c.to_ascii_uppercase() {
        '0' => 0b111_101_101_101_111,
        '1' => 0b010_110_010_010_111,
        '2' => 0b111_001_111_100_111,
        '3' => 0b111_001_111_001_111,
        '4' => 0b101_101_111_001_001,
        '5' => 0b111_100_111_001_111,
        '6' => 0b111_100_111_101_111,
        '7' => 0b111_001_001_001_001,
        '8' => 0b111_101_111_101_111,
        '9' => 0b111_101_111_001_111,
        'A' => 0b111_101_111_101_101,
        'B' => 0b110_101_110_101_110,
        'C' => 0b111_100_100_100_111,
        'D' => 0b110_101_101_101_110,
        'E' => 0b111_100_111_100_111,
        'F' => 0b111_100_111_100_100,
        'G' => 0b111_100_101_101_111,
        'H' => 0b101_101_111_101_101,
        'I' => 0b111_010_010_010_111,
        'J' => 0b001_001_001_101_111,
        'K' => 0b101_101_110_101_101,
        'L' => 0b100_100_100_100_111,
        'M' => 0b101_111_101_101_101,
        'N' => 0b111_101_101_101_101,
        'O' => 0b111_101_101_101_111,
        'P' => 0b111_101_111_100_100,
        'Q' => 0b111_101_101_111_001,
        'R' => 0b110_101_110_101_101,
        'S' => 0b111_100_111_001_111,
        'T' => 0b111_010_010_010_010,
        'U' => 0b101_101_101_101_111,
        'V' => 0b101_101_101_101_010,
        'W' => 0b101_101_101_111_101,
        'X' => 0b101_101_010_101_101,
        'Y' => 0b101_101_111_010_010,
        'Z' => 0b111_001_010_100_111,
        '(' => 0b010_100_100_100_010,
        ')' => 0b010_001_001_001_010,
        ',' => 0b000_000_000_010_100,
        '.' => 0b000_000_000_000_010,
        ':' => 0b000_010_000_010_000,
        '=' => 0b000_111_000_111_000,
        '-' => 0b000_000_111_000_000,
        '/' => 0b001_001_010_100_100,
        ' ' => 0,
        _ => 0b000_000_010_000_000, // fallback dot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_fit_fifteen_bits() {
        for c in "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ(),.:=-/ ?".chars() {
            assert!(glyph(c) < 1 << 15, "glyph {:?} overflows", c);
        }
    }

    #[test]
    fn lowercase_maps_to_uppercase_glyphs() {
        assert_eq!(glyph('a'), glyph('A'));
        assert_eq!(glyph('q'), glyph('Q'));
    }
}
