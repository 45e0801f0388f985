//! # gaze_swipe
//!
//! Hands-free control loop: per-frame face/hand landmark sets are
//! classified into directional gestures and delivered to an Android
//! device as touch swipes.
//!
//! ## Gesture → swipe mapping
//!
//! | Detector | Gesture | Device swipe |
//! |---|---|---|
//! | fingertip motion | left (mirrored +x) | (800,800) → (200,800) |
//! | fingertip motion | right (mirrored −x) | (200,800) → (800,800) |
//! | double blink | up | (500,1000) → (500,400) |
//! | single blink (window lapses) | down | (500,400) → (500,1000) |
//!
//! Blink gestures take priority over hand gestures in the same frame, and
//! one global cooldown rate-limits everything.
//!
//! ## Frame sources
//!
//! The camera and landmark model are external collaborators behind the
//! [`source::LandmarkSource`] trait. Two sources ship:
//!
//! * [`source::SimLandmarkSource`] — synthesizes ~60 landmark frames per
//!   second from keyboard input, so the full pipeline runs with no camera
//!   and no device.
//! * [`source::ScriptedSource`] — replays a fixed frame sequence.
//!
//! ### Simulation keyboard shortcuts
//!
//! | Key | Effect |
//! |---|---|
//! | `←` `→` `↑` `↓` | nudge the synthetic fingertip (hold to keep swiping) |
//! | `B` | blink (press twice within 0.7 s for a double blink) |
//! | `H` | toggle hand presence |
//! | `F` | toggle face presence |
//! | `Q` | quit |

pub mod app;
pub mod source;
pub mod visualizer;
