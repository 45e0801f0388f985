//! # swipe_core
//!
//! Frame-by-frame gesture classification over normalized 2D landmark
//! streams, as produced by an external face/hand perception model.
//!
//! Two small stateful detectors, both implementing [`FrameProcessor`]:
//!
//! * [`SwipeTracker`] — tracks one fingertip across frames and emits a
//!   directional gesture when the frame-to-frame displacement exceeds an
//!   axis threshold.
//! * [`BlinkDetector`] — computes an eye-openness ratio per frame, counts
//!   discrete blinks, and emits a gesture after one or two blinks within
//!   a timing window.
//!
//! No external crates are required — the detectors are pure state machines
//! over `Option<&[Landmark]>` input. Timing is injected through [`Clock`]
//! so every path is deterministically testable.
//!
//! ## Quick start
//!
//! ```rust
//! use std::time::Duration;
//! use swipe_core::{Landmark, Gesture, FrameProcessor, SwipeTracker, hand};
//!
//! let mut tracker = SwipeTracker::default();
//! let frame = |x, y| {
//!     let mut h = vec![Landmark::new(0.0, 0.0); hand::LANDMARK_COUNT];
//!     h[hand::INDEX_FINGERTIP] = Landmark::new(x, y);
//!     h
//! };
//!
//! let t = Duration::ZERO;
//! assert_eq!(tracker.process_frame(Some(&frame(0.50, 0.50)), t), None);
//! // dx = +0.10 — horizontal mapping is mirrored, so this is Left.
//! assert_eq!(
//!     tracker.process_frame(Some(&frame(0.60, 0.50)), t),
//!     Some(Gesture::Left),
//! );
//! ```

pub mod blink;
pub mod clock;
pub mod gesture;
pub mod landmark;
pub mod swipe;

pub use blink::{BlinkConfig, BlinkDetector};
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use gesture::{FrameProcessor, Gesture};
pub use landmark::{eye, hand, Landmark};
pub use swipe::{SwipeConfig, SwipeTracker};
