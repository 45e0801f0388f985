//! # swipe_adb
//!
//! Turns resolved [`Gesture`](swipe_core::Gesture)s into touch swipes on an
//! Android device:
//!
//! * [`SwipeCommand`] — the fixed geometric payload per direction
//!   (start point, end point, duration).
//! * [`Dispatcher`] — a single global cooldown deciding whether a gesture
//!   fires at all. Pure decision logic, no I/O.
//! * [`InputSender`] — the device boundary. [`AdbSender`] shells out to
//!   `adb shell input swipe …`, [`NullSender`] swallows commands when no
//!   device is reachable, [`MemorySender`] records them for tests and
//!   dry runs.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use swipe_core::Gesture;
//! use swipe_adb::{open_input_sender, Dispatcher, InputSender};
//!
//! let mut sender = open_input_sender(None);
//! let mut dispatcher = Dispatcher::new(Duration::from_millis(300), Duration::ZERO);
//!
//! if let Some(cmd) = dispatcher.dispatch(Some(Gesture::Left), Duration::from_millis(400)) {
//!     sender.send_swipe(&cmd);
//! }
//! ```

pub mod command;
pub mod dispatch;
pub mod sender;

pub use command::SwipeCommand;
pub use dispatch::Dispatcher;
pub use sender::{open_input_sender, AdbSender, InputSender, MemorySender, NullSender};
