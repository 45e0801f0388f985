//! The device-input boundary — where swipes leave the process.
//!
//! Delivery is fire-and-forget: a failed `adb` invocation is logged to
//! stderr and the loop carries on. Gesture cadence is human-paced, so the
//! blocking call is acceptable.

use std::process::Command;

use crate::command::SwipeCommand;

/// Anything that can perform a [`SwipeCommand`] on the controlled device.
pub trait InputSender: Send {
    fn send_swipe(&mut self, cmd: &SwipeCommand);
}

// ── adb backend ─────────────────────────────────────────────────────────────

/// Delivers swipes through `adb shell input swipe`.
pub struct AdbSender {
    /// Device serial passed as `adb -s SERIAL`, or `None` for the default
    /// (sole attached) device.
    serial: Option<String>,
}

impl AdbSender {
    pub fn new(serial: Option<String>) -> Self {
        AdbSender { serial }
    }

    /// The full adb argument vector for one swipe.
    fn args_for(&self, cmd: &SwipeCommand) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(serial) = &self.serial {
            args.push("-s".to_string());
            args.push(serial.clone());
        }
        args.extend(
            ["shell", "input", "swipe"].iter().map(|s| s.to_string()),
        );
        for v in [cmd.x1, cmd.y1, cmd.x2, cmd.y2, cmd.duration_ms] {
            args.push(v.to_string());
        }
        args
    }
}

impl InputSender for AdbSender {
    fn send_swipe(&mut self, cmd: &SwipeCommand) {
        match Command::new("adb").args(self.args_for(cmd)).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                eprintln!("[sender] adb exited with {} — swipe dropped", status);
            }
            Err(e) => {
                eprintln!("[sender] failed to run adb: {} — swipe dropped", e);
            }
        }
    }
}

// ── null backend (used when no device is available) ────────────────────────

pub struct NullSender;

impl InputSender for NullSender {
    fn send_swipe(&mut self, _cmd: &SwipeCommand) {}
}

// ── memory backend (tests, dry runs) ────────────────────────────────────────

/// Records every swipe instead of delivering it.
#[derive(Default)]
pub struct MemorySender {
    pub sent: Vec<SwipeCommand>,
}

impl MemorySender {
    pub fn new() -> Self {
        Self::default()
    }
}

impl InputSender for MemorySender {
    fn send_swipe(&mut self, cmd: &SwipeCommand) {
        self.sent.push(*cmd);
    }
}

// ════════════════════════════════════════════════════════════════════════════
// open_input_sender — probe for a device and pick a backend
// ════════════════════════════════════════════════════════════════════════════

/// Try to reach an adb device. Falls back to [`NullSender`] with a warning
/// when adb is missing or no device answers.
pub fn open_input_sender(serial: Option<String>) -> Box<dyn InputSender> {
    let mut probe = Command::new("adb");
    if let Some(s) = &serial {
        probe.args(["-s", s.as_str()]);
    }
    probe.arg("get-state");

    match probe.output() {
        Ok(out) if out.status.success() => {
            let state = String::from_utf8_lossy(&out.stdout).trim().to_string();
            eprintln!(
                "[sender] adb device ready (state: {}{})",
                state,
                serial
                    .as_deref()
                    .map(|s| format!(", serial {}", s))
                    .unwrap_or_default()
            );
            Box::new(AdbSender::new(serial))
        }
        Ok(out) => {
            let err = String::from_utf8_lossy(&out.stderr);
            eprintln!("[sender] no adb device answered: {}", err.trim());
            eprintln!("[sender] swipes will be discarded. To control a device:");
            eprintln!("         • plug in an Android device with USB debugging on");
            eprintln!("         • or start an emulator, then `adb devices`");
            Box::new(NullSender)
        }
        Err(e) => {
            eprintln!("[sender] adb not runnable: {} — using null output", e);
            eprintln!("[sender] install Android platform-tools to enable delivery.");
            Box::new(NullSender)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swipe_core::Gesture;

    #[test]
    fn adb_args_without_serial() {
        let sender = AdbSender::new(None);
        let cmd = SwipeCommand::for_gesture(Gesture::Left);
        assert_eq!(
            sender.args_for(&cmd),
            ["shell", "input", "swipe", "800", "800", "200", "800", "200"]
        );
    }

    #[test]
    fn adb_args_with_serial() {
        let sender = AdbSender::new(Some("emulator-5554".to_string()));
        let cmd = SwipeCommand::for_gesture(Gesture::Up);
        let args = sender.args_for(&cmd);
        assert_eq!(&args[..2], ["-s", "emulator-5554"]);
        assert_eq!(
            &args[2..],
            ["shell", "input", "swipe", "500", "1000", "500", "400", "200"]
        );
    }

    #[test]
    fn memory_sender_records_in_order() {
        let mut sender = MemorySender::new();
        sender.send_swipe(&SwipeCommand::for_gesture(Gesture::Up));
        sender.send_swipe(&SwipeCommand::for_gesture(Gesture::Left));
        assert_eq!(sender.sent.len(), 2);
        assert_eq!(sender.sent[0], SwipeCommand::for_gesture(Gesture::Up));
        assert_eq!(sender.sent[1], SwipeCommand::for_gesture(Gesture::Left));
    }
}
