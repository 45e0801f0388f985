//! Cooldown gating — one shared rate limit over both detectors' outputs.

use std::time::Duration;

use swipe_core::Gesture;

use crate::command::SwipeCommand;

/// Decides whether a resolved gesture fires, and maps it to its payload.
///
/// The cooldown is global, not per-gesture: a blink firing starts the
/// clock for hand swipes too. Firing is pure — actually delivering the
/// returned [`SwipeCommand`] is the caller's business.
#[derive(Debug)]
pub struct Dispatcher {
    cooldown: Duration,
    last_trigger: Duration,
}

impl Dispatcher {
    /// `now` seeds the trigger time, so a gesture arriving within the
    /// first cooldown interval after startup is suppressed.
    pub fn new(cooldown: Duration, now: Duration) -> Self {
        Dispatcher {
            cooldown,
            last_trigger: now,
        }
    }

    /// Returns the swipe to deliver, or `None` when there is no gesture
    /// or the cooldown has not elapsed.
    pub fn dispatch(&mut self, gesture: Option<Gesture>, now: Duration) -> Option<SwipeCommand> {
        let gesture = gesture?;
        if now.saturating_sub(self.last_trigger) <= self.cooldown {
            return None;
        }
        self.last_trigger = now;
        Some(SwipeCommand::for_gesture(gesture))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(ms(300), Duration::ZERO)
    }

    #[test]
    fn none_never_fires() {
        let mut d = dispatcher();
        assert_eq!(d.dispatch(None, ms(10_000)), None);
    }

    #[test]
    fn gestures_100ms_apart_fire_once() {
        let mut d = dispatcher();
        assert!(d.dispatch(Some(Gesture::Left), ms(400)).is_some());
        assert_eq!(d.dispatch(Some(Gesture::Left), ms(500)), None);
    }

    #[test]
    fn gestures_400ms_apart_both_fire() {
        let mut d = dispatcher();
        assert!(d.dispatch(Some(Gesture::Left), ms(400)).is_some());
        assert!(d.dispatch(Some(Gesture::Right), ms(800)).is_some());
    }

    #[test]
    fn startup_seed_suppresses_an_early_gesture() {
        let mut d = Dispatcher::new(ms(300), ms(1_000));
        assert_eq!(d.dispatch(Some(Gesture::Up), ms(1_100)), None);
        assert!(d.dispatch(Some(Gesture::Up), ms(1_400)).is_some());
    }

    #[test]
    fn cooldown_is_shared_across_directions() {
        let mut d = dispatcher();
        assert!(d.dispatch(Some(Gesture::Up), ms(400)).is_some());
        // A different gesture from the other detector is still gated.
        assert_eq!(d.dispatch(Some(Gesture::Left), ms(600)), None);
    }

    #[test]
    fn fired_command_carries_the_gesture_payload() {
        let mut d = dispatcher();
        let cmd = d.dispatch(Some(Gesture::Down), ms(400)).unwrap();
        assert_eq!(cmd, SwipeCommand::for_gesture(Gesture::Down));
    }

    #[test]
    fn suppressed_gesture_does_not_reset_the_clock() {
        let mut d = dispatcher();
        assert!(d.dispatch(Some(Gesture::Left), ms(400)).is_some());
        assert_eq!(d.dispatch(Some(Gesture::Left), ms(600)), None);
        // 701 ms is past 400 + 300 even though 600 ms was rejected.
        assert!(d.dispatch(Some(Gesture::Left), ms(701)).is_some());
    }
}
