//! The fixed swipe geometry delivered for each gesture direction.

use swipe_core::Gesture;

/// Swipe duration sent to the device, in milliseconds.
pub const SWIPE_DURATION_MS: u32 = 200;

/// A directional touch swipe in device screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwipeCommand {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
    pub duration_ms: u32,
}

impl SwipeCommand {
    /// The payload for one gesture. Horizontal gestures swipe along
    /// y = 800, vertical ones along x = 500; all take
    /// [`SWIPE_DURATION_MS`].
    pub fn for_gesture(gesture: Gesture) -> Self {
        let (x1, y1, x2, y2) = match gesture {
            Gesture::Left => (800, 800, 200, 800),
            Gesture::Right => (200, 800, 800, 800),
            Gesture::Up => (500, 1000, 500, 400),
            Gesture::Down => (500, 400, 500, 1000),
        };
        SwipeCommand {
            x1,
            y1,
            x2,
            y2,
            duration_ms: SWIPE_DURATION_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_swipes_right_to_left() {
        let c = SwipeCommand::for_gesture(Gesture::Left);
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (800, 800, 200, 800));
    }

    #[test]
    fn right_swipes_left_to_right() {
        let c = SwipeCommand::for_gesture(Gesture::Right);
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (200, 800, 800, 800));
    }

    #[test]
    fn up_swipes_bottom_to_top() {
        let c = SwipeCommand::for_gesture(Gesture::Up);
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (500, 1000, 500, 400));
    }

    #[test]
    fn down_swipes_top_to_bottom() {
        let c = SwipeCommand::for_gesture(Gesture::Down);
        assert_eq!((c.x1, c.y1, c.x2, c.y2), (500, 400, 500, 1000));
    }

    #[test]
    fn every_gesture_uses_the_fixed_duration() {
        for g in [Gesture::Left, Gesture::Right, Gesture::Up, Gesture::Down] {
            assert_eq!(SwipeCommand::for_gesture(g).duration_ms, 200);
        }
    }
}
