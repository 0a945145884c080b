use crate::core::geom::Point;
use serde::{Deserialize, Serialize};

/// Lifecycle of a raw touch as delivered by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// A single raw touch update forwarded by the host windowing layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchEvent {
    pub id: u64,
    pub phase: TouchPhase,
    pub position: Point,
}

impl TouchEvent {
    pub fn new(id: u64, phase: TouchPhase, position: Point) -> Self {
        Self {
            id,
            phase,
            position,
        }
    }
}

/// Lifecycle of a recognized continuous gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

impl GesturePhase {
    /// Whether this phase ends the gesture (normally or not)
    pub fn is_terminal(&self) -> bool {
        matches!(self, GesturePhase::Ended | GesturePhase::Cancelled)
    }
}

/// Gestures recognized from the raw touch stream
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GestureEvent {
    /// First contact with the view. Emitted before any recognition and
    /// used to cancel a running inertial coast.
    TouchDown { position: Point },
    /// Finger drag. `translation` is the incremental screen delta since
    /// the previous pan event; `velocity` is in screen points per second
    /// and only meaningful in the `Ended` phase.
    Pan {
        phase: GesturePhase,
        translation: Point,
        velocity: Point,
    },
    /// Two-finger pinch. `scale` is the incremental factor since the
    /// previous pinch event (1.0 outside the `Changed` phase).
    Pinch { phase: GesturePhase, scale: f64 },
}

impl GestureEvent {
    /// Gets the gesture phase, if this event has one
    pub fn phase(&self) -> Option<GesturePhase> {
        match self {
            GestureEvent::TouchDown { .. } => None,
            GestureEvent::Pan { phase, .. } => Some(*phase),
            GestureEvent::Pinch { phase, .. } => Some(*phase),
        }
    }

    /// Checks if this is a pan event
    pub fn is_pan(&self) -> bool {
        matches!(self, GestureEvent::Pan { .. })
    }

    /// Checks if this is a pinch event
    pub fn is_pinch(&self) -> bool {
        matches!(self, GestureEvent::Pinch { .. })
    }

    /// Checks if this event terminates its gesture
    pub fn is_terminal(&self) -> bool {
        self.phase().map(|p| p.is_terminal()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gesture_phase_terminal() {
        assert!(!GesturePhase::Began.is_terminal());
        assert!(!GesturePhase::Changed.is_terminal());
        assert!(GesturePhase::Ended.is_terminal());
        assert!(GesturePhase::Cancelled.is_terminal());
    }

    #[test]
    fn test_gesture_event_type_checks() {
        let pan = GestureEvent::Pan {
            phase: GesturePhase::Changed,
            translation: Point::new(4.0, 2.0),
            velocity: Point::default(),
        };
        assert!(pan.is_pan());
        assert!(!pan.is_pinch());
        assert_eq!(pan.phase(), Some(GesturePhase::Changed));
        assert!(!pan.is_terminal());

        let pinch = GestureEvent::Pinch {
            phase: GesturePhase::Ended,
            scale: 1.0,
        };
        assert!(pinch.is_pinch());
        assert!(pinch.is_terminal());

        let down = GestureEvent::TouchDown {
            position: Point::new(1.0, 1.0),
        };
        assert_eq!(down.phase(), None);
        assert!(!down.is_terminal());
    }
}
