//! Event types delivered to the scroll components.
//!
//! Input arrives from whatever host toolkit owns the event loop; it is
//! mirrored here as plain data so the state machines never depend on a
//! concrete widget base class.

use crate::geometry::Point;

/// Event type identifier
pub type EventType = u32;

/// Common event types
pub mod event_types {
    use super::EventType;

    pub const POINTER_DOWN: EventType = 1;
    pub const POINTER_UP: EventType = 2;
    pub const POINTER_MOVE: EventType = 3;
    pub const POINTER_ENTER: EventType = 4;
    pub const POINTER_LEAVE: EventType = 5;
    pub const SCROLL: EventType = 30;
    pub const RESIZE: EventType = 40;
}

/// A pointer event in local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub event_type: EventType,
    pub position: Point,
}

impl PointerEvent {
    pub fn new(event_type: EventType, position: Point) -> Self {
        Self {
            event_type,
            position,
        }
    }
}

/// Wheel delta as reported by the host toolkit.
///
/// A classic mouse notch is ±120 on the vertical axis; trackpads report
/// finer-grained values on both axes, and shift-wheel setups report the
/// horizontal axis only.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelDelta {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl WheelDelta {
    pub const fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    /// Vertical-only delta (the common mouse wheel case).
    pub const fn vertical(delta_y: f32) -> Self {
        Self {
            delta_x: 0.0,
            delta_y,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.delta_x == 0.0 && self.delta_y == 0.0
    }
}
