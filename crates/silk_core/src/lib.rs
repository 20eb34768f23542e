//! Silk Core Primitives
//!
//! Foundational pieces shared by the Silk scroll components:
//!
//! - **Geometry**: points and scroll-axis orientation
//! - **Events**: toolkit-agnostic event type constants and payloads
//! - **Listeners**: ordered observer lists replacing signal/slot wiring

pub mod events;
pub mod geometry;
pub mod listener;

pub use events::{event_types, EventType, PointerEvent, WheelDelta};
pub use geometry::{Orientation, Point};
pub use listener::{ListenerId, Listeners};
