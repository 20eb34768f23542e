//! Silk Scroll Subsystem
//!
//! A custom scrollbar pair that replaces a host view's native bars while
//! keeping the native scroll position as the source of truth:
//!
//! - [`ScrollBar`]: one axis worth of interaction state: press/drag/release,
//!   animated page jumps, immediate wheel scrolling, debounced hover
//!   expansion
//! - [`TrackGeometry`]: pure pixel math for groove, handle, and slide lengths
//! - [`SyncBridge`]: change-suppressed two-way binding between a bar and the
//!   hosted view
//! - [`ScrollDelegate`]: wheel interception and policy forcing for the whole
//!   viewport
//!
//! Everything is single-threaded and event-driven; animations and debounce
//! timers are advanced by explicit `step(dt_ms)` calls from the host event
//! loop.

pub mod bar;
pub mod bridge;
pub mod config;
pub mod delegate;
pub mod geometry;
pub mod range;
pub mod scrollable;

pub use bar::{ScrollBar, ScrollBarHit};
pub use bridge::{SharedScrollable, SyncBridge};
pub use config::ScrollBarConfig;
pub use delegate::ScrollDelegate;
pub use geometry::TrackGeometry;
pub use range::ScrollRange;
pub use scrollable::{ScrollBarPolicy, Scrollable};
