//! Silk Animation System
//!
//! Time-based value animation for the scroll components:
//!
//! - **Easing**: progress curves, cubic ease-out by default
//! - **Animated values**: a typed value owning its own target and timing,
//!   advanced cooperatively by the owner's tick
//! - **Settle timers**: single-shot debounce timers
//!
//! Everything here is single-threaded and driven by explicit `step(dt_ms)`
//! calls from the host event loop; there is no background ticker.

pub mod animated;
pub mod debounce;
pub mod easing;

pub use animated::AnimatedValue;
pub use debounce::SettleTimer;
pub use easing::Easing;
