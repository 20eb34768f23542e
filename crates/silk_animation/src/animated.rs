//! Explicitly owned animated values.
//!
//! `AnimatedValue` replaces property-name animation binding: it owns its
//! current value, start, target, and timing, and is advanced by its
//! owner's tick. Starting a new animation synchronously cancels the
//! previous one, so the value never has two competing writers.

use crate::easing::Easing;

/// Duration bounds for distance-proportional animations, in milliseconds.
const MIN_AUTO_DURATION_MS: f32 = 200.0;
const MAX_AUTO_DURATION_MS: f32 = 500.0;
/// Milliseconds of animation per unit of distance travelled.
const AUTO_DURATION_PER_UNIT_MS: f32 = 5.0;

/// A numeric value driven by a time-based easing animation.
#[derive(Debug, Clone)]
pub struct AnimatedValue {
    current: f32,
    start: f32,
    target: f32,
    elapsed_ms: f32,
    duration_ms: f32,
    easing: Easing,
    running: bool,
}

impl AnimatedValue {
    pub fn new(initial: f32) -> Self {
        Self::with_easing(initial, Easing::default())
    }

    pub fn with_easing(initial: f32, easing: Easing) -> Self {
        Self {
            current: initial,
            start: initial,
            target: initial,
            elapsed_ms: 0.0,
            duration_ms: 0.0,
            easing,
            running: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn is_animating(&self) -> bool {
        self.running
    }

    /// Animate toward `target` with a duration proportional to the distance
    /// moved, clamped to `[200, 500]` ms.
    pub fn animate_to(&mut self, target: f32) {
        let distance = (target - self.current).abs();
        let duration =
            (distance * AUTO_DURATION_PER_UNIT_MS).clamp(MIN_AUTO_DURATION_MS, MAX_AUTO_DURATION_MS);
        self.animate_to_over(target, duration);
    }

    /// Animate toward `target` over an explicit duration, cancelling any
    /// in-flight animation first.
    pub fn animate_to_over(&mut self, target: f32, duration_ms: f32) {
        tracing::trace!(from = self.current, to = target, duration_ms, "animation start");
        self.start = self.current;
        self.target = target;
        self.elapsed_ms = 0.0;
        self.duration_ms = duration_ms.max(1.0);
        self.running = (target - self.current).abs() > f32::EPSILON;
        if !self.running {
            self.current = target;
        }
    }

    /// Snap to `target` with no animation, cancelling any in-flight one.
    pub fn jump_to(&mut self, target: f32) {
        self.running = false;
        self.current = target;
        self.start = target;
        self.target = target;
    }

    /// Stop animating, keeping the current value.
    pub fn cancel(&mut self) {
        self.running = false;
        self.start = self.current;
        self.target = self.current;
    }

    /// Advance by `dt_ms`. Returns true while the animation is still
    /// running. The value lands exactly on the target at completion.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        if !self.running {
            return false;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        if self.elapsed_ms >= self.duration_ms {
            self.current = self.target;
            self.running = false;
            return false;
        }
        let progress = self.easing.apply(self.elapsed_ms / self.duration_ms);
        self.current = self.start + (self.target - self.start) * progress;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Step until the animation settles, in fixed frames. Panics if it
    /// never settles within ten seconds of simulated time.
    fn run_to_completion(value: &mut AnimatedValue) -> u32 {
        let mut frames = 0;
        while value.step(16.0) {
            frames += 1;
            assert!(frames < 625, "animation did not settle");
        }
        frames
    }

    #[test]
    fn reaches_exact_target() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(137.0);
        run_to_completion(&mut value);
        assert_eq!(value.value(), 137.0);
        assert!(!value.is_animating());
    }

    #[test]
    fn auto_duration_is_distance_proportional_and_clamped() {
        let mut value = AnimatedValue::new(0.0);

        // 10 units * 5 ms/unit = 50 ms, clamped up to 200 ms.
        value.animate_to(10.0);
        assert_eq!(value.duration_ms, 200.0);

        // 60 units * 5 ms/unit = 300 ms, inside the window.
        value.jump_to(0.0);
        value.animate_to(60.0);
        assert_eq!(value.duration_ms, 300.0);

        // 500 units * 5 ms/unit = 2500 ms, clamped down to 500 ms.
        value.jump_to(0.0);
        value.animate_to(500.0);
        assert_eq!(value.duration_ms, 500.0);
    }

    #[test]
    fn jump_cancels_animation() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0);
        assert!(value.step(16.0));
        value.jump_to(42.0);
        assert!(!value.is_animating());
        assert_eq!(value.value(), 42.0);
        assert!(!value.step(16.0));
        assert_eq!(value.value(), 42.0);
    }

    #[test]
    fn restart_begins_from_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0);
        value.step(100.0);
        let mid = value.value();
        assert!(mid > 0.0 && mid < 100.0);

        value.animate_to(0.0);
        assert_eq!(value.start, mid);
        run_to_completion(&mut value);
        assert_eq!(value.value(), 0.0);
    }

    #[test]
    fn cancel_keeps_current_value() {
        let mut value = AnimatedValue::new(0.0);
        value.animate_to(100.0);
        value.step(100.0);
        let mid = value.value();
        value.cancel();
        assert!(!value.is_animating());
        assert_eq!(value.value(), mid);
        assert_eq!(value.target(), mid);
    }

    #[test]
    fn zero_distance_animation_completes_immediately() {
        let mut value = AnimatedValue::new(5.0);
        value.animate_to(5.0);
        assert!(!value.is_animating());
        assert_eq!(value.value(), 5.0);
    }

    #[test]
    fn eased_progress_is_front_loaded() {
        // Cubic ease-out covers more than half the distance by mid-flight.
        let mut value = AnimatedValue::new(0.0);
        value.animate_to_over(100.0, 400.0);
        value.step(200.0);
        assert!(value.value() > 50.0);
    }
}
