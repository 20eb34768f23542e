//! One scrollbar: input state machine, animated value, hover fade.
//!
//! A `ScrollBar` owns one axis. Pressing the handle starts a drag session
//! with 1:1 tracking; pressing the slidable track starts an animated page
//! jump; wheel input moves the value immediately. Hover expansion is an
//! orthogonal sub-state debounced through a single-shot settle timer so
//! fast pointer traversal never flickers the groove.

use silk_animation::{AnimatedValue, Easing, SettleTimer};
use silk_core::{ListenerId, Listeners, Orientation, Point};

use crate::config::ScrollBarConfig;
use crate::geometry::TrackGeometry;
use crate::range::ScrollRange;
use crate::scrollable::ScrollBarPolicy;

/// Transient drag state, created on press and destroyed on release.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    pressed_pos: Point,
    pressed_value: i32,
}

/// Press half of the interaction state machine.
///
/// `Idle → PressedOnHandle → Idle` (drag) or `Idle → PressedOnTrack → Idle`
/// (animated page jump). A track press never converts into a drag; tracking
/// stays suppressed until the next press lands on the handle.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PressState {
    Idle,
    /// Handle grabbed; drag deltas track 1:1 with no animation.
    PressedOnHandle(DragSession),
    /// Track pressed off the handle; an animated jump is in flight.
    PressedOnTrack,
}

/// What a pointer position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBarHit {
    Handle,
    /// Slidable track region, off the handle.
    Track,
    /// Decorative end padding (arrow buttons); presses here are ignored.
    Padding,
}

/// A custom scrollbar for one axis.
pub struct ScrollBar {
    orientation: Orientation,
    config: ScrollBarConfig,
    range: ScrollRange,
    geometry: TrackGeometry,
    /// Animated logical value; `committed` holds the rounded value
    /// observers have seen.
    value: AnimatedValue,
    committed: i32,
    /// Fractional wheel input carried into the next event.
    wheel_remainder: f32,
    press: PressState,
    hovered: bool,
    expanded: bool,
    settle: SettleTimer,
    opacity: AnimatedValue,
    policy: ScrollBarPolicy,
    single_step: i32,
    page_step: i32,
    value_changed: Listeners<i32>,
    range_changed: Listeners<(i32, i32)>,
    moved: Listeners<i32>,
    released: Listeners<()>,
}

impl ScrollBar {
    pub fn new(orientation: Orientation, config: ScrollBarConfig) -> Self {
        Self {
            orientation,
            config,
            range: ScrollRange::default(),
            geometry: TrackGeometry::new(config.padding, config.min_handle_length),
            value: AnimatedValue::with_easing(0.0, Easing::EaseOutCubic),
            committed: 0,
            wheel_remainder: 0.0,
            press: PressState::Idle,
            hovered: false,
            expanded: false,
            settle: SettleTimer::new(),
            opacity: AnimatedValue::with_easing(0.0, Easing::Linear),
            policy: ScrollBarPolicy::AsNeeded,
            single_step: config.single_step,
            page_step: config.page_step,
            value_changed: Listeners::new(),
            range_changed: Listeners::new(),
            moved: Listeners::new(),
            released: Listeners::new(),
        }
    }

    // =========================================================================
    // Observation
    // =========================================================================

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn value(&self) -> i32 {
        self.committed
    }

    pub fn minimum(&self) -> i32 {
        self.range.minimum()
    }

    pub fn maximum(&self) -> i32 {
        self.range.maximum()
    }

    pub fn range(&self) -> ScrollRange {
        self.range
    }

    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &ScrollBarConfig {
        &self.config
    }

    pub fn is_pressed(&self) -> bool {
        !matches!(self.press, PressState::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.press, PressState::PressedOnHandle(_))
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Groove opacity for rendering, `0.0..=1.0`.
    pub fn opacity(&self) -> f32 {
        self.opacity.value()
    }

    pub fn is_animating(&self) -> bool {
        self.value.is_animating()
    }

    /// Visibility contract: scrollable content unless the policy forces a
    /// different answer.
    pub fn is_visible(&self) -> bool {
        match self.policy {
            ScrollBarPolicy::AlwaysOff => false,
            ScrollBarPolicy::AlwaysOn => true,
            ScrollBarPolicy::AsNeeded => self.range.is_scrollable(),
        }
    }

    pub fn policy(&self) -> ScrollBarPolicy {
        self.policy
    }

    /// Handle length in pixels under the current range and viewport.
    pub fn handle_length(&self) -> f32 {
        self.geometry.handle_length(self.range)
    }

    /// Track coordinate of the handle's leading edge.
    pub fn handle_offset(&self) -> f32 {
        self.geometry.padding + self.geometry.value_to_offset(self.committed, self.range)
    }

    // =========================================================================
    // Notifications
    // =========================================================================

    pub fn on_value_changed<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&i32) + Send + 'static,
    {
        self.value_changed.subscribe(callback)
    }

    pub fn on_range_changed<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&(i32, i32)) + Send + 'static,
    {
        self.range_changed.subscribe(callback)
    }

    pub fn on_moved<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&i32) + Send + 'static,
    {
        self.moved.subscribe(callback)
    }

    pub fn on_released<F>(&mut self, callback: F) -> ListenerId
    where
        F: FnMut(&()) + Send + 'static,
    {
        self.released.subscribe(callback)
    }

    // =========================================================================
    // Range and value
    // =========================================================================

    /// Mirror the host's range. Inverted or unchanged ranges are no-ops.
    /// Clamps the current value immediately so observers never see it out
    /// of range.
    pub fn set_range(&mut self, minimum: i32, maximum: i32) -> bool {
        if !self.range.set(minimum, maximum) {
            return false;
        }

        let clamped = self.range.clamp(self.committed);
        if clamped != self.committed {
            self.value.jump_to(clamped as f32);
            self.commit_value();
        } else if self.value.is_animating() {
            // An in-flight jump may now be aiming outside the range.
            let target = self.range.clamp(self.value.target().round() as i32);
            if target as f32 != self.value.target() {
                self.value.animate_to(target as f32);
            }
        }

        tracing::trace!(minimum, maximum, value = self.committed, "range changed");
        self.range_changed.emit(&(minimum, maximum));
        true
    }

    /// Animated programmatic scroll. The target is clamped, never rejected.
    pub fn set_value(&mut self, value: i32) {
        let target = self.range.clamp(value);
        if target == self.committed && !self.value.is_animating() {
            return;
        }
        self.value.animate_to(target as f32);
    }

    /// Immediate scroll, cancelling any in-flight animation. Used for wheel
    /// input, drag tracking, and mirroring external changes.
    pub fn set_value_immediately(&mut self, value: i32) {
        let target = self.range.clamp(value);
        self.value.jump_to(target as f32);
        self.commit_value();
    }

    /// Refresh the cached track metrics. Must be called on every host
    /// resize; handle length depends on the viewport as much as the range.
    pub fn set_viewport_metrics(&mut self, track_length: f32, viewport_extent: f32) {
        self.geometry.track_length = track_length;
        self.geometry.viewport_extent = viewport_extent;
    }

    pub fn set_policy(&mut self, policy: ScrollBarPolicy) {
        self.policy = policy;
    }

    pub fn set_page_step(&mut self, step: i32) {
        if step >= 1 {
            self.page_step = step;
        }
    }

    pub fn set_single_step(&mut self, step: i32) {
        if step >= 1 {
            self.single_step = step;
        }
    }

    /// Animated scroll up/left by one page (arrow-button page click).
    pub fn page_up(&mut self) {
        self.set_value(self.committed - self.page_step);
    }

    /// Animated scroll down/right by one page.
    pub fn page_down(&mut self) {
        self.set_value(self.committed + self.page_step);
    }

    /// Animated scroll by one line step.
    pub fn line_up(&mut self) {
        self.set_value(self.committed - self.single_step);
    }

    pub fn line_down(&mut self) {
        self.set_value(self.committed + self.single_step);
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// What `pos` (local coordinates) lands on.
    pub fn hit_test(&self, pos: Point) -> ScrollBarHit {
        let main = self.orientation.main(pos);
        if !self.geometry.in_slide_region(main) {
            return ScrollBarHit::Padding;
        }
        let handle_start = self.handle_offset();
        let handle_end = handle_start + self.handle_length();
        if main >= handle_start && main <= handle_end {
            ScrollBarHit::Handle
        } else {
            ScrollBarHit::Track
        }
    }

    /// Press. On the handle: start a drag session. On the slidable track:
    /// animated page jump landing the handle's center under the pointer.
    /// On the end padding: ignored.
    pub fn pointer_down(&mut self, pos: Point) -> ScrollBarHit {
        let hit = self.hit_test(pos);
        match hit {
            ScrollBarHit::Handle => {
                // Direct manipulation must not fight an in-flight animation.
                self.value.cancel();
                self.commit_value();
                self.press = PressState::PressedOnHandle(DragSession {
                    pressed_pos: pos,
                    pressed_value: self.committed,
                });
            }
            ScrollBarHit::Track => {
                let groove_pos =
                    (self.orientation.main(pos) - self.geometry.padding).clamp(0.0, self.geometry.groove_length());
                let slide = self.geometry.slide_length(self.range);
                let centered = (groove_pos - self.handle_length() / 2.0).clamp(0.0, slide);
                let target = self.geometry.offset_to_value(centered, self.range);
                tracing::trace!(target, "page jump");
                self.value.animate_to(target as f32);
                self.press = PressState::PressedOnTrack;
            }
            ScrollBarHit::Padding => {}
        }
        hit
    }

    /// Drag tracking; only a handle press tracks. 1:1, no animation.
    pub fn pointer_move(&mut self, pos: Point) {
        let PressState::PressedOnHandle(session) = self.press else {
            return;
        };
        let delta = self.orientation.main(pos) - self.orientation.main(session.pressed_pos);
        let slide = self.geometry.slide_length(self.range).max(1.0);
        let delta_value = delta / slide * self.range.span() as f32;
        let new_value = self.range.clamp(session.pressed_value + delta_value.round() as i32);
        if new_value != self.committed {
            self.value.jump_to(new_value as f32);
            self.commit_value();
            self.moved.emit(&new_value);
        }
    }

    /// Release: back to idle from either pressed sub-state, one `released`
    /// notification.
    pub fn pointer_up(&mut self) {
        if matches!(self.press, PressState::Idle) {
            return;
        }
        self.press = PressState::Idle;
        self.released.emit(&());
    }

    /// Wheel input: immediate, no easing. One delta unit moves
    /// `wheel_scale` logical units. Scaled deltas accumulate across
    /// events: the integer part moves the value and the fractional
    /// remainder carries over, so fine trackpad ticks are never lost.
    pub fn wheel(&mut self, delta: f32) {
        let total = delta * self.config.wheel_scale + self.wheel_remainder;
        let step = total.trunc() as i32;
        self.wheel_remainder = total - step as f32;
        if step == 0 {
            return;
        }
        self.set_value_immediately(self.committed - step);
    }

    /// Hover transitions re-arm the settle timer; expansion only flips when
    /// the timer fires without an opposing transition in between.
    pub fn hover_enter(&mut self) {
        self.hovered = true;
        self.settle.arm(self.config.hover_settle_delay_ms);
    }

    pub fn hover_leave(&mut self) {
        self.hovered = false;
        self.settle.arm(self.config.hover_settle_delay_ms);
    }

    // =========================================================================
    // Ticking
    // =========================================================================

    /// Advance animations and timers by `dt_ms`. Returns true while
    /// anything is still in flight.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        let value_active = self.value.step(dt_ms);
        self.commit_value();

        if self.settle.step(dt_ms) {
            if self.hovered && !self.expanded {
                self.expand();
            } else if !self.hovered && self.expanded {
                self.collapse();
            }
        }
        let fade_active = self.opacity.step(dt_ms);

        value_active || fade_active || self.settle.is_pending()
    }

    fn expand(&mut self) {
        self.expanded = true;
        self.opacity.animate_to_over(1.0, self.config.fade_duration_ms);
    }

    fn collapse(&mut self) {
        self.expanded = false;
        self.opacity.animate_to_over(0.0, self.config.fade_duration_ms);
    }

    /// Publish the rounded animated value if it moved since the last commit.
    fn commit_value(&mut self) {
        let rounded = self.range.clamp(self.value.value().round() as i32);
        if rounded != self.committed {
            self.committed = rounded;
            self.value_changed.emit(&rounded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// range (0, 100), viewport 100px, track 300px, padding 15px:
    /// groove 270, handle 135, slide 135.
    fn reference_bar() -> ScrollBar {
        let mut bar = ScrollBar::new(Orientation::Vertical, ScrollBarConfig::default());
        bar.set_viewport_metrics(300.0, 100.0);
        bar.set_range(0, 100);
        bar
    }

    fn settle(bar: &mut ScrollBar) {
        let mut frames = 0;
        while bar.step(16.0) {
            frames += 1;
            assert!(frames < 625, "bar never settled");
        }
    }

    fn point(main: f32) -> Point {
        Point::new(6.0, main)
    }

    #[test]
    fn wheel_is_immediate_and_clamped() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        // One notch, 1:1 scale: 50 - 120 clamps to 0.
        bar.wheel(120.0);
        assert_eq!(bar.value(), 0);
        assert!(!bar.is_animating());

        bar.wheel(-120.0);
        assert_eq!(bar.value(), 100);
    }

    #[test]
    fn fine_wheel_deltas_accumulate_across_events() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        // Ten trackpad ticks of 0.4 units each: 4 logical units in total.
        // Each tick alone is below one unit; the carry makes them land.
        for _ in 0..10 {
            bar.wheel(-0.4);
        }
        assert_eq!(bar.value(), 54);

        // The carried remainder participates in the next coarse event.
        bar.wheel(1.5);
        assert_eq!(bar.value(), 53);
    }

    #[test]
    fn hit_testing_splits_track_handle_and_padding() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        // handle leading edge = 15 + 135 * 50/100 = 82.5, length 135
        assert_eq!(bar.hit_test(point(5.0)), ScrollBarHit::Padding);
        assert_eq!(bar.hit_test(point(295.0)), ScrollBarHit::Padding);
        assert_eq!(bar.hit_test(point(100.0)), ScrollBarHit::Handle);
        assert_eq!(bar.hit_test(point(217.0)), ScrollBarHit::Handle);
        assert_eq!(bar.hit_test(point(20.0)), ScrollBarHit::Track);
        assert_eq!(bar.hit_test(point(250.0)), ScrollBarHit::Track);
    }

    #[test]
    fn drag_tracks_one_to_one() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        let moved = Arc::new(Mutex::new(Vec::new()));
        {
            let moved = Arc::clone(&moved);
            bar.on_moved(move |v| moved.lock().unwrap().push(*v));
        }

        assert_eq!(bar.pointer_down(point(100.0)), ScrollBarHit::Handle);
        assert!(bar.is_dragging());

        // 13.5px over a 135px slide on a span of 100 = 10 logical units.
        bar.pointer_move(point(113.5));
        assert_eq!(bar.value(), 60);
        bar.pointer_move(point(87.0));
        assert_eq!(bar.value(), 40);

        bar.pointer_up();
        assert!(!bar.is_pressed());
        assert_eq!(*moved.lock().unwrap(), vec![60, 40]);
    }

    #[test]
    fn zero_movement_drag_emits_one_release_and_no_moves() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        let moved = Arc::new(Mutex::new(0u32));
        let released = Arc::new(Mutex::new(0u32));
        {
            let moved = Arc::clone(&moved);
            bar.on_moved(move |_| *moved.lock().unwrap() += 1);
        }
        {
            let released = Arc::clone(&released);
            bar.on_released(move |_| *released.lock().unwrap() += 1);
        }

        bar.pointer_down(point(100.0));
        bar.pointer_move(point(100.0));
        bar.pointer_up();

        assert_eq!(bar.value(), 50);
        assert_eq!(*moved.lock().unwrap(), 0);
        assert_eq!(*released.lock().unwrap(), 1);
    }

    #[test]
    fn track_press_jumps_animated_with_handle_centered() {
        let mut bar = reference_bar();
        bar.set_value_immediately(0);

        // Track press near the far end: desired leading edge clamps to the
        // slide length, so the target is the maximum.
        assert_eq!(bar.pointer_down(point(280.0)), ScrollBarHit::Track);
        assert!(bar.is_animating());
        assert!(bar.is_pressed());
        assert!(!bar.is_dragging());
        assert_eq!(bar.value(), 0, "jump is eased, not instant");

        // Movement while pressed on the track is suppressed.
        bar.pointer_move(point(150.0));
        settle(&mut bar);
        assert_eq!(bar.value(), 100);

        bar.pointer_up();
        assert!(!bar.is_pressed());
    }

    #[test]
    fn track_press_centers_handle_under_pointer() {
        let mut bar = reference_bar();
        bar.set_value_immediately(100);

        // Pointer at track coordinate 97.5: groove position 82.5, minus
        // half the 135px handle clamps to 15px of slide -> value 11.
        bar.pointer_down(point(97.5));
        settle(&mut bar);
        assert_eq!(bar.value(), 11);
    }

    #[test]
    fn padding_press_is_ignored() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);

        let released = Arc::new(Mutex::new(0u32));
        {
            let released = Arc::clone(&released);
            bar.on_released(move |_| *released.lock().unwrap() += 1);
        }

        assert_eq!(bar.pointer_down(point(3.0)), ScrollBarHit::Padding);
        assert!(!bar.is_pressed());
        bar.pointer_up();
        assert_eq!(*released.lock().unwrap(), 0);
    }

    #[test]
    fn handle_press_cancels_in_flight_animation() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);
        bar.set_value(100);
        assert!(bar.is_animating());

        // Press lands on the handle at its current (not target) position.
        bar.pointer_down(point(100.0));
        assert!(!bar.is_animating());
        assert!(bar.is_dragging());
        assert_eq!(bar.value(), 50);
    }

    #[test]
    fn range_shrink_clamps_value_immediately() {
        let mut bar = reference_bar();
        bar.set_value_immediately(80);

        let seen = Arc::new(Mutex::new(Vec::new()));
        {
            let seen = Arc::clone(&seen);
            bar.on_value_changed(move |v| seen.lock().unwrap().push(*v));
        }

        assert!(bar.set_range(0, 50));
        assert_eq!(bar.value(), 50);
        assert_eq!(*seen.lock().unwrap(), vec![50]);
    }

    #[test]
    fn range_change_mid_drag_keeps_the_session() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);
        bar.pointer_down(point(100.0));

        bar.set_range(0, 60);
        assert!(bar.is_dragging());
        assert_eq!(bar.value(), 50);

        // The pressed baseline survives; outputs clamp to the new range.
        bar.pointer_move(point(180.0));
        assert_eq!(bar.value(), 60);
    }

    #[test]
    fn value_stays_in_range_after_every_operation() {
        let mut bar = reference_bar();
        let in_range = |bar: &ScrollBar| {
            bar.value() >= bar.minimum() && bar.value() <= bar.maximum()
        };

        bar.set_value_immediately(999);
        assert!(in_range(&bar));
        bar.wheel(-10_000.0);
        assert!(in_range(&bar));
        bar.pointer_down(point(100.0));
        bar.pointer_move(point(10_000.0));
        assert!(in_range(&bar));
        bar.pointer_up();
        bar.set_range(0, 7);
        assert!(in_range(&bar));
        bar.set_value(5000);
        settle(&mut bar);
        assert!(in_range(&bar));
    }

    #[test]
    fn hover_flicker_is_debounced() {
        let mut bar = reference_bar();

        // Two enter/leave pairs 50ms apart inside the 210ms settle window.
        bar.hover_enter();
        bar.step(50.0);
        bar.hover_leave();
        bar.step(50.0);
        bar.hover_enter();
        bar.step(50.0);
        bar.hover_leave();
        assert!(!bar.is_expanded());

        settle(&mut bar);
        assert!(!bar.is_expanded(), "flicker must never expand the bar");
    }

    #[test]
    fn held_hover_expands_exactly_once() {
        let mut bar = reference_bar();

        bar.hover_enter();
        bar.step(209.0);
        assert!(!bar.is_expanded(), "settle delay not elapsed yet");
        bar.step(2.0);
        assert!(bar.is_expanded());

        settle(&mut bar);
        assert!(bar.is_expanded());
        assert_eq!(bar.opacity(), 1.0);

        bar.hover_leave();
        settle(&mut bar);
        assert!(!bar.is_expanded());
        assert_eq!(bar.opacity(), 0.0);
    }

    #[test]
    fn visibility_follows_range_and_policy() {
        let mut bar = reference_bar();
        assert!(bar.is_visible());

        bar.set_range(0, 0);
        assert!(!bar.is_visible(), "degenerate range hides the bar");

        bar.set_policy(ScrollBarPolicy::AlwaysOn);
        assert!(bar.is_visible());

        bar.set_policy(ScrollBarPolicy::AlwaysOff);
        bar.set_range(0, 100);
        assert!(!bar.is_visible());
    }

    #[test]
    fn page_steps_animate_by_the_configured_amount() {
        let mut bar = reference_bar();
        bar.set_value_immediately(50);
        bar.set_page_step(25);

        bar.page_down();
        settle(&mut bar);
        assert_eq!(bar.value(), 75);

        bar.page_up();
        settle(&mut bar);
        bar.page_up();
        settle(&mut bar);
        assert_eq!(bar.value(), 25);

        // Steps below one are ignored.
        bar.set_page_step(0);
        bar.page_down();
        settle(&mut bar);
        assert_eq!(bar.value(), 50);
    }

    #[test]
    fn line_steps_use_single_step() {
        let mut bar = reference_bar();
        bar.set_value_immediately(10);
        bar.set_single_step(3);

        bar.line_down();
        settle(&mut bar);
        assert_eq!(bar.value(), 13);

        bar.line_up();
        settle(&mut bar);
        assert_eq!(bar.value(), 10);
    }
}
