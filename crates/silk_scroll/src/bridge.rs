//! Two-way binding between a scrollbar and the hosted view's native
//! scroll position.
//!
//! The native range/value remain the source of truth: host changes are
//! mirrored into the bar with no re-animation, and bar changes flow back
//! through a single change-suppressed setter so the two directions can
//! never ping-pong.

use std::sync::{Arc, Mutex};

use silk_core::{event_types, Orientation, Point, PointerEvent};

use crate::bar::{ScrollBar, ScrollBarHit};
use crate::config::ScrollBarConfig;
use crate::scrollable::{ScrollBarPolicy, Scrollable};

/// Shared handle to the hosted scrollable view.
pub type SharedScrollable = Arc<Mutex<dyn Scrollable + Send>>;

/// One axis worth of bar-to-host synchronization.
pub struct SyncBridge {
    bar: ScrollBar,
    host: SharedScrollable,
    orientation: Orientation,
}

impl SyncBridge {
    /// Build the bridge, forcing the native bar off and seeding the custom
    /// bar from the host's current range, value, and viewport.
    pub fn new(orientation: Orientation, config: ScrollBarConfig, host: SharedScrollable) -> Self {
        let mut bar = ScrollBar::new(orientation, config);
        {
            let mut host = host.lock().unwrap();
            host.set_native_policy(orientation, ScrollBarPolicy::AlwaysOff);

            let (width, height) = host.viewport_size();
            let extent = orientation.pick(width, height);
            bar.set_viewport_metrics(extent, extent);

            let (minimum, maximum) = host.range(orientation);
            bar.set_range(minimum, maximum);
            bar.set_value_immediately(host.value(orientation));
        }
        Self {
            bar,
            host,
            orientation,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn bar(&self) -> &ScrollBar {
        &self.bar
    }

    pub fn bar_mut(&mut self) -> &mut ScrollBar {
        &mut self.bar
    }

    // =========================================================================
    // Host -> bar
    // =========================================================================

    /// Native range change. Ends by flushing to the host: shrinking the
    /// range may clamp the value, which the host must learn about.
    pub fn handle_native_range_changed(&mut self, minimum: i32, maximum: i32) {
        self.bar.set_range(minimum, maximum);
        self.push_to_host();
    }

    /// Native value change (keyboard navigation, programmatic scroll by
    /// other code). Mirrored immediately, never re-animated.
    pub fn handle_native_value_changed(&mut self, value: i32) {
        if value != self.bar.value() {
            self.bar.set_value_immediately(value);
        }
        // The mirror clamps; flush so a host reporting an out-of-range
        // value gets corrected instead of drifting until the next input.
        self.push_to_host();
    }

    /// Refresh track metrics from the viewport size.
    pub fn handle_viewport_resize(&mut self, width: f32, height: f32) {
        let extent = self.orientation.pick(width, height);
        self.bar.set_viewport_metrics(extent, extent);
    }

    /// Poll the host for changes, for hosts without change notifications.
    pub fn sync_from_host(&mut self) {
        let (minimum, maximum, value) = {
            let host = self.host.lock().unwrap();
            let (minimum, maximum) = host.range(self.orientation);
            (minimum, maximum, host.value(self.orientation))
        };
        // Mirror first, push once at the end: the host value must land in
        // the bar before any write flows back, or a stale bar value would
        // clobber it.
        self.bar.set_range(minimum, maximum);
        if value != self.bar.value() {
            self.bar.set_value_immediately(value);
        }
        self.push_to_host();
    }

    // =========================================================================
    // Input -> bar -> host
    // =========================================================================

    pub fn pointer_down(&mut self, pos: Point) -> ScrollBarHit {
        let hit = self.bar.pointer_down(pos);
        self.push_to_host();
        hit
    }

    pub fn pointer_move(&mut self, pos: Point) {
        self.bar.pointer_move(pos);
        self.push_to_host();
    }

    pub fn pointer_up(&mut self) {
        self.bar.pointer_up();
        self.push_to_host();
    }

    pub fn wheel(&mut self, delta: f32) {
        self.bar.wheel(delta);
        self.push_to_host();
    }

    /// Dispatch a pointer event already routed to this bar. Unknown event
    /// types are ignored.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event.event_type {
            event_types::POINTER_DOWN => {
                self.pointer_down(event.position);
            }
            event_types::POINTER_MOVE => self.pointer_move(event.position),
            event_types::POINTER_UP => self.pointer_up(),
            event_types::POINTER_ENTER => self.hover_enter(),
            event_types::POINTER_LEAVE => self.hover_leave(),
            other => tracing::trace!(other, "unhandled pointer event type"),
        }
    }

    pub fn hover_enter(&mut self) {
        self.bar.hover_enter();
    }

    pub fn hover_leave(&mut self) {
        self.bar.hover_leave();
    }

    pub fn page_up(&mut self) {
        self.bar.page_up();
        self.push_to_host();
    }

    pub fn page_down(&mut self) {
        self.bar.page_down();
        self.push_to_host();
    }

    /// Force the native policy off and apply the requested policy to the
    /// custom bar, preserving the caller-visible policy contract.
    pub fn set_policy(&mut self, policy: ScrollBarPolicy) {
        self.host
            .lock()
            .unwrap()
            .set_native_policy(self.orientation, ScrollBarPolicy::AlwaysOff);
        self.bar.set_policy(policy);
    }

    /// Advance animations, then flush: animation ticks move the value.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        let active = self.bar.step(dt_ms);
        self.push_to_host();
        active
    }

    /// The single setter path toward the host. Compares before writing so
    /// mirrored host changes never echo back.
    fn push_to_host(&mut self) {
        let value = self.bar.value();
        let mut host = self.host.lock().unwrap();
        if host.value(self.orientation) != value {
            tracing::trace!(?self.orientation, value, "push to host");
            host.set_value(self.orientation, value);
        }
    }
}
