//! Viewport delegate: replaces the native scrollbar pair with custom bars.
//!
//! Attach one delegate per scrollable viewport. It forces the native bars
//! off, intercepts wheel events before the native view consumes them, and
//! keeps a vertical and a horizontal bar synchronized with the native
//! scroll position through one [`SyncBridge`] per axis.

use std::sync::Arc;

use silk_core::{Orientation, PointerEvent, WheelDelta};

use crate::bar::ScrollBar;
use crate::bridge::{SharedScrollable, SyncBridge};
use crate::config::ScrollBarConfig;
use crate::scrollable::ScrollBarPolicy;

pub struct ScrollDelegate {
    vertical: SyncBridge,
    horizontal: SyncBridge,
}

impl ScrollDelegate {
    /// Attach to a host view. Both native policies are forced off at the
    /// native layer; range and value stay native-owned and mirrored.
    pub fn new(host: SharedScrollable, config: ScrollBarConfig) -> Self {
        let vertical = SyncBridge::new(Orientation::Vertical, config, Arc::clone(&host));
        let horizontal = SyncBridge::new(Orientation::Horizontal, config, host);
        Self {
            vertical,
            horizontal,
        }
    }

    /// Wheel interception. A non-zero vertical delta drives the vertical
    /// bar; otherwise the horizontal delta drives the horizontal bar
    /// (trackpad/shift-wheel scrolling). Returns true when the event was
    /// routed and must be fully consumed, so the native view never
    /// double-applies the delta.
    pub fn handle_wheel(&mut self, delta: WheelDelta) -> bool {
        if delta.delta_y != 0.0 {
            self.vertical.wheel(delta.delta_y);
            true
        } else if delta.delta_x != 0.0 {
            self.horizontal.wheel(delta.delta_x);
            true
        } else {
            false
        }
    }

    /// Pointer events already hit-tested to one bar, routed by axis.
    pub fn handle_pointer_event(&mut self, axis: Orientation, event: PointerEvent) {
        self.bridge_mut(axis).handle_pointer_event(event);
    }

    /// Viewport resize: both geometries depend on the viewport size.
    pub fn handle_viewport_resize(&mut self, width: f32, height: f32) {
        self.vertical.handle_viewport_resize(width, height);
        self.horizontal.handle_viewport_resize(width, height);
    }

    pub fn set_vertical_policy(&mut self, policy: ScrollBarPolicy) {
        self.vertical.set_policy(policy);
    }

    pub fn set_horizontal_policy(&mut self, policy: ScrollBarPolicy) {
        self.horizontal.set_policy(policy);
    }

    /// Native change notifications, routed by axis.
    pub fn handle_native_range_changed(&mut self, axis: Orientation, minimum: i32, maximum: i32) {
        self.bridge_mut(axis)
            .handle_native_range_changed(minimum, maximum);
    }

    pub fn handle_native_value_changed(&mut self, axis: Orientation, value: i32) {
        self.bridge_mut(axis).handle_native_value_changed(value);
    }

    /// Poll both axes, for hosts without change notifications.
    pub fn sync_from_host(&mut self) {
        self.vertical.sync_from_host();
        self.horizontal.sync_from_host();
    }

    /// Advance animations on both bars. Returns true while anything is
    /// still in flight.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        let vertical = self.vertical.step(dt_ms);
        let horizontal = self.horizontal.step(dt_ms);
        vertical || horizontal
    }

    pub fn bridge(&self, axis: Orientation) -> &SyncBridge {
        match axis {
            Orientation::Vertical => &self.vertical,
            Orientation::Horizontal => &self.horizontal,
        }
    }

    pub fn bridge_mut(&mut self, axis: Orientation) -> &mut SyncBridge {
        match axis {
            Orientation::Vertical => &mut self.vertical,
            Orientation::Horizontal => &mut self.horizontal,
        }
    }

    pub fn vertical_bar(&self) -> &ScrollBar {
        self.vertical.bar()
    }

    pub fn horizontal_bar(&self) -> &ScrollBar {
        self.horizontal.bar()
    }
}
