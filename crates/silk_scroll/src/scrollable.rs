//! Capability contract for the hosted scrollable view.

use silk_core::Orientation;

/// Caller-visible scrollbar policy.
///
/// Preserves the standard toolkit contract even though rendering is fully
/// custom: the native layer is always forced off, and this policy governs
/// the custom bar instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBarPolicy {
    /// Visible only while there is something to scroll.
    #[default]
    AsNeeded,
    AlwaysOff,
    AlwaysOn,
}

/// The capability set the hosted view must expose.
///
/// The state machine and geometry code depend only on this trait, never on
/// a concrete widget base class; an adapter implements it over whichever
/// toolkit hosts the content.
pub trait Scrollable {
    /// Native logical range `(minimum, maximum)` along `axis`.
    fn range(&self, axis: Orientation) -> (i32, i32);

    /// Native scroll position along `axis`.
    fn value(&self, axis: Orientation) -> i32;

    /// Set the native scroll position along `axis`.
    fn set_value(&mut self, axis: Orientation, value: i32);

    /// Set the native scrollbar policy along `axis`.
    fn set_native_policy(&mut self, axis: Orientation, policy: ScrollBarPolicy);

    /// Visible pixel size of the viewport, `(width, height)`.
    fn viewport_size(&self) -> (f32, f32);
}
