//! Track geometry: pure pixel math for groove, handle, and slide lengths.

use crate::range::ScrollRange;

/// Cached geometry inputs for one scrollbar track.
///
/// All derivations are pure functions of these inputs plus the current
/// range. The range and the viewport size jointly determine the handle
/// length, so callers refresh `track_length` and `viewport_extent` on every
/// host resize, not only on range changes.
#[derive(Debug, Clone, Copy)]
pub struct TrackGeometry {
    /// Full track length along the scroll axis, in pixels.
    pub track_length: f32,
    /// Visible pixel length of the hosted viewport along the scroll axis.
    pub viewport_extent: f32,
    /// Decorative end padding excluded from the groove.
    pub padding: f32,
    /// Lower bound on the handle length.
    pub min_handle_length: f32,
}

impl TrackGeometry {
    pub fn new(padding: f32, min_handle_length: f32) -> Self {
        Self {
            track_length: 0.0,
            viewport_extent: 0.0,
            padding,
            min_handle_length,
        }
    }

    /// Groove length: the track minus the end decorations.
    pub fn groove_length(&self) -> f32 {
        (self.track_length - 2.0 * self.padding).max(0.0)
    }

    /// Handle length proportional to the visible share of the content,
    /// never shorter than `min_handle_length` (and never longer than the
    /// groove itself).
    pub fn handle_length(&self, range: ScrollRange) -> f32 {
        let groove = self.groove_length();
        let total_extent = range.span() as f32 + self.viewport_extent;
        if total_extent <= 0.0 {
            return groove;
        }
        let proportional = groove * self.viewport_extent / total_extent;
        proportional.max(self.min_handle_length).min(groove)
    }

    /// The handle's range of motion: groove minus handle.
    pub fn slide_length(&self, range: ScrollRange) -> f32 {
        (self.groove_length() - self.handle_length(range)).max(0.0)
    }

    /// Pixel offset of the handle's leading edge within the groove for
    /// `value`, clamped to `[0, slide_length]`.
    pub fn value_to_offset(&self, value: i32, range: ScrollRange) -> f32 {
        let slide = self.slide_length(range);
        let span = range.span().max(1) as f32;
        let offset = (value - range.minimum()) as f32 / span * slide;
        offset.clamp(0.0, slide)
    }

    /// Inverse of [`Self::value_to_offset`], clamped to the range.
    pub fn offset_to_value(&self, offset: f32, range: ScrollRange) -> i32 {
        let slide = self.slide_length(range).max(1.0);
        let ratio = (offset / slide).clamp(0.0, 1.0);
        let value = range.minimum() as f32 + ratio * range.span() as f32;
        range.clamp(value.round() as i32)
    }

    /// Whether `pos` (a track coordinate) lands in the slidable region
    /// rather than on the decorative end padding.
    pub fn in_slide_region(&self, pos: f32) -> bool {
        pos >= self.padding && pos <= self.track_length - self.padding
    }
}
