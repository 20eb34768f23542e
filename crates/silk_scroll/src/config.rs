//! Scrollbar configuration.
//!
//! Visual and behavioral constants are injected at construction; nothing
//! here reads a global style registry or theme broadcast.

/// Configuration for one scrollbar's appearance and behavior.
#[derive(Debug, Clone, Copy)]
pub struct ScrollBarConfig {
    /// Track thickness across the scroll axis, in pixels.
    pub thickness: f32,
    /// Decorative end padding (arrow buttons) at each end of the track.
    pub padding: f32,
    /// Minimum handle length; keeps the handle grabbable for long content.
    pub min_handle_length: f32,
    /// Handle color (RGBA).
    pub handle_color: [f32; 4],
    /// Groove color (RGBA).
    pub groove_color: [f32; 4],
    /// Hover settle delay before expanding or collapsing, in milliseconds.
    pub hover_settle_delay_ms: f32,
    /// Groove fade in/out duration, in milliseconds.
    pub fade_duration_ms: f32,
    /// Logical units scrolled per wheel delta unit.
    pub wheel_scale: f32,
    /// Amount scrolled by a page jump or arrow-button page click.
    pub page_step: i32,
    /// Amount scrolled by a single line step.
    pub single_step: i32,
}

impl Default for ScrollBarConfig {
    fn default() -> Self {
        Self {
            thickness: 12.0,
            padding: 15.0,
            min_handle_length: 30.0,
            // Semi-transparent handle over a near-opaque light groove
            handle_color: [0.0, 0.0, 0.0, 0.48],
            groove_color: [0.96, 0.96, 0.96, 0.92],
            hover_settle_delay_ms: 210.0,
            fade_duration_ms: 150.0,
            wheel_scale: 1.0,
            page_step: 30,
            single_step: 1,
        }
    }
}

impl ScrollBarConfig {
    /// Dark-theme colors, same metrics.
    pub fn dark() -> Self {
        Self {
            handle_color: [1.0, 1.0, 1.0, 0.48],
            groove_color: [0.19, 0.19, 0.19, 0.92],
            ..Default::default()
        }
    }

    /// Thin minimal bar with small end decorations.
    pub fn thin() -> Self {
        Self {
            thickness: 6.0,
            padding: 6.0,
            ..Default::default()
        }
    }
}
