//! Geometry primitives for the scroll components.

/// A point in local widget coordinates, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Scroll axis. Each scrollbar instance owns exactly one axis; vertical and
/// horizontal bars never share state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    /// Coordinate of `point` along the scroll axis.
    pub fn main(&self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.y,
            Orientation::Horizontal => point.x,
        }
    }

    /// Coordinate of `point` across the scroll axis.
    pub fn cross(&self, point: Point) -> f32 {
        match self {
            Orientation::Vertical => point.x,
            Orientation::Horizontal => point.y,
        }
    }

    /// Pick the component of a `(width, height)` pair along the axis.
    pub fn pick(&self, width: f32, height: f32) -> f32 {
        match self {
            Orientation::Vertical => height,
            Orientation::Horizontal => width,
        }
    }
}
