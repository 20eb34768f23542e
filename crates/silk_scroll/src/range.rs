//! Logical scroll range.

/// Inclusive logical bounds of scrollable content, mirroring the hosted
/// view's native range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollRange {
    minimum: i32,
    maximum: i32,
}

impl ScrollRange {
    /// Returns `None` for an inverted range.
    pub fn new(minimum: i32, maximum: i32) -> Option<Self> {
        (minimum <= maximum).then_some(Self { minimum, maximum })
    }

    pub fn minimum(&self) -> i32 {
        self.minimum
    }

    pub fn maximum(&self) -> i32 {
        self.maximum
    }

    /// Distance between the bounds in logical units.
    pub fn span(&self) -> i32 {
        self.maximum - self.minimum
    }

    /// Replace the bounds. An inverted range is rejected and the prior
    /// bounds retained; an unchanged range is a no-op. Returns whether the
    /// bounds changed.
    pub fn set(&mut self, minimum: i32, maximum: i32) -> bool {
        if minimum > maximum {
            tracing::warn!(minimum, maximum, "rejecting inverted scroll range");
            return false;
        }
        if minimum == self.minimum && maximum == self.maximum {
            return false;
        }
        self.minimum = minimum;
        self.maximum = maximum;
        true
    }

    pub fn clamp(&self, value: i32) -> i32 {
        value.clamp(self.minimum, self.maximum)
    }

    /// A degenerate range has nothing to scroll.
    pub fn is_scrollable(&self) -> bool {
        self.maximum > self.minimum
    }
}
