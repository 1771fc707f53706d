//! Pixel geometry for the rendering surface.

use serde::{Deserialize, Serialize};

/// Width and height in whole pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Largest top-left corner that keeps `inner` fully inside `self`.
    ///
    /// An axis where `inner` is larger collapses to 0.
    #[must_use]
    pub const fn max_origin(self, inner: Size) -> Position {
        Position {
            x: self.width.saturating_sub(inner.width),
            y: self.height.saturating_sub(inner.height),
        }
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Top-left corner of an element, relative to the surface origin.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u32,
    pub y: u32,
}

impl Position {
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Position,
    pub size: Size,
}

impl Rect {
    #[must_use]
    pub const fn new(origin: Position, size: Size) -> Self {
        Self { origin, size }
    }

    /// Half-open containment: the right and bottom edges are outside.
    #[must_use]
    pub fn contains(&self, point: Position) -> bool {
        let right = u64::from(self.origin.x) + u64::from(self.size.width);
        let bottom = u64::from(self.origin.y) + u64::from(self.size.height);
        point.x >= self.origin.x
            && point.y >= self.origin.y
            && u64::from(point.x) < right
            && u64::from(point.y) < bottom
    }

    /// True if the rectangle lies entirely within `bounds` anchored at the origin.
    #[must_use]
    pub fn fits_within(&self, bounds: Size) -> bool {
        u64::from(self.origin.x) + u64::from(self.size.width) <= u64::from(bounds.width)
            && u64::from(self.origin.y) + u64::from(self.size.height) <= u64::from(bounds.height)
    }
}
