//! Coordinate types and the viewport-to-surface mapping.
//!
//! Pointer events arrive in viewport (client) coordinates. The surface may be
//! displayed at a different size than its backing buffer, so every event is
//! mapped through the element's live bounding box before it touches pixels.

#[cfg(test)]
#[path = "coords_test.rs"]
mod coords_test;

/// A point in either viewport or backing-pixel space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer pixel dimensions of a backing buffer or a CSS box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero.
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An element's bounding box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// The box's size rounded to whole CSS pixels, clamping negatives to zero.
    #[must_use]
    pub fn rounded_size(&self) -> Size {
        Size::new(round_px(self.width), round_px(self.height))
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_px(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round().min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Convert a viewport point into backing-pixel coordinates.
///
/// `bounds` is the element's bounding box at the time of the event and
/// `backing` its buffer resolution. A degenerate box dimension maps with a
/// scale of 1 on that axis.
#[must_use]
pub fn map_to_backing(client: Point, bounds: Rect, backing: Size) -> Point {
    Point {
        x: (client.x - bounds.left) * axis_scale(backing.width, bounds.width),
        y: (client.y - bounds.top) * axis_scale(backing.height, bounds.height),
    }
}

fn axis_scale(backing: u32, displayed: f64) -> f64 {
    if displayed > 0.0 && displayed.is_finite() {
        f64::from(backing) / displayed
    } else {
        1.0
    }
}
