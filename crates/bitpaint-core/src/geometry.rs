#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Drawing calls take floating-point coordinates and snap them onto the
//! integer pixel grid with [`round_half_up`]. Integer bounds are carried in a
//! [`PixelRect`], which is half-open on both axes.

/// Snap a floating-point coordinate to a pixel index: `floor(v + 0.5)`.
///
/// This is deliberately not [`f64::round`]: ties go towards positive infinity,
/// so `-0.5` snaps to `0` and `2.5` snaps to `3`. Boundary pixels depend on it.
///
/// Non-finite input saturates (`NaN` maps to `0`).
#[inline]
pub fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// Integer pixel bounds, half-open: `x0 <= x < x1`, `y0 <= y < y1`.
///
/// Coordinates are signed so shapes may hang off any edge of a surface
/// before being clipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PixelRect {
    /// Left edge (inclusive).
    pub x0: i64,
    /// Top edge (inclusive).
    pub y0: i64,
    /// Right edge (exclusive).
    pub x1: i64,
    /// Bottom edge (exclusive).
    pub y1: i64,
}

impl PixelRect {
    /// Create bounds from edges.
    #[inline]
    pub const fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Bounds covering a whole `width × height` surface.
    #[inline]
    pub const fn from_size(width: usize, height: usize) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    /// Width in pixels (zero when inverted).
    #[inline]
    pub const fn width(&self) -> i64 {
        if self.x1 > self.x0 { self.x1.saturating_sub(self.x0) } else { 0 }
    }

    /// Height in pixels (zero when inverted).
    #[inline]
    pub const fn height(&self) -> i64 {
        if self.y1 > self.y0 { self.y1.saturating_sub(self.y0) } else { 0 }
    }

    /// Check if the bounds cover no pixel.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Check if a pixel lies inside the bounds.
    #[inline]
    pub const fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Compute the intersection with other bounds.
    ///
    /// Returns an empty rect if they don't overlap.
    #[inline]
    pub fn intersection(&self, other: &PixelRect) -> PixelRect {
        let r = PixelRect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { PixelRect::default() } else { r }
    }

    /// Iterate the covered pixels in row-major order.
    pub fn pixels(self) -> impl Iterator<Item = (i64, i64)> {
        (self.y0..self.y1).flat_map(move |y| (self.x0..self.x1).map(move |x| (x, y)))
    }
}

/// An axis-aligned rectangle in floating-point pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectF {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Snap all four edges onto the pixel grid.
    ///
    /// A rectangle with non-positive width or height snaps to empty bounds.
    #[inline]
    pub fn snap(&self) -> PixelRect {
        PixelRect::new(
            round_half_up(self.x),
            round_half_up(self.y),
            round_half_up(self.right()),
            round_half_up(self.bottom()),
        )
    }
}
