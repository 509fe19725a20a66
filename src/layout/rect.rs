//! Rect: Geometry primitives for column layout calculations.
//!
//! Coordinates are signed pixels. A degenerate container (zero or negative
//! usable width) must still produce a layout, so widths may go negative.
//! Edge arithmetic saturates at the `i32` limits rather than overflowing.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate of the top-left corner.
    pub x: i32,
    /// Y coordinate of the top-left corner.
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle anchored at the origin.
    #[inline]
    pub const fn from_size(width: i32, height: i32) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Get the size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Subtract insets from the rectangle, giving the usable area.
    ///
    /// The insets are measured from the rectangle's own origin, matching how a
    /// container reports its bounds to its layout.
    #[inline]
    pub const fn inner(&self, insets: Insets) -> Bounds {
        Bounds {
            top: insets.top,
            bottom: self.height.saturating_sub(insets.bottom),
            left: insets.left,
            right: self.width.saturating_sub(insets.right),
        }
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Usable area of a container after insets are subtracted.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Bounds {
    /// Top edge.
    pub top: i32,
    /// Bottom edge (exclusive).
    pub bottom: i32,
    /// Left edge.
    pub left: i32,
    /// Right edge (exclusive).
    pub right: i32,
}

impl Bounds {
    /// Create bounds from edges.
    #[inline]
    pub const fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        Self { top, bottom, left, right }
    }

    /// Usable width (`right - left`). May be zero or negative.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Usable height (`bottom - top`).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// Padding-like margins between a container's outer box and its usable area.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Insets {
    /// Top inset.
    pub top: i32,
    /// Right inset.
    pub right: i32,
    /// Bottom inset.
    pub bottom: i32,
    /// Left inset.
    pub left: i32,
}

impl Insets {
    /// No insets.
    pub const ZERO: Self = Self::all(0);

    /// Create insets in CSS order (top, right, bottom, left).
    #[inline]
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Same inset on every side.
    #[inline]
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right.
    #[inline]
    pub const fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    #[inline]
    pub const fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

/// A width/height pair returned by size queries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Size {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Size {
    /// Zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grow the size by insets on all sides.
    #[inline]
    #[must_use]
    pub const fn expand(&self, insets: Insets) -> Self {
        Self::new(
            self.width.saturating_add(insets.horizontal()),
            self.height.saturating_add(insets.vertical()),
        )
    }
}
