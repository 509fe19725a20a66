//! Region: The capability set a column layout needs from each of its slots.

use super::rect::{Insets, Rect, Size};

/// Which of the three column slots a region occupies.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum RegionKind {
    /// Navigation menu on the left.
    Menu,
    /// Main editing area in the middle.
    Content,
    /// Preview pane on the right.
    Preview,
}

impl RegionKind {
    /// All slots in left-to-right order.
    pub const ALL: [Self; 3] = [Self::Menu, Self::Content, Self::Preview];

    /// Lowercase slot name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Content => "content",
            Self::Preview => "preview",
        }
    }
}

impl std::fmt::Display for RegionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A box that a layout can position and size.
///
/// These are the only operations a layout performs on its children, so any
/// type providing them can stand in for a slot (composite containers, test
/// doubles, alternate renderers).
pub trait Region {
    /// Get the current bounds of this region.
    fn bounds(&self) -> Rect;

    /// Set the bounds of this region.
    fn set_bounds(&mut self, bounds: Rect);

    /// Margins between the outer box and the area available to children.
    fn insets(&self) -> Insets;

    /// Arrange this region's own children inside its current bounds.
    ///
    /// Leaf regions have nothing to do.
    fn do_layout(&mut self);

    /// Size the region would like to have.
    fn preferred_size(&self) -> Size;

    /// Smallest usable size.
    fn minimum_size(&self) -> Size;

    /// Largest useful size.
    fn maximum_size(&self) -> Size;

    /// Whether the region carries a collapsed marker.
    ///
    /// Only consulted for the content slot under
    /// [`FallbackPolicy::StackBehind`](super::FallbackPolicy::StackBehind).
    fn is_collapsed(&self) -> bool {
        false
    }
}

impl<R: Region + ?Sized> Region for Box<R> {
    fn bounds(&self) -> Rect {
        (**self).bounds()
    }

    fn set_bounds(&mut self, bounds: Rect) {
        (**self).set_bounds(bounds);
    }

    fn insets(&self) -> Insets {
        (**self).insets()
    }

    fn do_layout(&mut self) {
        (**self).do_layout();
    }

    fn preferred_size(&self) -> Size {
        (**self).preferred_size()
    }

    fn minimum_size(&self) -> Size {
        (**self).minimum_size()
    }

    fn maximum_size(&self) -> Size {
        (**self).maximum_size()
    }

    fn is_collapsed(&self) -> bool {
        (**self).is_collapsed()
    }
}

/// A leaf region with fixed intrinsic sizes.
#[derive(Clone, Debug, Default)]
pub struct Panel {
    bounds: Rect,
    insets: Insets,
    preferred: Size,
    minimum: Size,
    maximum: Size,
    collapsed: bool,
    layout_passes: u64,
}

impl Panel {
    /// Create a panel whose preferred, minimum and maximum sizes are all `size`.
    pub const fn new(size: Size) -> Self {
        Self {
            bounds: Rect::ZERO,
            insets: Insets::ZERO,
            preferred: size,
            minimum: size,
            maximum: size,
            collapsed: false,
            layout_passes: 0,
        }
    }

    /// Set distinct minimum, preferred and maximum sizes.
    #[must_use]
    pub const fn with_sizes(mut self, minimum: Size, preferred: Size, maximum: Size) -> Self {
        self.minimum = minimum;
        self.preferred = preferred;
        self.maximum = maximum;
        self
    }

    /// Set the insets.
    #[must_use]
    pub const fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// Set or clear the collapsed marker.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.collapsed = collapsed;
    }

    /// Number of times [`Region::do_layout`] has run on this panel.
    pub const fn layout_passes(&self) -> u64 {
        self.layout_passes
    }
}

impl Region for Panel {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn insets(&self) -> Insets {
        self.insets
    }

    fn do_layout(&mut self) {
        self.layout_passes += 1;
    }

    fn preferred_size(&self) -> Size {
        self.preferred
    }

    fn minimum_size(&self) -> Size {
        self.minimum
    }

    fn maximum_size(&self) -> Size {
        self.maximum
    }

    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}
