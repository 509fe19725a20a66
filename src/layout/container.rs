//! Container layouts and composite regions.
//!
//! A [`ContainerLayout`] arranges the children of some container region; a
//! [`Composite`] is a region that owns one, so layouts nest to any depth.

use super::columns::ThreeColumnLayout;
use super::rect::{Insets, Rect, Size};
use super::region::Region;

/// A layout algorithm driven by a parent container.
pub trait ContainerLayout {
    /// Position the children inside `container`'s bounds minus its insets.
    fn layout_container(&mut self, container: &dyn Region);

    /// Preferred size of `container` under this layout.
    fn preferred(&self, container: &dyn Region) -> Size;

    /// Minimum size of `container` under this layout.
    fn minimum(&self, container: &dyn Region) -> Size;

    /// Maximum size of `container` under this layout.
    fn maximum(&self, container: &dyn Region) -> Size;
}

impl<R: Region> ContainerLayout for ThreeColumnLayout<R> {
    fn layout_container(&mut self, container: &dyn Region) {
        let bounds = container.bounds().inner(container.insets());
        self.layout(bounds);
    }

    fn preferred(&self, container: &dyn Region) -> Size {
        self.preferred_size(container.insets())
    }

    fn minimum(&self, container: &dyn Region) -> Size {
        self.minimum_size(container.insets())
    }

    fn maximum(&self, container: &dyn Region) -> Size {
        self.maximum_size(container.insets())
    }
}

/// Bounds and insets of a composite, handed to its layout as the container.
#[derive(Clone, Copy, Debug, Default)]
struct Frame {
    bounds: Rect,
    insets: Insets,
    collapsed: bool,
}

impl Region for Frame {
    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    fn insets(&self) -> Insets {
        self.insets
    }

    fn do_layout(&mut self) {}

    fn preferred_size(&self) -> Size {
        self.bounds.size()
    }

    fn minimum_size(&self) -> Size {
        self.bounds.size()
    }

    fn maximum_size(&self) -> Size {
        self.bounds.size()
    }

    fn is_collapsed(&self) -> bool {
        self.collapsed
    }
}

/// A region whose children are arranged by a nested layout.
pub struct Composite {
    frame: Frame,
    layout: Box<dyn ContainerLayout>,
}

impl Composite {
    /// Wrap a layout as a region.
    pub fn new(layout: impl ContainerLayout + 'static) -> Self {
        Self {
            frame: Frame::default(),
            layout: Box::new(layout),
        }
    }

    /// Set the insets.
    #[must_use]
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.frame.insets = insets;
        self
    }

    /// Set or clear the collapsed marker.
    pub fn set_collapsed(&mut self, collapsed: bool) {
        self.frame.collapsed = collapsed;
    }
}

impl std::fmt::Debug for Composite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Composite")
            .field("bounds", &self.frame.bounds)
            .field("insets", &self.frame.insets)
            .finish_non_exhaustive()
    }
}

impl Region for Composite {
    fn bounds(&self) -> Rect {
        self.frame.bounds
    }

    fn set_bounds(&mut self, bounds: Rect) {
        self.frame.bounds = bounds;
    }

    fn insets(&self) -> Insets {
        self.frame.insets
    }

    fn do_layout(&mut self) {
        self.layout.layout_container(&self.frame);
    }

    fn preferred_size(&self) -> Size {
        self.layout.preferred(&self.frame)
    }

    fn minimum_size(&self) -> Size {
        self.layout.minimum(&self.frame)
    }

    fn maximum_size(&self) -> Size {
        self.layout.maximum(&self.frame)
    }

    fn is_collapsed(&self) -> bool {
        self.frame.collapsed
    }
}
