//! Three-column allocator: menu, content and preview side by side.
//!
//! # Algorithm
//!
//! The menu takes its expanded or collapsed width. If only one of content and
//! preview is visible it gets all of the remaining space. Otherwise the
//! remainder is split evenly; a column falling under its minimum is clamped up
//! to it and the other column takes what is left. If a minimum is still
//! violated after that single clamp, the [`FallbackPolicy`] decides:
//!
//! ```text
//! Hide:         | menu | content ..................... |            (preview = 0)
//! StackBehind:  | menu | content ..................... |            (preview underneath,
//!                      | preview ..................... |             same origin and width)
//! ```
//!
//! Arithmetic never fails. A container narrower than the menu yields negative
//! widths, which the caller treats as hidden.

use bitflags::bitflags;
use tracing::debug;

use super::options::{ColumnOptions, FallbackPolicy, RawColumnOptions};
use super::rect::{Bounds, Insets, Rect, Size};
use super::region::{Region, RegionKind};
use crate::error::{ConfigError, Result};

bitflags! {
    /// Display state of a slot after a layout pass.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct SlotFlags: u8 {
        /// Zero width, out of the flow.
        const COLLAPSED  = 0b0000_0001;
        /// Non-zero width but stacked beneath the content column.
        const SUPPRESSED = 0b0000_0010;
        /// Menu at its minimum width (not expanded). Still displayed.
        const NARROW     = 0b0000_0100;
    }
}

/// Resolved column widths before positioning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct ColumnWidths {
    /// Menu width.
    pub menu: i32,
    /// Content width.
    pub content: i32,
    /// Preview width.
    pub preview: i32,
    /// Preview is stacked behind content rather than placed after it.
    pub preview_suppressed: bool,
}

impl ColumnWidths {
    /// Sum of the widths that occupy horizontal space.
    ///
    /// Saturates at the `i32` range for extreme inputs.
    pub const fn occupied(&self) -> i32 {
        let sum = self.menu.saturating_add(self.content);
        if self.preview_suppressed {
            sum
        } else {
            sum.saturating_add(self.preview)
        }
    }
}

/// Split `usable` pixels between the three columns.
///
/// `content_visible` is passed separately because its source depends on the
/// fallback policy (an option flag or the content region's marker).
///
/// Total over all inputs: subtraction saturates, so widths near the `i32`
/// limits clamp instead of overflowing.
pub fn allocate(usable: i32, options: &ColumnOptions, content_visible: bool) -> ColumnWidths {
    let menu = options.menu_width();
    let remaining = usable.saturating_sub(menu);
    let preview_visible = options.preview_visible;

    let mut widths = ColumnWidths {
        menu,
        ..ColumnWidths::default()
    };

    if preview_visible && !content_visible {
        widths.preview = remaining;
    } else if content_visible && !preview_visible {
        widths.content = remaining;
    } else {
        let mut content = remaining / 2;
        let mut preview = remaining - content;

        if content < options.min_content_width {
            content = options.min_content_width;
            preview = remaining.saturating_sub(content);
        } else if preview < options.min_preview_width {
            preview = options.min_preview_width;
            content = remaining.saturating_sub(preview);
        }

        if content < options.min_content_width || preview < options.min_preview_width {
            debug!(
                remaining,
                min_content = options.min_content_width,
                min_preview = options.min_preview_width,
                fallback = ?options.fallback,
                "content and preview minima do not fit",
            );
            content = remaining;
            preview = match options.fallback {
                FallbackPolicy::Hide => 0,
                FallbackPolicy::StackBehind => {
                    widths.preview_suppressed = true;
                    content
                }
            };
        }

        widths.content = content;
        widths.preview = preview;
    }

    widths
}

/// A positioned slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Slot {
    /// Assigned bounds, relative to the container.
    pub bounds: Rect,
    /// Display state.
    pub flags: SlotFlags,
}

impl Slot {
    /// Whether the application layer should show this slot.
    ///
    /// A narrow menu is displayed; a suppressed preview is displayed beneath
    /// the content column.
    pub const fn is_displayed(&self) -> bool {
        self.bounds.width > 0 && !self.flags.contains(SlotFlags::COLLAPSED)
    }
}

/// Result of a layout pass.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Allocation {
    /// Menu slot.
    pub menu: Slot,
    /// Content slot.
    pub content: Slot,
    /// Preview slot.
    pub preview: Slot,
}

impl Allocation {
    /// Look up a slot by kind.
    pub const fn slot(&self, kind: RegionKind) -> &Slot {
        match kind {
            RegionKind::Menu => &self.menu,
            RegionKind::Content => &self.content,
            RegionKind::Preview => &self.preview,
        }
    }

    /// Horizontal space taken by the slots in the flow.
    ///
    /// A preview stacked behind the content (`SUPPRESSED`) adds nothing, so
    /// this matches [`ColumnWidths::occupied`].
    pub const fn total_width(&self) -> i32 {
        let sum = self.menu.bounds.width.saturating_add(self.content.bounds.width);
        if self.preview.flags.contains(SlotFlags::SUPPRESSED) {
            sum
        } else {
            sum.saturating_add(self.preview.bounds.width)
        }
    }

    /// Resolved widths in slot order.
    pub const fn widths(&self) -> (i32, i32, i32) {
        (self.menu.bounds.width, self.content.bounds.width, self.preview.bounds.width)
    }
}

/// Which per-region size query an aggregate query forwards to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SizeQuery {
    /// [`Region::preferred_size`].
    Preferred,
    /// [`Region::minimum_size`].
    Minimum,
    /// [`Region::maximum_size`].
    Maximum,
}

impl SizeQuery {
    /// Run this query against one region.
    pub fn of<R: Region + ?Sized>(self, region: &R) -> Size {
        match self {
            Self::Preferred => region.preferred_size(),
            Self::Minimum => region.minimum_size(),
            Self::Maximum => region.maximum_size(),
        }
    }
}

/// Allocates a container's width among menu, content and preview regions.
#[derive(Debug)]
pub struct ThreeColumnLayout<R> {
    menu: R,
    content: R,
    preview: R,
    options: ColumnOptions,
}

impl<R: Region> ThreeColumnLayout<R> {
    /// Create a layout from complete options.
    pub fn new(menu: R, content: R, preview: R, options: ColumnOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self {
            menu,
            content,
            preview,
            options,
        })
    }

    /// Start a builder that reports missing pieces as errors.
    pub const fn builder() -> ThreeColumnLayoutBuilder<R> {
        ThreeColumnLayoutBuilder {
            menu: None,
            content: None,
            preview: None,
            options: None,
        }
    }

    /// Current options.
    pub const fn options(&self) -> &ColumnOptions {
        &self.options
    }

    /// Mutable options, for toggles between passes.
    pub fn options_mut(&mut self) -> &mut ColumnOptions {
        &mut self.options
    }

    /// Menu region.
    pub const fn menu(&self) -> &R {
        &self.menu
    }

    /// Content region.
    pub const fn content(&self) -> &R {
        &self.content
    }

    /// Preview region.
    pub const fn preview(&self) -> &R {
        &self.preview
    }

    /// Mutable content region (e.g. to flip its collapsed marker).
    pub fn content_mut(&mut self) -> &mut R {
        &mut self.content
    }

    /// Region for a slot.
    pub const fn region(&self, kind: RegionKind) -> &R {
        match kind {
            RegionKind::Menu => &self.menu,
            RegionKind::Content => &self.content,
            RegionKind::Preview => &self.preview,
        }
    }

    /// Give back the region handles.
    pub fn into_regions(self) -> (R, R, R) {
        (self.menu, self.content, self.preview)
    }

    fn content_visible(&self) -> bool {
        match self.options.fallback {
            FallbackPolicy::Hide => self.options.content_visible,
            FallbackPolicy::StackBehind => !self.content.is_collapsed(),
        }
    }

    /// Compute widths without touching the regions.
    pub fn resolve(&self, usable_width: i32) -> ColumnWidths {
        allocate(usable_width, &self.options, self.content_visible())
    }

    /// Assign bounds to all three regions and lay out their children.
    pub fn layout(&mut self, bounds: Bounds) -> Allocation {
        let widths = self.resolve(bounds.width());
        let top = bounds.top;
        let height = bounds.height();
        let mut x = bounds.left;

        let mut menu_flags = collapsed_if_zero(widths.menu);
        menu_flags.set(SlotFlags::NARROW, !self.options.menu_expanded);
        let menu = Slot {
            bounds: Rect::new(x, top, widths.menu, height),
            flags: menu_flags,
        };
        x = x.saturating_add(widths.menu);

        let content = Slot {
            bounds: Rect::new(x, top, widths.content, height),
            flags: collapsed_if_zero(widths.content),
        };
        if !widths.preview_suppressed {
            x = x.saturating_add(widths.content);
        }

        let mut preview_flags = collapsed_if_zero(widths.preview);
        preview_flags.set(SlotFlags::SUPPRESSED, widths.preview_suppressed);
        let preview = Slot {
            bounds: Rect::new(x, top, widths.preview, height),
            flags: preview_flags,
        };

        debug!(
            usable = bounds.width(),
            menu = widths.menu,
            content = widths.content,
            preview = widths.preview,
            suppressed = widths.preview_suppressed,
            "column layout pass",
        );

        for (region, slot) in [
            (&mut self.menu, &menu),
            (&mut self.content, &content),
            (&mut self.preview, &preview),
        ] {
            region.set_bounds(slot.bounds);
            region.do_layout();
        }

        Allocation {
            menu,
            content,
            preview,
        }
    }

    /// Aggregate size for one query kind: widths add, heights take the max.
    pub fn aggregate_size(&self, query: SizeQuery, insets: Insets) -> Size {
        let sizes = [
            query.of(&self.menu),
            query.of(&self.content),
            query.of(&self.preview),
        ];
        let width = sizes.iter().fold(0, |acc: i32, s| acc.saturating_add(s.width));
        let height = sizes.iter().map(|s| s.height).max().unwrap_or(0);
        Size::new(width, height).expand(insets)
    }

    /// Preferred size of a container with the given insets.
    pub fn preferred_size(&self, insets: Insets) -> Size {
        self.aggregate_size(SizeQuery::Preferred, insets)
    }

    /// Minimum size of a container with the given insets.
    pub fn minimum_size(&self, insets: Insets) -> Size {
        self.aggregate_size(SizeQuery::Minimum, insets)
    }

    /// Maximum size of a container with the given insets.
    pub fn maximum_size(&self, insets: Insets) -> Size {
        self.aggregate_size(SizeQuery::Maximum, insets)
    }
}

fn collapsed_if_zero(width: i32) -> SlotFlags {
    if width == 0 {
        SlotFlags::COLLAPSED
    } else {
        SlotFlags::empty()
    }
}

/// Builder for [`ThreeColumnLayout`].
#[derive(Debug)]
pub struct ThreeColumnLayoutBuilder<R> {
    menu: Option<R>,
    content: Option<R>,
    preview: Option<R>,
    options: Option<RawColumnOptions>,
}

impl<R: Region> ThreeColumnLayoutBuilder<R> {
    /// Set the menu region.
    #[must_use]
    pub fn menu(mut self, region: R) -> Self {
        self.menu = Some(region);
        self
    }

    /// Set the content region.
    #[must_use]
    pub fn content(mut self, region: R) -> Self {
        self.content = Some(region);
        self
    }

    /// Set the preview region.
    #[must_use]
    pub fn preview(mut self, region: R) -> Self {
        self.preview = Some(region);
        self
    }

    /// Set complete options.
    #[must_use]
    pub fn options(mut self, options: ColumnOptions) -> Self {
        self.options = Some(options.into());
        self
    }

    /// Set options that may have missing keys.
    #[must_use]
    pub const fn raw_options(mut self, options: RawColumnOptions) -> Self {
        self.options = Some(options);
        self
    }

    /// Check that everything is present and build the layout.
    pub fn build(self) -> Result<ThreeColumnLayout<R>> {
        let menu = self.menu.ok_or(ConfigError::MissingRegion(RegionKind::Menu))?;
        let content = self.content.ok_or(ConfigError::MissingRegion(RegionKind::Content))?;
        let preview = self.preview.ok_or(ConfigError::MissingRegion(RegionKind::Preview))?;
        let options = ColumnOptions::try_from(self.options.unwrap_or_default())?;
        ThreeColumnLayout::new(menu, content, preview, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Panel;

    fn options(min_content: i32, min_preview: i32) -> ColumnOptions {
        ColumnOptions {
            min_menu_width: 40,
            max_menu_width: 200,
            min_content_width: min_content,
            min_preview_width: min_preview,
            content_visible: true,
            preview_visible: true,
            menu_expanded: true,
            fallback: FallbackPolicy::Hide,
        }
    }

    fn layout_with(options: ColumnOptions) -> ThreeColumnLayout<Panel> {
        ThreeColumnLayout::new(
            Panel::new(Size::new(200, 300)),
            Panel::new(Size::new(500, 600)),
            Panel::new(Size::new(400, 450)),
            options,
        )
        .unwrap()
    }

    #[test]
    fn test_even_split() {
        let widths = allocate(1200, &options(400, 400), true);
        assert_eq!((widths.menu, widths.content, widths.preview), (200, 500, 500));
    }

    #[test]
    fn test_odd_pixel_goes_to_preview() {
        let widths = allocate(1201, &options(0, 0), true);
        assert_eq!((widths.content, widths.preview), (500, 501));
    }

    #[test]
    fn test_clamp_content_to_minimum() {
        let widths = allocate(900, &options(500, 100), true);
        assert_eq!((widths.content, widths.preview), (500, 200));
    }

    #[test]
    fn test_clamp_preview_to_minimum() {
        let widths = allocate(900, &options(100, 500), true);
        assert_eq!((widths.content, widths.preview), (200, 500));
    }

    #[test]
    fn test_double_violation_hides_preview() {
        let widths = allocate(500, &options(250, 200), true);
        assert_eq!((widths.content, widths.preview), (300, 0));
        assert!(!widths.preview_suppressed);
    }

    #[test]
    fn test_double_violation_stacks_preview() {
        let opts = ColumnOptions {
            fallback: FallbackPolicy::StackBehind,
            ..options(250, 200)
        };
        let widths = allocate(500, &opts, true);
        assert_eq!((widths.content, widths.preview), (300, 300));
        assert!(widths.preview_suppressed);
        assert_eq!(widths.occupied(), 500);
    }

    #[test]
    fn test_single_visible_column() {
        let mut opts = options(400, 400);
        opts.preview_visible = false;
        let widths = allocate(1000, &opts, true);
        assert_eq!((widths.content, widths.preview), (800, 0));

        opts.preview_visible = true;
        let widths = allocate(1000, &opts, false);
        assert_eq!((widths.content, widths.preview), (0, 800));
    }

    #[test]
    fn test_layout_positions_left_to_right() {
        let mut layout = layout_with(options(400, 400));
        let alloc = layout.layout(Bounds::new(10, 710, 5, 1205));

        assert_eq!(alloc.menu.bounds, Rect::new(5, 10, 200, 700));
        assert_eq!(alloc.content.bounds, Rect::new(205, 10, 500, 700));
        assert_eq!(alloc.preview.bounds, Rect::new(705, 10, 500, 700));
        assert_eq!(alloc.total_width(), 1200);
        assert!(alloc.preview.is_displayed());
        assert_eq!(layout.preview().bounds(), alloc.preview.bounds);
    }

    #[test]
    fn test_layout_recurses_into_regions() {
        let mut layout = layout_with(options(400, 400));
        layout.layout(Bounds::new(0, 100, 0, 1200));
        layout.layout(Bounds::new(0, 100, 0, 1200));
        for kind in RegionKind::ALL {
            assert_eq!(layout.region(kind).layout_passes(), 2);
        }
    }

    #[test]
    fn test_collapsed_flags() {
        let mut layout = layout_with(options(400, 400));
        layout.options_mut().menu_expanded = false;
        layout.options_mut().preview_visible = false;
        let alloc = layout.layout(Bounds::new(0, 100, 0, 1000));

        assert!(alloc.menu.flags.contains(SlotFlags::NARROW));
        assert!(!alloc.menu.flags.contains(SlotFlags::COLLAPSED));
        assert_eq!(alloc.menu.bounds.width, 40);
        assert!(alloc.menu.is_displayed());
        assert_eq!(alloc.content.bounds.width, 960);
        assert!(alloc.preview.flags.contains(SlotFlags::COLLAPSED));
        assert!(!alloc.preview.is_displayed());
    }

    #[test]
    fn test_stack_behind_shares_origin() {
        let mut layout = layout_with(ColumnOptions {
            fallback: FallbackPolicy::StackBehind,
            ..options(250, 200)
        });
        let alloc = layout.layout(Bounds::new(0, 100, 0, 500));

        assert_eq!(alloc.content.bounds.x, alloc.preview.bounds.x);
        assert_eq!(alloc.preview.bounds.width, 300);
        assert!(alloc.preview.flags.contains(SlotFlags::SUPPRESSED));
        assert!(!alloc.preview.flags.contains(SlotFlags::COLLAPSED));
        assert_eq!(alloc.total_width(), 500);
    }

    #[test]
    fn test_expanded_menu_is_not_narrow() {
        let mut layout = layout_with(options(400, 400));
        let alloc = layout.layout(Bounds::new(0, 100, 0, 1200));
        assert!(alloc.menu.flags.is_empty());
        assert!(alloc.menu.is_displayed());
    }

    #[test]
    fn test_extreme_widths_do_not_overflow() {
        let opts = options(400, 400);
        let widths = allocate(i32::MIN, &opts, true);
        assert_eq!(widths.menu, 200);
        assert_eq!(widths.content, i32::MIN);

        let widths = allocate(i32::MAX, &opts, true);
        assert_eq!(widths.content + widths.preview, i32::MAX - 200);

        let mut layout = layout_with(opts);
        let alloc = layout.layout(Bounds::new(i32::MIN, i32::MAX, i32::MAX, i32::MIN));
        assert_eq!(alloc.menu.bounds.height, i32::MAX);
        assert!(!alloc.content.is_displayed());
    }

    #[test]
    fn test_stack_behind_reads_content_marker() {
        let mut layout = layout_with(ColumnOptions {
            fallback: FallbackPolicy::StackBehind,
            content_visible: true,
            ..options(400, 400)
        });
        layout.content_mut().set_collapsed(true);
        let alloc = layout.layout(Bounds::new(0, 100, 0, 1200));

        assert_eq!(alloc.content.bounds.width, 0);
        assert_eq!(alloc.preview.bounds.width, 1000);
        assert_eq!(alloc.preview.bounds.x, 200);
    }

    #[test]
    fn test_hide_ignores_content_marker() {
        let mut layout = layout_with(options(400, 400));
        layout.content_mut().set_collapsed(true);
        let alloc = layout.layout(Bounds::new(0, 100, 0, 1200));
        assert_eq!(alloc.widths(), (200, 500, 500));
    }

    #[test]
    fn test_narrow_container_goes_negative() {
        let mut layout = layout_with(options(0, 0));
        layout.options_mut().preview_visible = false;
        let alloc = layout.layout(Bounds::new(0, 100, 0, 150));
        assert_eq!(alloc.content.bounds.width, -50);
        assert!(!alloc.content.is_displayed());
    }

    #[test]
    fn test_aggregate_sizes() {
        let layout = layout_with(options(400, 400));
        let insets = Insets::new(1, 2, 3, 4);
        assert_eq!(layout.preferred_size(insets), Size::new(1106, 604));
        assert_eq!(layout.minimum_size(Insets::ZERO), Size::new(1100, 600));
        assert_eq!(layout.maximum_size(Insets::ZERO), Size::new(1100, 600));
    }

    #[test]
    fn test_builder_reports_missing_region() {
        let err = ThreeColumnLayout::builder()
            .menu(Panel::default())
            .preview(Panel::default())
            .options(options(0, 0))
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingRegion(RegionKind::Content)));
    }

    #[test]
    fn test_builder_reports_missing_options() {
        let err = ThreeColumnLayout::builder()
            .menu(Panel::default())
            .content(Panel::default())
            .preview(Panel::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingOption("minMenuWidth")));
    }
}
