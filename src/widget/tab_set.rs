//! Action Tab Set: Collapsible tab strip whose panels float over the page.
//!
//! Used for the site tree actions row and the page actions menu. All tabs
//! start closed, the open tab closes when clicked again, and a click anywhere
//! outside the strip (or inside the open panel) closes it.
//!
//! Opening a tab computes where its panel goes:
//!
//! - horizontally, by [`TabSetKind`] and the tab's position in the strip;
//! - vertically, the panel "rises up" above the strip when it would run past
//!   the bottom of the viewport and there is room above.

use bitflags::bitflags;
use tracing::trace;

use super::traits::{ClickTarget, Widget};
use crate::layout::Rect;

bitflags! {
    /// Markers the host applies to the tab set while a panel is open.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct PanelMarkers: u8 {
        /// A panel is open.
        const OPEN      = 0b0000_0001;
        /// The open panel belongs to the last tab and is right-aligned.
        const OPEN_LAST = 0b0000_0010;
        /// The open panel is drawn above the strip.
        const RISE_UP   = 0b0000_0100;
    }
}

/// Where a tab strip lives, which decides horizontal panel placement.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum TabSetKind {
    /// Page actions menu: panels line up with their tab.
    #[default]
    ActionsMenu,
    /// Site tree actions in the full-width tree view.
    SiteTree,
    /// Site tree actions in the narrow sidebar tree.
    SiteTreeSidebar,
}

/// A horizontal panel edge offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Edge {
    /// Leave the edge to normal flow.
    #[default]
    Auto,
    /// Pixel offset from the strip's edge.
    Px(i32),
}

/// A tab and the panel it opens.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Tab {
    /// Panel identifier.
    pub id: String,
    /// Tab position relative to the strip.
    pub bounds: Rect,
    /// Outer height of the tab's panel.
    pub panel_height: i32,
}

impl Tab {
    /// Create a tab.
    pub fn new(id: impl Into<String>, bounds: Rect, panel_height: i32) -> Self {
        Self {
            id: id.into(),
            bounds,
            panel_height,
        }
    }
}

/// Page geometry needed to decide whether a panel rises up.
///
/// Offsets are document coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PageGeometry {
    /// Viewport height.
    pub viewport_height: i32,
    /// Document scroll offset.
    pub scroll_top: i32,
    /// Top of the tab strip.
    pub nav_top: i32,
    /// Height of the tab strip.
    pub nav_height: i32,
    /// Top of an enclosing south (bottom-docked) container, if any.
    pub south_top: Option<i32>,
}

impl PageGeometry {
    /// Lowest point a panel may reach before it should open upwards.
    pub const fn end_of_window(&self) -> i32 {
        self.viewport_height + self.scroll_top - self.nav_height
    }

    /// Top offset for a risen panel, or `None` if it opens downwards.
    pub fn rise_up(&self, panel_height: i32) -> Option<i32> {
        let overflows = self.nav_top + panel_height >= self.end_of_window();
        let room_above = self.nav_top - panel_height > 0;
        if !(overflows && room_above) {
            return None;
        }
        let padding = self.south_top.map_or(0, |south| self.nav_top - south);
        Some(-panel_height - padding)
    }
}

/// Where an open panel is drawn.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct PanelPlacement {
    /// Left edge.
    pub left: Edge,
    /// Right edge.
    pub right: Edge,
    /// Top offset from the strip.
    pub top: i32,
    /// Markers for the tab set.
    pub markers: PanelMarkers,
}

/// State of an action tab strip.
#[derive(Clone, Debug, Default)]
pub struct ActionTabSet {
    kind: TabSetKind,
    tabs: Vec<Tab>,
    active: Option<usize>,
    placement: Option<PanelPlacement>,
    geometry: PageGeometry,
    dirty: bool,
}

impl ActionTabSet {
    /// Create a closed tab set.
    pub const fn new(kind: TabSetKind, tabs: Vec<Tab>) -> Self {
        Self {
            kind,
            tabs,
            active: None,
            placement: None,
            geometry: PageGeometry {
                viewport_height: 0,
                scroll_top: 0,
                nav_top: 0,
                nav_height: 0,
                south_top: None,
            },
            dirty: true,
        }
    }

    /// Strip kind.
    pub const fn kind(&self) -> TabSetKind {
        self.kind
    }

    /// Tabs in strip order.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    /// Index of the open tab.
    pub const fn active(&self) -> Option<usize> {
        self.active
    }

    /// Open tab, if any.
    pub fn active_tab(&self) -> Option<&Tab> {
        self.active.and_then(|index| self.tabs.get(index))
    }

    /// Placement of the open panel.
    pub const fn placement(&self) -> Option<PanelPlacement> {
        self.placement
    }

    /// Markers for the current state (empty when closed).
    pub fn markers(&self) -> PanelMarkers {
        self.placement.map(|p| p.markers).unwrap_or_default()
    }

    /// Action tabs never restore a remembered tab after a form submission.
    pub const fn ignores_tab_state(&self) -> bool {
        true
    }

    /// Update page geometry (after resize or scroll).
    pub fn set_geometry(&mut self, geometry: PageGeometry) {
        self.geometry = geometry;
    }

    /// Replace the tabs, closing any open panel.
    pub fn set_tabs(&mut self, tabs: Vec<Tab>) {
        self.tabs = tabs;
        self.close();
        self.dirty = true;
    }

    /// Open a tab. Returns where its panel goes.
    ///
    /// Out-of-range indices are ignored.
    pub fn activate(&mut self, index: usize) -> Option<PanelPlacement> {
        let placement = self.place(index)?;
        trace!(index, ?placement, "tab opened");
        self.active = Some(index);
        self.placement = Some(placement);
        self.dirty = true;
        Some(placement)
    }

    /// Close the open tab. Returns `true` if one was open.
    pub fn close(&mut self) -> bool {
        if self.active.take().is_none() {
            return false;
        }
        trace!("tab closed");
        self.placement = None;
        self.dirty = true;
        true
    }

    /// Open a closed tab, or close it if it is already open.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.active == Some(index) {
            self.close()
        } else {
            self.activate(index).is_some()
        }
    }

    fn place(&self, index: usize) -> Option<PanelPlacement> {
        let tab = self.tabs.get(index)?;
        let is_first = index == 0;
        let is_last = index + 1 == self.tabs.len();

        let mut placement = match self.kind {
            TabSetKind::SiteTreeSidebar => PanelPlacement {
                markers: PanelMarkers::OPEN,
                ..PanelPlacement::default()
            },
            TabSetKind::SiteTree if is_last => PanelPlacement {
                left: Edge::Auto,
                right: Edge::Px(0),
                markers: PanelMarkers::OPEN_LAST,
                ..PanelPlacement::default()
            },
            TabSetKind::SiteTree if is_first => PanelPlacement {
                left: Edge::Px(0),
                markers: PanelMarkers::OPEN,
                ..PanelPlacement::default()
            },
            TabSetKind::ActionsMenu | TabSetKind::SiteTree => PanelPlacement {
                left: Edge::Px(tab.bounds.x),
                ..PanelPlacement::default()
            },
        };

        if let Some(top) = self.geometry.rise_up(tab.panel_height) {
            placement.top = top;
            placement.markers |= PanelMarkers::RISE_UP;
        }

        Some(placement)
    }
}

impl Widget for ActionTabSet {
    fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Nav(index) => self.toggle(index),
            ClickTarget::Outside | ClickTarget::Panel => self.close(),
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
