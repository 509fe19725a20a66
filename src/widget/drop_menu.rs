//! Drop Menu: Click-to-expand action menu with nested submenus.

use tracing::trace;

use super::traits::{ClickTarget, Widget};
use crate::layout::Rect;

/// Vertical distance between a menu item's top edge and its submenu.
pub const SUBMENU_OFFSET: i32 = 29;

/// A menu entry, possibly with a submenu.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct MenuItem {
    /// Display label.
    pub label: String,
    /// Action key.
    pub key: String,
    /// Submenu entries.
    pub children: Vec<MenuItem>,
}

impl MenuItem {
    /// Create a leaf item.
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
            children: Vec::new(),
        }
    }

    /// Attach submenu entries.
    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }

    /// Whether this item opens a submenu.
    pub fn has_submenu(&self) -> bool {
        !self.children.is_empty()
    }

    fn find(&self, key: &str) -> Option<&Self> {
        if self.key == key {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(key))
    }
}

/// State of a drop menu.
#[derive(Clone, Debug, Default)]
pub struct DropMenu {
    items: Vec<MenuItem>,
    expanded: bool,
    dirty: bool,
}

impl DropMenu {
    /// Create a collapsed menu.
    pub const fn new(items: Vec<MenuItem>) -> Self {
        Self {
            items,
            expanded: false,
            dirty: true,
        }
    }

    /// Top-level items.
    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Whether the menu is open.
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Open the menu. Returns `true` if it was closed.
    pub fn expand(&mut self) -> bool {
        if self.expanded {
            return false;
        }
        trace!("menu expanded");
        self.expanded = true;
        self.dirty = true;
        true
    }

    /// Close the menu. Returns `true` if it was open.
    pub fn collapse(&mut self) -> bool {
        if !self.expanded {
            return false;
        }
        trace!("menu collapsed");
        self.expanded = false;
        self.dirty = true;
        true
    }

    /// Find an item by key at any depth.
    pub fn find(&self, key: &str) -> Option<&MenuItem> {
        self.items.iter().find_map(|item| item.find(key))
    }

    /// Top-left corner of the submenu for an item occupying `anchor`.
    pub const fn submenu_origin(anchor: Rect) -> (i32, i32) {
        (anchor.x, anchor.y + SUBMENU_OFFSET)
    }
}

impl Widget for DropMenu {
    fn handle_click(&mut self, target: ClickTarget) -> bool {
        match target {
            ClickTarget::Nav(_) => self.expand(),
            ClickTarget::Outside | ClickTarget::Panel => false,
        }
    }

    fn needs_redraw(&self) -> bool {
        self.dirty
    }

    fn clear_redraw(&mut self) {
        self.dirty = false;
    }
}
