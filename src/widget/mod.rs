//! Action widgets: collapsible tab strips and drop menus.
//!
//! These model only widget state and panel geometry. The host layer binds
//! events, applies markers as styling and positions elements.
//!
//! # Example
//!
//! ```rust
//! use trellis::layout::Rect;
//! use trellis::widget::{ActionTabSet, ClickTarget, Tab, TabSetKind, Widget};
//!
//! let mut tabs = ActionTabSet::new(
//!     TabSetKind::SiteTree,
//!     vec![
//!         Tab::new("add", Rect::new(0, 0, 60, 30), 120),
//!         Tab::new("batch", Rect::new(61, 0, 60, 30), 180),
//!     ],
//! );
//! tabs.handle_click(ClickTarget::Nav(1));
//! assert_eq!(tabs.active(), Some(1));
//! tabs.handle_click(ClickTarget::Outside);
//! assert_eq!(tabs.active(), None);
//! ```

mod drop_menu;
mod tab_set;
mod traits;

pub use drop_menu::{DropMenu, MenuItem, SUBMENU_OFFSET};
pub use tab_set::{ActionTabSet, Edge, PageGeometry, PanelMarkers, PanelPlacement, Tab, TabSetKind};
pub use traits::{ClickTarget, Widget};
