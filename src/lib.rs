//! # Trellis
//!
//! Column allocation and action widget state for content-management admin panels.
//!
//! The admin frame is three columns side by side: a navigation menu, the
//! content area and an optional preview pane. [`ThreeColumnLayout`] decides
//! how wide each one is for a given container, honoring menu expansion,
//! column visibility and minimum widths, and falls back to content-only (or
//! a stacked preview) when both columns cannot fit.
//!
//! ## Core Concepts
//!
//! - **Pure passes**: a layout pass is a function of the container bounds and
//!   the current options; nothing carries over between passes
//! - **Regions**: anything implementing [`Region`] can fill a column, including
//!   a [`Composite`] with its own nested layout
//! - **Fallback policies**: [`FallbackPolicy::Hide`] drops the preview,
//!   [`FallbackPolicy::StackBehind`] keeps it underneath the content
//! - **Widgets**: collapsible action tabs and drop menus as plain state machines
//!
//! ## Example
//!
//! ```rust
//! use trellis::{Bounds, ColumnOptions, FallbackPolicy, Panel, Size, ThreeColumnLayout};
//!
//! let options = ColumnOptions {
//!     min_menu_width: 60,
//!     max_menu_width: 200,
//!     min_content_width: 400,
//!     min_preview_width: 400,
//!     content_visible: true,
//!     preview_visible: true,
//!     menu_expanded: true,
//!     fallback: FallbackPolicy::Hide,
//! };
//! let mut layout = ThreeColumnLayout::new(
//!     Panel::new(Size::new(200, 600)),
//!     Panel::new(Size::new(600, 600)),
//!     Panel::new(Size::new(600, 600)),
//!     options,
//! )?;
//!
//! let allocation = layout.layout(Bounds::new(0, 800, 0, 1200));
//! assert_eq!(allocation.widths(), (200, 500, 500));
//! # Ok::<(), trellis::ConfigError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod layout;
pub mod widget;

// Re-exports for convenience
pub use config::LayoutConfig;
pub use error::{ConfigError, Result};
pub use layout::{
    Allocation, Bounds, ColumnOptions, Composite, ContainerLayout, FallbackPolicy, Insets, Panel,
    Rect, Region, RegionKind, Size, Slot, SlotFlags, ThreeColumnLayout,
};
pub use widget::{ActionTabSet, ClickTarget, DropMenu, Widget};
