//! Layout module: Column allocation for the admin panel frame.
//!
//! Layouts hold no state between passes beyond their region handles and
//! options. Each pass is recomputed from scratch on resize or toggle.

mod columns;
mod container;
mod options;
mod rect;
mod region;

pub use columns::{
    allocate, Allocation, ColumnWidths, SizeQuery, Slot, SlotFlags, ThreeColumnLayout,
    ThreeColumnLayoutBuilder,
};
pub use container::{Composite, ContainerLayout};
pub use options::{ColumnOptions, FallbackPolicy, RawColumnOptions};
pub use rect::{Bounds, Insets, Rect, Size};
pub use region::{Panel, Region, RegionKind};
