//! Widget trait shared by the action widgets.
//!
//! Widgets here are state machines. Event binding and styling live in the
//! host layer, which translates clicks into [`ClickTarget`]s and reads the
//! resulting state back out.

/// Where a click landed, relative to a widget.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ClickTarget {
    /// Anywhere outside the widget (including embedded preview frames).
    Outside,
    /// The widget's navigation strip or trigger, at the given item index.
    Nav(usize),
    /// Inside an open panel or submenu.
    Panel,
}

/// A UI component driven by clicks.
pub trait Widget {
    /// Handle a click.
    ///
    /// Returns `true` if the widget's state changed.
    fn handle_click(&mut self, target: ClickTarget) -> bool;

    /// Check if this widget needs to be redrawn.
    fn needs_redraw(&self) -> bool;

    /// Clear the redraw flag after the host has applied the new state.
    fn clear_redraw(&mut self);
}
