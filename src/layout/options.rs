//! Options for the three-column allocator.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// What happens when content and preview cannot both meet their minimum widths.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Preview gets zero width and leaves the flow; content takes the rest.
    ///
    /// Content visibility comes from [`ColumnOptions::content_visible`].
    #[default]
    Hide,
    /// Preview keeps the same width as content and is stacked underneath it.
    ///
    /// Content visibility comes from the content region's collapsed marker.
    StackBehind,
}

/// Sizing and visibility options, read on every layout pass.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ColumnOptions {
    /// Menu width when collapsed.
    pub min_menu_width: i32,
    /// Menu width when expanded.
    pub max_menu_width: i32,
    /// Smallest content width while the preview is shown alongside.
    pub min_content_width: i32,
    /// Preview is dropped below this width.
    pub min_preview_width: i32,
    /// Whether the content column participates at all.
    pub content_visible: bool,
    /// Whether the preview column participates at all.
    pub preview_visible: bool,
    /// Selects `max_menu_width` over `min_menu_width`.
    pub menu_expanded: bool,
    /// Behavior when both minima cannot be met.
    pub fallback: FallbackPolicy,
}

impl ColumnOptions {
    /// Width the menu takes this pass.
    #[inline]
    pub const fn menu_width(&self) -> i32 {
        if self.menu_expanded {
            self.max_menu_width
        } else {
            self.min_menu_width
        }
    }

    /// Check the width constraints.
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("minMenuWidth", self.min_menu_width),
            ("maxMenuWidth", self.max_menu_width),
            ("minContentWidth", self.min_content_width),
            ("minPreviewWidth", self.min_preview_width),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeWidth { key, value });
            }
        }
        if self.min_menu_width > self.max_menu_width {
            return Err(ConfigError::InvalidMenuRange {
                min: self.min_menu_width,
                max: self.max_menu_width,
            });
        }
        Ok(())
    }
}

/// Options as they arrive from a config file or caller, with every key optional.
///
/// Converting into [`ColumnOptions`] reports the first missing key.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawColumnOptions {
    /// See [`ColumnOptions::min_menu_width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_menu_width: Option<i32>,
    /// See [`ColumnOptions::max_menu_width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_menu_width: Option<i32>,
    /// See [`ColumnOptions::min_content_width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_content_width: Option<i32>,
    /// See [`ColumnOptions::min_preview_width`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_preview_width: Option<i32>,
    /// See [`ColumnOptions::content_visible`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_visible: Option<bool>,
    /// See [`ColumnOptions::preview_visible`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_visible: Option<bool>,
    /// See [`ColumnOptions::menu_expanded`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub menu_expanded: Option<bool>,
    /// Optional; defaults to [`FallbackPolicy::Hide`].
    #[serde(default)]
    pub fallback: FallbackPolicy,
}

impl TryFrom<RawColumnOptions> for ColumnOptions {
    type Error = ConfigError;

    fn try_from(raw: RawColumnOptions) -> Result<Self> {
        let options = Self {
            min_menu_width: raw.min_menu_width.ok_or(ConfigError::MissingOption("minMenuWidth"))?,
            max_menu_width: raw.max_menu_width.ok_or(ConfigError::MissingOption("maxMenuWidth"))?,
            min_content_width: raw
                .min_content_width
                .ok_or(ConfigError::MissingOption("minContentWidth"))?,
            min_preview_width: raw
                .min_preview_width
                .ok_or(ConfigError::MissingOption("minPreviewWidth"))?,
            content_visible: raw
                .content_visible
                .ok_or(ConfigError::MissingOption("contentVisible"))?,
            preview_visible: raw
                .preview_visible
                .ok_or(ConfigError::MissingOption("previewVisible"))?,
            menu_expanded: raw.menu_expanded.ok_or(ConfigError::MissingOption("menuExpanded"))?,
            fallback: raw.fallback,
        };
        options.validate()?;
        Ok(options)
    }
}

impl From<ColumnOptions> for RawColumnOptions {
    fn from(options: ColumnOptions) -> Self {
        Self {
            min_menu_width: Some(options.min_menu_width),
            max_menu_width: Some(options.max_menu_width),
            min_content_width: Some(options.min_content_width),
            min_preview_width: Some(options.min_preview_width),
            content_visible: Some(options.content_visible),
            preview_visible: Some(options.preview_visible),
            menu_expanded: Some(options.menu_expanded),
            fallback: options.fallback,
        }
    }
}
