//! Layout configuration files.
//!
//! Column options are kept in TOML under a `[columns]` table, using the same
//! camelCase keys the admin templates use:
//!
//! ```toml
//! [columns]
//! minMenuWidth = 60
//! maxMenuWidth = 200
//! minContentWidth = 820
//! minPreviewWidth = 400
//! contentVisible = true
//! previewVisible = true
//! menuExpanded = true
//! fallback = "stack-behind"   # optional, defaults to "hide"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::layout::{ColumnOptions, RawColumnOptions};

/// Parsed layout configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Options for the three-column allocator.
    #[serde(default)]
    pub columns: RawColumnOptions,
}

impl LayoutConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "rejected layout config");
        })?;
        debug!(path = %path.display(), "loaded layout config");
        Ok(config)
    }

    /// Validated column options.
    pub fn column_options(&self) -> Result<ColumnOptions> {
        ColumnOptions::try_from(self.columns)
    }

    /// Render as TOML in the same schema [`LayoutConfig::from_toml_str`] reads.
    ///
    /// Unset keys are left out.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }
}

impl From<ColumnOptions> for LayoutConfig {
    fn from(options: ColumnOptions) -> Self {
        Self {
            columns: options.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::FallbackPolicy;
    use std::io::Write;

    const FULL: &str = r#"
[columns]
minMenuWidth = 60
maxMenuWidth = 200
minContentWidth = 820
minPreviewWidth = 400
contentVisible = true
previewVisible = false
menuExpanded = true
fallback = "stack-behind"
"#;

    #[test]
    fn test_parse_full_config() {
        let options = LayoutConfig::from_toml_str(FULL)
            .unwrap()
            .column_options()
            .unwrap();
        assert_eq!(options.min_content_width, 820);
        assert!(!options.preview_visible);
        assert_eq!(options.fallback, FallbackPolicy::StackBehind);
    }

    #[test]
    fn test_fallback_defaults_to_hide() {
        let content = FULL.replace("fallback = \"stack-behind\"\n", "");
        let options = LayoutConfig::from_toml_str(&content)
            .unwrap()
            .column_options()
            .unwrap();
        assert_eq!(options.fallback, FallbackPolicy::Hide);
    }

    #[test]
    fn test_missing_key_reported() {
        let content = FULL.replace("menuExpanded = true\n", "");
        let err = LayoutConfig::from_toml_str(&content)
            .unwrap()
            .column_options()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingOption("menuExpanded")));
    }

    #[test]
    fn test_empty_file_has_no_options() {
        let config = LayoutConfig::from_toml_str("").unwrap();
        assert!(matches!(
            config.column_options(),
            Err(ConfigError::MissingOption("minMenuWidth"))
        ));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let content = FULL.replace("minMenuWidth", "minMenuWdith");
        let err = LayoutConfig::from_toml_str(&content).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_written_config_reads_back() {
        let options = LayoutConfig::from_toml_str(FULL)
            .unwrap()
            .column_options()
            .unwrap();
        let text = LayoutConfig::from(options).to_toml_string().unwrap();

        assert!(text.contains("[columns]"));
        assert!(text.contains("minContentWidth = 820"));
        assert!(text.contains("fallback = \"stack-behind\""));

        let reread = LayoutConfig::from_toml_str(&text)
            .unwrap()
            .column_options()
            .unwrap();
        assert_eq!(reread, options);
    }

    #[test]
    fn test_unset_keys_are_not_written() {
        let config = LayoutConfig::from_toml_str("[columns]\nminMenuWidth = 60\n").unwrap();
        let text = config.to_toml_string().unwrap();
        assert!(text.contains("minMenuWidth = 60"));
        assert!(!text.contains("maxMenuWidth"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FULL.as_bytes()).unwrap();

        let config = LayoutConfig::load(file.path()).unwrap();
        assert_eq!(config.columns.max_menu_width, Some(200));
    }

    #[test]
    fn test_load_missing_file() {
        let err = LayoutConfig::load("/nonexistent/trellis/layout.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
