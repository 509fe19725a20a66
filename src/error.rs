//! Error types for layout configuration.
//!
//! Layout passes and size queries never fail; every error here is raised
//! while a layout is being assembled or its options are being loaded.

use std::path::PathBuf;

use thiserror::Error;

use crate::layout::RegionKind;

/// Errors raised while building a column layout.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A region handle was not supplied.
    #[error("layout is missing the \"{0}\" region")]
    MissingRegion(RegionKind),

    /// A required option key was not supplied.
    #[error("layout option \"{0}\" is required")]
    MissingOption(&'static str),

    /// The collapsed menu is wider than the expanded one.
    #[error("minMenuWidth ({min}) must not exceed maxMenuWidth ({max})")]
    InvalidMenuRange {
        /// Configured collapsed width.
        min: i32,
        /// Configured expanded width.
        max: i32,
    },

    /// A width option was negative.
    #[error("layout option \"{key}\" must be non-negative, got {value}")]
    NegativeWidth {
        /// Option key.
        key: &'static str,
        /// Offending value.
        value: i32,
    },

    /// The options file could not be read.
    #[error("failed to read layout config {path}: {source}")]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The options file is not valid TOML for this schema.
    #[error("failed to parse layout config: {0}")]
    Parse(#[from] toml::de::Error),

    /// The options could not be rendered as TOML.
    #[error("failed to write layout config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result alias for layout configuration.
pub type Result<T> = std::result::Result<T, ConfigError>;
