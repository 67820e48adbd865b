//! Error types for catalog generation

use std::path::PathBuf;

/// Error type for catalog generation failures
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The external parser rejected the file
    #[error("failed to parse SoundFont file '{}': {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// A bank contained no playable presets
    #[error("'{stem}' contains no presets")]
    NoPresets { stem: String },

    /// A preset survived terminator removal but is missing a field
    #[error("'{stem}' preset {index} is missing its {field} field")]
    IncompletePreset {
        stem: String,
        index: usize,
        field: &'static str,
    },

    /// The bank display name sanitized down to nothing
    #[error("bank name '{display_name}' contains no identifier characters")]
    EmptyIdentifier { display_name: String },

    /// Two input files produced the same generated identifier
    #[error("identifier '{identifier}' is produced by more than one input file")]
    DuplicateIdentifier { identifier: String },

    /// The aggregate file lacks a required sentinel comment
    #[error("missing '{marker}' sentinel in aggregate file")]
    MissingSentinel { marker: &'static str },

    /// The END sentinel appears before the BEGIN sentinel
    #[error(
        "'{end}' sentinel appears before '{begin}' in aggregate file",
        begin = crate::generators::registry::BEGIN_MARKER,
        end = crate::generators::registry::END_MARKER
    )]
    SentinelOrder,

    /// Filesystem failure on an input or output path
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
