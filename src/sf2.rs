//! Adapter over the external SoundFont parser.
//!
//! All binary chunk parsing is delegated to `rustysynth`; this module only
//! maps its view of a bank into the crate's own [`ParsedBank`] records.

use crate::error::CatalogError;
use crate::model::{ParsedBank, PresetRecord};
use rustysynth::SoundFont;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Parse one `.sf2` file into a [`ParsedBank`].
pub fn load_bank(path: &Path) -> Result<ParsedBank, CatalogError> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let soundfont = SoundFont::new(&mut reader).map_err(|e| CatalogError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let presets = soundfont
        .get_presets()
        .iter()
        .map(|p| PresetRecord::new(p.get_bank_number(), p.get_patch_number(), p.get_name()))
        .collect();

    Ok(ParsedBank {
        display_name: soundfont.get_info().get_bank_name().to_string(),
        presets,
    })
}

/// Base file name with directory and extension stripped.
pub fn source_stem(path: &Path) -> Result<String, CatalogError> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
        .ok_or_else(|| CatalogError::Parse {
            path: path.to_path_buf(),
            message: "input path has no usable file stem".to_string(),
        })
}
