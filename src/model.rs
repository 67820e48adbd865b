//! Intermediate representation for SoundFont bank metadata

/// Raw preset record as exposed by the parser adapter.
///
/// Fields are optional because SF2 preset headers may carry a terminator
/// record with no playable content; validation happens in the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresetRecord {
    pub bank: Option<i32>,
    pub preset: Option<i32>,
    pub name: Option<String>,
}

impl PresetRecord {
    pub fn new(bank: i32, preset: i32, name: impl Into<String>) -> Self {
        Self {
            bank: Some(bank),
            preset: Some(preset),
            name: Some(name.into()),
        }
    }

    /// Terminator record: no bank, no preset, no name
    pub fn terminator() -> Self {
        Self {
            bank: None,
            preset: None,
            name: None,
        }
    }
}

/// Validated patch, ready for emission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    pub name: String,
    pub bank: i32,
    pub preset: i32,
}

/// Parsed view of one SoundFont file, as handed over by the parser adapter
#[derive(Debug, Clone)]
pub struct ParsedBank {
    /// Bank display name from the SoundFont INFO metadata
    pub display_name: String,
    /// Preset records in file order, terminator included if the parser
    /// exposes one
    pub presets: Vec<PresetRecord>,
}

/// One SoundFont file's generated identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankDescriptor {
    /// Input file base name, no directory, no extension
    pub source_stem: String,
    /// Bank display name from the SoundFont metadata
    pub display_name: String,
    /// `display_name` filtered to `[A-Za-z0-9_]`; used in generated symbols
    pub identifier: String,
    /// Patches sorted ascending by (bank, preset)
    pub patches: Vec<Patch>,
}

/// Filter a display name down to identifier characters.
///
/// Characters outside `[A-Za-z0-9_]` are dropped, not replaced, so
/// "Grand Piano #1" becomes "GrandPiano1".
pub fn sanitize_identifier(display_name: &str) -> String {
    display_name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect()
}

/// True when the record list ends with a terminator (bank field absent)
pub fn has_terminator(records: &[PresetRecord]) -> bool {
    records.last().is_some_and(|r| r.bank.is_none())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_drops_illegal_characters() {
        assert_eq!(sanitize_identifier("Grand Piano #1"), "GrandPiano1");
        assert_eq!(sanitize_identifier("Grand-Piano!"), "GrandPiano");
        assert_eq!(sanitize_identifier("Free_Font GM Ver 3.2"), "Free_FontGMVer32");
    }

    #[test]
    fn test_sanitize_keeps_legal_characters() {
        assert_eq!(sanitize_identifier("RolandNicePiano"), "RolandNicePiano");
        assert_eq!(sanitize_identifier("a_B_9"), "a_B_9");
    }

    #[test]
    fn test_sanitize_can_yield_empty() {
        assert_eq!(sanitize_identifier("!!!"), "");
        assert_eq!(sanitize_identifier(""), "");
    }

    #[test]
    fn test_has_terminator() {
        assert!(!has_terminator(&[]));
        assert!(!has_terminator(&[PresetRecord::new(0, 0, "A")]));
        assert!(has_terminator(&[
            PresetRecord::new(0, 0, "A"),
            PresetRecord::terminator(),
        ]));
        // Terminator not in last position is not a terminator
        assert!(!has_terminator(&[
            PresetRecord::terminator(),
            PresetRecord::new(0, 0, "A"),
        ]));
    }
}
