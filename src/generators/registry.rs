//! Registration weaving: splice the generated bank registry into the
//! sentinel-delimited region of the aggregate Swift file.

use crate::error::CatalogError;

/// Start of the generator-owned region. First occurrence wins.
pub const BEGIN_MARKER: &str = "// -BEGIN-";
/// End of the generator-owned region. Everything from here on is preserved.
pub const END_MARKER: &str = "// -END-";

/// Render the registry entries, one line per identifier in input order.
pub fn render_registrations(identifiers: &[String]) -> String {
    let mut out = String::new();
    for identifier in identifiers {
        out.push_str(&format!(
            "{id}SoundFont.name: {id}SoundFont,\n",
            id = identifier
        ));
    }
    out
}

/// Replace the sentinel-delimited region of `contents` with freshly
/// rendered registrations.
///
/// Only the first occurrence of each sentinel is considered. Bytes before
/// the BEGIN sentinel and from the END sentinel (inclusive) to the end of
/// the file pass through untouched, so repeated weaving of the same
/// identifier list is byte-identical.
///
/// # Errors
///
/// Returns `MissingSentinel` if either marker is absent and
/// `SentinelOrder` if the END marker precedes the BEGIN marker.
pub fn splice(contents: &str, identifiers: &[String]) -> Result<String, CatalogError> {
    let begin = contents
        .find(BEGIN_MARKER)
        .ok_or(CatalogError::MissingSentinel {
            marker: BEGIN_MARKER,
        })?;
    let end = contents
        .find(END_MARKER)
        .ok_or(CatalogError::MissingSentinel { marker: END_MARKER })?;

    if end < begin {
        return Err(CatalogError::SentinelOrder);
    }

    let mut out = String::with_capacity(contents.len());
    out.push_str(&contents[..begin]);
    out.push_str(BEGIN_MARKER);
    out.push('\n');
    out.push_str(&render_registrations(identifiers));
    out.push_str(&contents[end..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_weave_replaces_region() {
        let target = "prefix\n// -BEGIN-\nold junk\n// -END-\nsuffix";
        let woven = splice(target, &ids(&["A", "B"])).unwrap();
        assert_eq!(
            woven,
            "prefix\n// -BEGIN-\nASoundFont.name: ASoundFont,\nBSoundFont.name: BSoundFont,\n// -END-\nsuffix"
        );
    }

    #[test]
    fn test_weave_is_idempotent() {
        let target = "prefix\n// -BEGIN-\nold junk\n// -END-\nsuffix";
        let once = splice(target, &ids(&["A", "B"])).unwrap();
        let twice = splice(&once, &ids(&["A", "B"])).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_identifier_order_is_preserved() {
        let target = "// -BEGIN-\n// -END-\n";
        let woven = splice(target, &ids(&["Zebra", "Alpha"])).unwrap();
        let zebra = woven.find("ZebraSoundFont").unwrap();
        let alpha = woven.find("AlphaSoundFont").unwrap();
        assert!(zebra < alpha, "entries keep input order, never sorted");
    }

    #[test]
    fn test_missing_begin_sentinel() {
        let err = splice("no markers\n// -END-\n", &ids(&["A"])).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingSentinel {
                marker: BEGIN_MARKER
            }
        ));
    }

    #[test]
    fn test_missing_end_sentinel() {
        let err = splice("// -BEGIN-\nno end\n", &ids(&["A"])).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::MissingSentinel { marker: END_MARKER }
        ));
    }

    #[test]
    fn test_end_before_begin_is_rejected() {
        let err = splice("// -END-\n// -BEGIN-\n", &ids(&["A"])).unwrap_err();
        assert!(matches!(err, CatalogError::SentinelOrder));
    }

    #[test]
    fn test_ordering_error_names_both_markers() {
        let msg = CatalogError::SentinelOrder.to_string();
        assert!(msg.contains(BEGIN_MARKER));
        assert!(msg.contains(END_MARKER));
    }

    #[test]
    fn test_only_first_marker_occurrence_is_used() {
        let target = "// -BEGIN-\nx\n// -END-\ntail\n// -BEGIN-\ny\n// -END-\n";
        let woven = splice(target, &ids(&["A"])).unwrap();
        // Second marker pair is part of the preserved suffix
        assert!(woven.ends_with("tail\n// -BEGIN-\ny\n// -END-\n"));
        assert_eq!(woven.matches("ASoundFont.name").count(), 1);
    }

    #[test]
    fn test_empty_identifier_list_empties_region() {
        let target = "a\n// -BEGIN-\nstale\n// -END-\nb";
        let woven = splice(target, &[]).unwrap();
        assert_eq!(woven, "a\n// -BEGIN-\n// -END-\nb");
    }
}
