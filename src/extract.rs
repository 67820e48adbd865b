//! Bank extraction: raw preset records to a validated [`BankDescriptor`]

use crate::error::CatalogError;
use crate::model::{has_terminator, sanitize_identifier, BankDescriptor, ParsedBank, Patch};

/// Extract a [`BankDescriptor`] from a parsed SoundFont.
///
/// SF2 preset header lists conventionally end with a non-playable terminator
/// record; when the parser exposes one (bank field absent on the last
/// record), it is dropped. The survivors are sorted ascending by
/// `(bank, preset)` with a stable sort, so records with equal keys keep
/// their file order.
///
/// # Errors
///
/// Returns `NoPresets` if nothing remains after terminator removal,
/// `IncompletePreset` if a surviving record is missing a field, and
/// `EmptyIdentifier` if the bank display name contains no identifier
/// characters.
pub fn extract(stem: &str, bank: &ParsedBank) -> Result<BankDescriptor, CatalogError> {
    let mut records = bank.presets.clone();

    if has_terminator(&records) {
        records.pop();
    }

    if records.is_empty() {
        return Err(CatalogError::NoPresets {
            stem: stem.to_string(),
        });
    }

    records.sort_by_key(|r| (r.bank, r.preset));

    let mut patches = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let incomplete = |field| CatalogError::IncompletePreset {
            stem: stem.to_string(),
            index,
            field,
        };
        patches.push(Patch {
            bank: record.bank.ok_or_else(|| incomplete("bank"))?,
            preset: record.preset.ok_or_else(|| incomplete("preset"))?,
            name: record.name.ok_or_else(|| incomplete("name"))?,
        });
    }

    let identifier = sanitize_identifier(&bank.display_name);
    if identifier.is_empty() {
        return Err(CatalogError::EmptyIdentifier {
            display_name: bank.display_name.clone(),
        });
    }

    Ok(BankDescriptor {
        source_stem: stem.to_string(),
        display_name: bank.display_name.clone(),
        identifier,
        patches,
    })
}
