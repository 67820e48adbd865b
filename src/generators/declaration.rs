//! Per-bank Swift declaration emitter

use crate::model::BankDescriptor;

/// Static boilerplate emitted at the top of every declaration file
const HEADER: &str = "//\n// Generated by sf2-catalog. Do not edit; regenerate instead.\n//\n\n";

/// Column width the quoted patch name is left-justified into. Cosmetic
/// alignment only; longer names simply misalign.
const NAME_COLUMN_WIDTH: usize = 30;

/// Render the Swift declaration file for one bank.
///
/// The artifact binds a module-level `<identifier>SoundFont` constant
/// carrying the display name, the source file name, and one `Patch` entry
/// per preset in sorted order.
pub fn render_declaration(bank: &BankDescriptor) -> String {
    let mut out = String::from(HEADER);

    out.push_str(&format!(
        "let {}SoundFont = SoundFont(\"{}\", fileName: \"{}\", [\n",
        bank.identifier, bank.display_name, bank.source_stem
    ));

    for patch in &bank.patches {
        let quoted = format!("\"{}\",", patch.name);
        out.push_str(&format!(
            "    Patch({:<width$} {:>3}, {:>3}),\n",
            quoted,
            patch.bank,
            patch.preset,
            width = NAME_COLUMN_WIDTH
        ));
    }

    out.push_str("])\n");
    out
}
