//! SoundFont catalog generator library
//!
//! Reads `.sf2` bank files, extracts preset metadata, and produces the Swift
//! catalog sources: one declaration file per bank plus the registration
//! table woven into the sentinel-delimited region of the aggregate
//! `SoundFont.swift` file.
//!
//! All outputs are staged in memory first; nothing is written until every
//! input has parsed and validated, and the aggregate file is written last.

pub mod error;
pub mod extract;
pub mod generators;
pub mod model;
pub mod sf2;

pub use error::CatalogError;
pub use model::{BankDescriptor, ParsedBank, Patch, PresetRecord};

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// One staged output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Fully staged catalog, ready to commit
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Per-bank declaration files, in input order
    pub declarations: Vec<OutputFile>,
    /// The aggregate file with the registry region replaced
    pub registry: OutputFile,
}

/// List the `.sf2` files in `dir`, sorted by file name.
///
/// Sorting gives a deterministic processing order (and therefore a
/// deterministic registry), which `read_dir` alone does not guarantee.
pub fn discover_banks(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let mut inputs = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let is_sf2 = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("sf2"));
        if is_sf2 {
            inputs.push(path);
        }
    }
    inputs.sort();
    Ok(inputs)
}

/// Parse and extract every input, then stage all outputs in memory.
///
/// Declaration files are staged under `out_dir`; the registry is the full
/// contents of `target` with the sentinel region replaced. Identifiers must
/// be unique across inputs. No file is written here.
pub fn build(inputs: &[PathBuf], out_dir: &Path, target: &Path) -> Result<Catalog, CatalogError> {
    let mut banks = Vec::with_capacity(inputs.len());
    for path in inputs {
        let stem = sf2::source_stem(path)?;
        let parsed = sf2::load_bank(path)?;
        let descriptor = extract::extract(&stem, &parsed)?;
        tracing::debug!(
            "{}: '{}' -> {} ({} patches)",
            path.display(),
            descriptor.display_name,
            descriptor.identifier,
            descriptor.patches.len()
        );
        banks.push(descriptor);
    }
    stage(&banks, out_dir, target)
}

/// Stage outputs for already-extracted banks. Split out from [`build`] so
/// the staging and commit behavior is testable without real `.sf2` inputs.
pub fn stage(
    banks: &[BankDescriptor],
    out_dir: &Path,
    target: &Path,
) -> Result<Catalog, CatalogError> {
    let mut seen = HashSet::new();
    for bank in banks {
        if !seen.insert(bank.identifier.as_str()) {
            return Err(CatalogError::DuplicateIdentifier {
                identifier: bank.identifier.clone(),
            });
        }
    }

    let declarations = banks
        .iter()
        .map(|bank| OutputFile {
            path: out_dir.join(format!("{}.swift", bank.source_stem)),
            contents: generators::declaration::render_declaration(bank),
        })
        .collect();

    let identifiers: Vec<String> = banks.iter().map(|b| b.identifier.clone()).collect();
    let existing = std::fs::read_to_string(target)?;
    let registry = OutputFile {
        path: target.to_path_buf(),
        contents: generators::registry::splice(&existing, &identifiers)?,
    };

    Ok(Catalog {
        declarations,
        registry,
    })
}

/// Write all staged files. Declarations first, the aggregate file last, so
/// a failure part-way through never leaves the registry referencing
/// declarations that were not written.
pub fn commit(catalog: &Catalog) -> Result<(), CatalogError> {
    for declaration in &catalog.declarations {
        std::fs::write(&declaration.path, &declaration.contents)?;
        tracing::info!("wrote {}", declaration.path.display());
    }
    std::fs::write(&catalog.registry.path, &catalog.registry.contents)?;
    tracing::info!("wove registry into {}", catalog.registry.path.display());
    Ok(())
}

/// Generate the catalog for every `.sf2` file in `dir`.
pub fn generate(dir: &Path, out_dir: &Path, target: &Path) -> Result<(), CatalogError> {
    let inputs = discover_banks(dir)?;
    tracing::info!("found {} SoundFont file(s) in {}", inputs.len(), dir.display());
    let catalog = build(&inputs, out_dir, target)?;
    commit(&catalog)
}

/// Check whether the on-disk catalog matches a fresh generation.
///
/// Returns `Ok(true)` when every declaration file and the aggregate
/// registry are byte-identical to what [`generate`] would produce. A
/// missing artifact counts as out of sync.
pub fn check(dir: &Path, out_dir: &Path, target: &Path) -> Result<bool, CatalogError> {
    let inputs = discover_banks(dir)?;
    let catalog = build(&inputs, out_dir, target)?;
    catalog_in_sync(&catalog)
}

/// Compare a staged catalog against the files on disk.
pub fn catalog_in_sync(catalog: &Catalog) -> Result<bool, CatalogError> {
    let mut in_sync = true;
    for staged in catalog
        .declarations
        .iter()
        .chain(std::iter::once(&catalog.registry))
    {
        match std::fs::read_to_string(&staged.path) {
            Ok(existing) if existing == staged.contents => {
                tracing::info!("in sync: {}", staged.path.display());
            }
            Ok(_) => {
                tracing::warn!("out of sync: {}", staged.path.display());
                in_sync = false;
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!("missing: {}", staged.path.display());
                in_sync = false;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(in_sync)
}
