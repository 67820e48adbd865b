//! Source-code generators for the Swift catalog artifacts

pub mod declaration;
pub mod registry;
