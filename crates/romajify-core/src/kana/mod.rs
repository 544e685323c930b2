//! Kana-to-romaji character tables.
//!
//! The tables are described by an embedded TOML document: a Hepburn base
//! (monographs and digraphs) plus per-scheme override sections. Each
//! scheme's effective tables are built once by overlaying its overrides on
//! a copy of the base.

mod config;
mod table;

pub use config::{parse_kana_toml, KanaConfigError};
pub use table::{resolve_tables, KanaTable, KanaTables, SchemeTables};

pub(crate) const DEFAULT_TOML: &str = include_str!("default_kana.toml");

/// Returns the embedded default kana table TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_TOML
}
