//! Kana to romaji conversion in Hepburn, Nihon-shiki and Kunrei-shiki.
//!
//! Thin facade over `romajify-core`: re-exports the conversion API and adds
//! file-based configuration loading and tracing setup.

pub mod api;
pub mod trace_init;

pub use api::{
    default_settings_config, default_tables_config, load_settings_config, load_tables_config,
    validate_settings_config, validate_tables_config, version, RomajifyError,
};
pub use romajify_core::kana::{resolve_tables, KanaTable, KanaTables, SchemeTables};
pub use romajify_core::romanize::{
    explain, romanize, romanize_with, ExplainResult, ExplainStep, RomanizeRequest, RomanizeResult,
};
pub use romajify_core::scheme::{RomanizeOptions, Scheme};
pub use romajify_core::settings::{settings, Settings};
pub use romajify_core::unicode;
