//! Global settings loaded from TOML, following the same OnceLock pattern as
//! the kana tables.
//!
//! - `init_custom(toml_content)` sets a custom TOML before first `settings()` call
//! - `settings()` returns `&'static Settings` (lazy-init singleton)
//! - Default values are embedded via `include_str!("default_settings.toml")`

use std::sync::OnceLock;

use serde::Deserialize;

use crate::scheme::{RomanizeOptions, Scheme};

pub const DEFAULT_SETTINGS_TOML: &str = include_str!("default_settings.toml");

static INSTANCE: OnceLock<Settings> = OnceLock::new();

/// Install settings parsed from `toml_content`. Fails with
/// `AlreadyInitialized` once `settings()` has run.
pub fn init_custom(toml_content: String) -> Result<(), SettingsError> {
    let parsed = parse_settings_toml(&toml_content)?;
    INSTANCE
        .set(parsed)
        .map_err(|_| SettingsError::AlreadyInitialized)
}

/// Get or initialize the global settings singleton.
pub fn settings() -> &'static Settings {
    INSTANCE.get_or_init(|| {
        parse_settings_toml(DEFAULT_SETTINGS_TOML).expect("settings TOML must be valid")
    })
}

/// Returns the embedded default settings TOML content.
pub fn default_toml() -> &'static str {
    DEFAULT_SETTINGS_TOML
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("settings already initialized")]
    AlreadyInitialized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub hepburn: HepburnSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSettings {
    #[serde(default)]
    pub uppercase: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HepburnSettings {
    #[serde(default)]
    pub traditional: bool,
}

impl Settings {
    /// Combine command-line flags with the configured defaults. A flag can
    /// enable an option but not disable one set here.
    pub fn options_for(
        &self,
        scheme: Scheme,
        uppercase: bool,
        traditional: bool,
    ) -> RomanizeOptions {
        RomanizeOptions {
            uppercase: uppercase || self.output.uppercase,
            traditional: scheme == Scheme::Hepburn && (traditional || self.hepburn.traditional),
        }
    }
}

pub fn parse_settings_toml(toml_str: &str) -> Result<Settings, SettingsError> {
    toml::from_str(toml_str).map_err(|e| SettingsError::Parse(e.to_string()))
}
