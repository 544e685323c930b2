//! File-based configuration entry points shared by the CLI and embedders.

mod types;

pub use types::RomajifyError;

use std::fs;
use std::path::Path;

use romajify_core::kana::{self, parse_kana_toml, KanaTables};
use romajify_core::scheme::Scheme;
use romajify_core::settings::{self, Settings};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

fn read_config(path: &Path) -> Result<String, RomajifyError> {
    fs::read_to_string(path).map_err(|e| RomajifyError::Io {
        msg: format!("{}: {e}", path.display()),
    })
}

/// Replace the embedded kana tables with the TOML file at `path`. Must run
/// before the first conversion.
pub fn load_tables_config(path: &Path) -> Result<(), RomajifyError> {
    let content = read_config(path)?;
    KanaTables::init_custom(content)
        .map_err(|e| RomajifyError::InvalidData { msg: e.to_string() })
}

/// Replace the embedded settings with the TOML file at `path`. Must run
/// before the first `settings()` call.
pub fn load_settings_config(path: &Path) -> Result<(), RomajifyError> {
    let content = read_config(path)?;
    settings::init_custom(content)
        .map_err(|e| RomajifyError::InvalidData { msg: e.to_string() })
}

/// Check a kana table file without installing it. Returns the base table
/// sizes `(monographs, digraphs)`.
pub fn validate_tables_config(path: &Path) -> Result<(usize, usize), RomajifyError> {
    let content = read_config(path)?;
    let tables = parse_kana_toml(&content)
        .map_err(|e| RomajifyError::InvalidData { msg: e.to_string() })?;
    let base = tables.resolve(Scheme::Hepburn);
    Ok((base.monographs.len(), base.digraphs.len()))
}

/// Check a settings file without installing it.
pub fn validate_settings_config(path: &Path) -> Result<Settings, RomajifyError> {
    let content = read_config(path)?;
    settings::parse_settings_toml(&content)
        .map_err(|e| RomajifyError::InvalidData { msg: e.to_string() })
}

pub fn default_tables_config() -> &'static str {
    kana::default_toml()
}

pub fn default_settings_config() -> &'static str {
    settings::default_toml()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn validate_default_tables() {
        let file = write_temp(default_tables_config());
        assert_eq!(validate_tables_config(file.path()).unwrap(), (166, 72));
    }

    #[test]
    fn validate_tables_reports_invalid_data() {
        let file = write_temp("[monographs]\n\"きゃ\" = \"kya\"\n[digraphs]\n\"きゃ\" = \"kya\"\n");
        let err = validate_tables_config(file.path()).unwrap_err();
        assert!(matches!(err, RomajifyError::InvalidData { .. }));
    }

    #[test]
    fn validate_settings_roundtrip() {
        let file = write_temp("[output]\nuppercase = true\n");
        let s = validate_settings_config(file.path()).unwrap();
        assert!(s.output.uppercase);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        let err = load_tables_config(&path).unwrap_err();
        assert!(matches!(err, RomajifyError::Io { .. }));
        assert!(err.to_string().contains("missing.toml"));
        let err = load_settings_config(&path).unwrap_err();
        assert!(matches!(err, RomajifyError::Io { .. }));
    }

    #[test]
    fn load_invalid_settings_is_invalid_data() {
        let file = write_temp("[output]\nuppercase = 1\n");
        let err = load_settings_config(file.path()).unwrap_err();
        assert!(matches!(err, RomajifyError::InvalidData { .. }));
    }

    #[test]
    fn version_is_crate_version() {
        assert_eq!(version(), "0.1.0");
    }
}
