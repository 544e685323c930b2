use std::collections::BTreeMap;

use serde::Deserialize;

use super::table::{KanaTable, KanaTables, SchemeTables};

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct KanaConfig {
    monographs: BTreeMap<String, String>,
    digraphs: BTreeMap<String, String>,
    #[serde(default)]
    nihon: OverrideConfig,
    #[serde(default)]
    kunrei: OverrideConfig,
}

#[derive(Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct OverrideConfig {
    #[serde(default)]
    monographs: BTreeMap<String, String>,
    #[serde(default)]
    digraphs: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum KanaConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[{0}] table is empty")]
    Empty(&'static str),
    #[error("[{table}] key {key:?} must be {expected} character(s)")]
    InvalidKey {
        table: String,
        key: String,
        expected: usize,
    },
    #[error("[{table}] non-ASCII value for key {key:?}")]
    NonAsciiValue { table: String, key: String },
    #[error("kana tables already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into the base tables and per-scheme overrides.
///
/// Monograph keys must be a single character and digraph keys exactly two.
/// Values must be ASCII; an empty value is allowed (ー romanizes to nothing).
pub fn parse_kana_toml(toml_str: &str) -> Result<KanaTables, KanaConfigError> {
    let config: KanaConfig =
        toml::from_str(toml_str).map_err(|e| KanaConfigError::Parse(e.to_string()))?;

    if config.monographs.is_empty() {
        return Err(KanaConfigError::Empty("monographs"));
    }
    if config.digraphs.is_empty() {
        return Err(KanaConfigError::Empty("digraphs"));
    }

    let base = section("", config.monographs, config.digraphs)?;
    let nihon = section("nihon.", config.nihon.monographs, config.nihon.digraphs)?;
    let kunrei = section("kunrei.", config.kunrei.monographs, config.kunrei.digraphs)?;

    Ok(KanaTables::new(base, nihon, kunrei))
}

fn section(
    prefix: &str,
    monographs: BTreeMap<String, String>,
    digraphs: BTreeMap<String, String>,
) -> Result<SchemeTables, KanaConfigError> {
    validate(&format!("{prefix}monographs"), &monographs, 1)?;
    validate(&format!("{prefix}digraphs"), &digraphs, 2)?;
    Ok(SchemeTables {
        digraphs: KanaTable::from(digraphs),
        monographs: KanaTable::from(monographs),
    })
}

fn validate(
    table: &str,
    entries: &BTreeMap<String, String>,
    key_chars: usize,
) -> Result<(), KanaConfigError> {
    for (key, value) in entries {
        if key.chars().count() != key_chars {
            return Err(KanaConfigError::InvalidKey {
                table: table.to_string(),
                key: key.clone(),
                expected: key_chars,
            });
        }
        if !value.is_ascii() {
            return Err(KanaConfigError::NonAsciiValue {
                table: table.to_string(),
                key: key.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kana::DEFAULT_TOML;
    use crate::scheme::Scheme;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[monographs]
"か" = "ka"
"し" = "shi"

[digraphs]
"しゃ" = "sha"

[nihon.monographs]
"し" = "si"
"#;
        let tables = parse_kana_toml(toml).unwrap();
        let base = tables.resolve(Scheme::Hepburn);
        assert_eq!(base.monographs.len(), 2);
        assert_eq!(base.digraphs.get("しゃ"), Some("sha"));
        let nihon = tables.resolve(Scheme::NihonShiki);
        assert_eq!(nihon.monographs.get("し"), Some("si"));
        assert_eq!(nihon.digraphs.get("しゃ"), Some("sha"));
    }

    #[test]
    fn parse_default_toml() {
        let tables = parse_kana_toml(DEFAULT_TOML).unwrap();
        let base = tables.resolve(Scheme::Hepburn);
        assert_eq!(base.monographs.len(), 166);
        assert_eq!(base.digraphs.len(), 72);
        assert!(tables.overrides(Scheme::Hepburn).is_none());
        let nihon = tables.overrides(Scheme::NihonShiki).unwrap();
        assert_eq!(nihon.monographs.len(), 20);
        assert_eq!(nihon.digraphs.len(), 24);
        let kunrei = tables.overrides(Scheme::KunreiShiki).unwrap();
        assert_eq!(kunrei.monographs.len(), 12);
        assert_eq!(kunrei.digraphs.len(), 24);
    }

    #[test]
    fn default_toml_has_no_small_tsu() {
        let tables = parse_kana_toml(DEFAULT_TOML).unwrap();
        for scheme in Scheme::ALL {
            let t = tables.resolve(scheme);
            assert_eq!(t.monographs.get("っ"), None);
            assert_eq!(t.monographs.get("ッ"), None);
        }
    }

    #[test]
    fn default_toml_keeps_symbol_entries() {
        let tables = parse_kana_toml(DEFAULT_TOML).unwrap();
        let base = tables.resolve(Scheme::Hepburn);
        assert_eq!(base.monographs.get("ー"), Some(""));
        assert_eq!(base.monographs.get("＿"), Some("_"));
    }

    #[test]
    fn error_empty_monographs() {
        let toml = "[monographs]\n[digraphs]\n\"きゃ\" = \"kya\"\n";
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::Empty("monographs")));
    }

    #[test]
    fn error_missing_digraphs() {
        let toml = "[monographs]\n\"か\" = \"ka\"\n";
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::Parse(_)));
    }

    #[test]
    fn error_two_char_monograph() {
        let toml = r#"
[monographs]
"きゃ" = "kya"

[digraphs]
"きゃ" = "kya"
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::InvalidKey { expected: 1, .. }));
        assert!(err.to_string().contains("[monographs]"));
    }

    #[test]
    fn error_single_char_override_digraph() {
        let toml = r#"
[monographs]
"し" = "shi"

[digraphs]
"しゃ" = "sha"

[kunrei.digraphs]
"し" = "si"
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::InvalidKey { expected: 2, .. }));
        assert!(err.to_string().contains("[kunrei.digraphs]"));
    }

    #[test]
    fn error_non_ascii_value() {
        let toml = r#"
[monographs]
"か" = "か"

[digraphs]
"きゃ" = "kya"
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::NonAsciiValue { .. }));
    }

    #[test]
    fn error_unknown_section() {
        let toml = r#"
[monographs]
"か" = "ka"

[digraphs]
"きゃ" = "kya"

[wapuro.monographs]
"を" = "wo"
"#;
        let err = parse_kana_toml(toml).unwrap_err();
        assert!(matches!(err, KanaConfigError::Parse(_)));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_kana_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, KanaConfigError::Parse(_)));
    }
}
