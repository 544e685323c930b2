use std::collections::BTreeMap;
use std::sync::OnceLock;

use tracing::debug;

use super::config::{parse_kana_toml, KanaConfigError};
use super::DEFAULT_TOML;
use crate::scheme::Scheme;

static INSTANCE: OnceLock<KanaTables> = OnceLock::new();

/// Immutable kana → romaji mapping. Keys are one (monograph) or two
/// (digraph) code points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KanaTable {
    entries: BTreeMap<String, String>,
}

impl KanaTable {
    pub fn get(&self, kana: &str) -> Option<&str> {
        self.entries.get(kana).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// A new table holding `self` with every entry of `overrides` written on
    /// top. `self` is left untouched.
    pub fn overlay(&self, overrides: &KanaTable) -> KanaTable {
        let mut entries = self.entries.clone();
        entries.extend(
            overrides
                .entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        KanaTable { entries }
    }
}

impl From<BTreeMap<String, String>> for KanaTable {
    fn from(entries: BTreeMap<String, String>) -> Self {
        KanaTable { entries }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KanaTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        KanaTable {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The digraph and monograph tables used for one scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemeTables {
    pub digraphs: KanaTable,
    pub monographs: KanaTable,
}

/// The parsed table set: Hepburn base plus the Nihon-shiki and Kunrei-shiki
/// overrides.
#[derive(Debug, Clone)]
pub struct KanaTables {
    base: SchemeTables,
    nihon: SchemeTables,
    kunrei: SchemeTables,
}

impl KanaTables {
    pub(crate) fn new(base: SchemeTables, nihon: SchemeTables, kunrei: SchemeTables) -> Self {
        Self {
            base,
            nihon,
            kunrei,
        }
    }

    /// Install tables parsed from `toml_content` as the global set. Fails
    /// with `AlreadyInitialized` once `global()` has run.
    pub fn init_custom(toml_content: String) -> Result<(), KanaConfigError> {
        let tables = parse_kana_toml(&toml_content)?;
        install(&INSTANCE, tables)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static KanaTables {
        INSTANCE.get_or_init(|| parse_kana_toml(DEFAULT_TOML).expect("kana TOML must be valid"))
    }

    /// Override entries for `scheme`. Hepburn uses the base as-is.
    pub fn overrides(&self, scheme: Scheme) -> Option<&SchemeTables> {
        match scheme {
            Scheme::Hepburn => None,
            Scheme::NihonShiki => Some(&self.nihon),
            Scheme::KunreiShiki => Some(&self.kunrei),
        }
    }

    /// Build the effective tables for `scheme` as fresh values.
    pub fn resolve(&self, scheme: Scheme) -> SchemeTables {
        let tables = match self.overrides(scheme) {
            None => self.base.clone(),
            Some(overrides) => SchemeTables {
                digraphs: self.base.digraphs.overlay(&overrides.digraphs),
                monographs: self.base.monographs.overlay(&overrides.monographs),
            },
        };
        debug!(
            %scheme,
            digraphs = tables.digraphs.len(),
            monographs = tables.monographs.len(),
            "resolved kana tables"
        );
        tables
    }
}

/// Fill `cell` with `tables`. A single `set` keeps this atomic with respect
/// to a concurrent `get_or_init`.
fn install(cell: &OnceLock<KanaTables>, tables: KanaTables) -> Result<(), KanaConfigError> {
    cell.set(tables).map_err(|_| KanaConfigError::AlreadyInitialized)
}

/// Effective tables for `scheme`, built once from the global table set and
/// shared read-only afterwards.
pub fn resolve_tables(scheme: Scheme) -> &'static SchemeTables {
    static RESOLVED: OnceLock<[SchemeTables; 3]> = OnceLock::new();
    let all = RESOLVED.get_or_init(|| {
        let tables = KanaTables::global();
        Scheme::ALL.map(|s| tables.resolve(s))
    });
    &all[scheme.index()]
}
