use std::fmt;

use serde::Serialize;

/// Romanization system. Selects the override tables merged into the base
/// tables and the post-processing rules that run after lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Scheme {
    #[serde(rename = "hepburn")]
    Hepburn = 0,
    #[serde(rename = "nihon")]
    NihonShiki = 1,
    #[serde(rename = "kunrei")]
    KunreiShiki = 2,
}

impl Scheme {
    pub const ALL: [Scheme; 3] = [Scheme::Hepburn, Scheme::NihonShiki, Scheme::KunreiShiki];

    pub fn name(self) -> &'static str {
        match self {
            Scheme::Hepburn => "hepburn",
            Scheme::NihonShiki => "nihon",
            Scheme::KunreiShiki => "kunrei",
        }
    }

    /// Position in [`Scheme::ALL`].
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RomanizeOptions {
    /// Uppercase the whole result.
    pub uppercase: bool,
    /// Traditional Hepburn: ん before b/m/p is written `m`. Ignored by the
    /// other schemes.
    pub traditional: bool,
}

impl RomanizeOptions {
    /// Whether nasal assimilation applies under `scheme`.
    pub fn assimilates_nasal(&self, scheme: Scheme) -> bool {
        self.traditional && scheme == Scheme::Hepburn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_all_order() {
        for (i, scheme) in Scheme::ALL.iter().enumerate() {
            assert_eq!(scheme.index(), i);
        }
    }

    #[test]
    fn display_uses_command_names() {
        assert_eq!(Scheme::Hepburn.to_string(), "hepburn");
        assert_eq!(Scheme::NihonShiki.to_string(), "nihon");
        assert_eq!(Scheme::KunreiShiki.to_string(), "kunrei");
    }

    #[test]
    fn traditional_only_for_hepburn() {
        let opts = RomanizeOptions {
            traditional: true,
            ..Default::default()
        };
        assert!(opts.assimilates_nasal(Scheme::Hepburn));
        assert!(!opts.assimilates_nasal(Scheme::NihonShiki));
        assert!(!opts.assimilates_nasal(Scheme::KunreiShiki));
        assert!(!RomanizeOptions::default().assimilates_nasal(Scheme::Hepburn));
    }
}
