use serde::Serialize;

use crate::kana::{resolve_tables, SchemeTables};
use crate::scheme::{RomanizeOptions, Scheme};

use super::rules;

/// Step-by-step trace of one conversion.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainResult {
    pub input: String,
    pub scheme: Scheme,
    pub options: RomanizeOptions,
    pub steps: Vec<ExplainStep>,
    pub output: String,
}

/// The text as it stood after one rule ran.
#[derive(Debug, Clone, Serialize)]
pub struct ExplainStep {
    pub rule: &'static str,
    pub output: String,
}

pub fn explain(text: &str, scheme: Scheme, options: RomanizeOptions) -> ExplainResult {
    explain_with(resolve_tables(scheme), text, scheme, options)
}

pub fn explain_with(
    tables: &SchemeTables,
    text: &str,
    scheme: Scheme,
    options: RomanizeOptions,
) -> ExplainResult {
    let mut steps = Vec::new();
    let mut current = text.to_string();
    for rule in rules::pipeline(tables, scheme, options) {
        current = rule.apply(&current);
        steps.push(ExplainStep {
            rule: rule.name(),
            output: current.clone(),
        });
    }
    ExplainResult {
        input: text.to_string(),
        scheme,
        options,
        steps,
        output: current,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::romanize::romanize;

    #[test]
    fn explain_records_every_step() {
        let result = explain("まっちゃ", Scheme::Hepburn, RomanizeOptions::default());
        let rules: Vec<&str> = result.steps.iter().map(|s| s.rule).collect();
        assert_eq!(
            rules,
            vec!["digraphs", "monographs", "gemination", "long_vowels"]
        );
        assert_eq!(result.steps[0].output, "まっcha");
        assert_eq!(result.steps[1].output, "maっcha");
        assert_eq!(result.steps[2].output, "matcha");
        assert_eq!(result.output, "matcha");
    }

    #[test]
    fn explain_output_matches_romanize() {
        let opts = RomanizeOptions {
            uppercase: true,
            traditional: true,
        };
        for scheme in Scheme::ALL {
            let text = "しんぶんをとおくからよむ";
            assert_eq!(explain(text, scheme, opts).output, romanize(text, scheme, opts));
        }
    }

    #[test]
    fn explain_empty_input() {
        let result = explain("", Scheme::KunreiShiki, RomanizeOptions::default());
        assert_eq!(result.output, "");
        assert!(result.steps.iter().all(|s| s.output.is_empty()));
    }
}
