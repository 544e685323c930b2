//! Kana-to-romaji substitution engine.
//!
//! Looks kana up in the scheme's digraph table, then its monograph table,
//! and finishes with the scheme's orthographic rules: gemination (っ),
//! syllabic-n assimilation (ん) and long-vowel contraction.

mod explain;
mod rules;

#[cfg(test)]
mod tests;

use std::fmt;

use serde::Serialize;
use tracing::{debug_span, enabled, trace, Level};

use crate::kana::{resolve_tables, SchemeTables};
use crate::scheme::{RomanizeOptions, Scheme};
use crate::unicode::contains_kana;

pub use explain::{explain, explain_with, ExplainResult, ExplainStep};

/// Romanize `text` with the global tables for `scheme`.
pub fn romanize(text: &str, scheme: Scheme, options: RomanizeOptions) -> String {
    romanize_with(resolve_tables(scheme), text, scheme, options)
}

/// Romanize `text` with caller-supplied tables.
pub fn romanize_with(
    tables: &SchemeTables,
    text: &str,
    scheme: Scheme,
    options: RomanizeOptions,
) -> String {
    let _span = debug_span!("romanize", %scheme, len = text.len()).entered();
    if enabled!(Level::TRACE) && !contains_kana(text) {
        trace!("input has no kana");
    }
    let rules = rules::pipeline(tables, scheme, options);
    rules::run_rules(&rules, text)
}

/// A single conversion: input text, scheme and options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomanizeRequest {
    pub text: String,
    pub scheme: Scheme,
    pub options: RomanizeOptions,
}

impl RomanizeRequest {
    pub fn new(text: impl Into<String>, scheme: Scheme) -> Self {
        Self {
            text: text.into(),
            scheme,
            options: RomanizeOptions::default(),
        }
    }

    pub fn uppercase(mut self, uppercase: bool) -> Self {
        self.options.uppercase = uppercase;
        self
    }

    pub fn traditional(mut self, traditional: bool) -> Self {
        self.options.traditional = traditional;
        self
    }

    pub fn run(&self) -> RomanizeResult {
        RomanizeResult {
            text: romanize(&self.text, self.scheme, self.options),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RomanizeResult {
    pub text: String,
}

impl fmt::Display for RomanizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
