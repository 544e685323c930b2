//! Ordered string-rewriting rules that make up a romanization pass.
//!
//! Each rule takes the previous rule's output and returns a new string.
//! The order built by [`pipeline`] is fixed: digraphs, monographs,
//! gemination, nasal assimilation (traditional Hepburn only), long vowels,
//! then case folding.

use tracing::trace;

use crate::kana::{KanaTable, SchemeTables};
use crate::scheme::{RomanizeOptions, Scheme};
use crate::unicode::is_sokuon;

/// One step of the romanization pipeline.
pub(crate) trait Rule {
    fn name(&self) -> &'static str;
    fn apply(&self, text: &str) -> String;
}

/// Build the rule sequence for `scheme` and `options`.
pub(crate) fn pipeline<'a>(
    tables: &'a SchemeTables,
    scheme: Scheme,
    options: RomanizeOptions,
) -> Vec<Box<dyn Rule + 'a>> {
    let mut rules: Vec<Box<dyn Rule + 'a>> = Vec::with_capacity(6);
    // Digraphs must run first: their kana would otherwise be split by the
    // monograph table (きゃ → kiya).
    rules.push(Box::new(TableSubstitution {
        name: "digraphs",
        table: &tables.digraphs,
    }));
    rules.push(Box::new(TableSubstitution {
        name: "monographs",
        table: &tables.monographs,
    }));
    rules.push(Box::new(Gemination {
        tch: scheme == Scheme::Hepburn,
    }));
    if options.assimilates_nasal(scheme) {
        rules.push(Box::new(NasalAssimilation));
    }
    rules.push(Box::new(LongVowels { scheme }));
    if options.uppercase {
        rules.push(Box::new(Uppercase));
    }
    rules
}

/// Run all rules in sequence.
pub(crate) fn run_rules(rules: &[Box<dyn Rule + '_>], text: &str) -> String {
    let mut current = text.to_string();
    for rule in rules {
        current = rule.apply(&current);
        trace!(rule = rule.name(), len = current.len(), "applied rule");
    }
    current
}

/// Replace every occurrence of every table key with its romaji.
struct TableSubstitution<'a> {
    name: &'static str,
    table: &'a KanaTable,
}

impl Rule for TableSubstitution<'_> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (kana, romaji) in self.table.iter() {
            if out.contains(kana) {
                out = out.replace(kana, romaji);
            }
        }
        out
    }
}

/// Small tsu doubles the character after it (がっこう → gakkou).
///
/// With `tch`, small tsu before `c` becomes `tc` first (まっちゃ → matcha);
/// the doubling pass then no longer sees those characters.
struct Gemination {
    tch: bool,
}

impl Rule for Gemination {
    fn name(&self) -> &'static str {
        "gemination"
    }

    fn apply(&self, text: &str) -> String {
        if !text.chars().any(is_sokuon) {
            return text.to_string();
        }
        if self.tch {
            double_after_sokuon(&sokuon_before_c(text))
        } else {
            double_after_sokuon(text)
        }
    }
}

fn sokuon_before_c(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_sokuon(c) && chars.peek() == Some(&'c') {
            chars.next();
            out.push_str("tc");
        } else {
            out.push(c);
        }
    }
    out
}

fn double_after_sokuon(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if is_sokuon(c) {
            // A trailing small tsu, or one at the end of a line, is kept.
            if let Some(&next) = chars.peek().filter(|&&n| n != '\n') {
                chars.next();
                out.push(next);
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// Traditional Hepburn: `n` before `b`, `m` or `p` is written `m`.
struct NasalAssimilation;

impl Rule for NasalAssimilation {
    fn name(&self) -> &'static str {
        "nasal_assimilation"
    }

    fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            if c == 'n' {
                if let Some(&next @ ('b' | 'm' | 'p')) = chars.peek() {
                    chars.next();
                    out.push('m');
                    out.push(next);
                    continue;
                }
            }
            out.push(c);
        }
        out
    }
}

/// Contract long vowels written out by the tables.
struct LongVowels {
    scheme: Scheme,
}

impl Rule for LongVowels {
    fn name(&self) -> &'static str {
        "long_vowels"
    }

    fn apply(&self, text: &str) -> String {
        match self.scheme {
            Scheme::Hepburn => {
                let text = shorten_leading_oo(text);
                text.replace("ou", "o").replace("uu", "u")
            }
            Scheme::NihonShiki | Scheme::KunreiShiki => {
                replace_any(text, &["ou", "oo"], "o").replace("uu", "u")
            }
        }
    }
}

/// On each line, drop one `o` from the leftmost `oo` if anything follows it
/// on that line. A line ending in `oo` keeps it (とお → too).
fn shorten_leading_oo(text: &str) -> String {
    text.split_inclusive('\n')
        .map(|line| {
            let body = line.strip_suffix('\n').unwrap_or(line);
            match body.find("oo") {
                Some(i) if i + 2 < body.len() => format!("{}{}", &line[..i], &line[i + 1..]),
                _ => line.to_string(),
            }
        })
        .collect()
}

/// Leftmost, non-overlapping replacement of any of `patterns` (tried in
/// order at each position) with `with`.
fn replace_any(text: &str, patterns: &[&str], with: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    'scan: while !rest.is_empty() {
        for pattern in patterns {
            if let Some(tail) = rest.strip_prefix(pattern) {
                out.push_str(with);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            out.push(c);
        }
        rest = chars.as_str();
    }
    out
}

/// Simple (one-to-one) uppercase mapping. Characters with no single
/// character uppercase form are left as they are.
struct Uppercase;

impl Rule for Uppercase {
    fn name(&self) -> &'static str {
        "uppercase"
    }

    fn apply(&self, text: &str) -> String {
        text.chars().map(simple_uppercase).collect()
    }
}

pub(crate) fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => expanding_simple_upper(c).unwrap_or(c),
    }
}

/// Simple uppercase of characters whose full uppercase expands to several
/// characters. Only the Greek letters with ypogegrammeni have one: the
/// lowercase forms map to the matching prosgegrammeni capitals, and the
/// capitals themselves have none.
fn expanding_simple_upper(c: char) -> Option<char> {
    let offset = match c {
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => 8,
        '\u{1FB3}' | '\u{1FC3}' | '\u{1FF3}' => 9,
        _ => return None,
    };
    char::from_u32(c as u32 + offset)
}
