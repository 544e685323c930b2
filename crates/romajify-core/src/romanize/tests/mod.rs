
use super::romanize;
use crate::scheme::{RomanizeOptions, Scheme};

fn hepburn(text: &str) -> String {
    romanize(text, Scheme::Hepburn, RomanizeOptions::default())
}

fn traditional(text: &str) -> String {
    let opts = RomanizeOptions {
        traditional: true,
        ..Default::default()
    };
    romanize(text, Scheme::Hepburn, opts)
}

fn nihon(text: &str) -> String {
    romanize(text, Scheme::NihonShiki, RomanizeOptions::default())
}

fn kunrei(text: &str) -> String {
    romanize(text, Scheme::KunreiShiki, RomanizeOptions::default())
}
