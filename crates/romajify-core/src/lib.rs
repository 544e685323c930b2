pub mod kana;
pub mod romanize;
pub mod scheme;
pub mod settings;
pub mod unicode;
