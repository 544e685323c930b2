pub mod config_ops;
pub mod romanize_ops;
