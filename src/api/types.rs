#[derive(Debug, thiserror::Error)]
pub enum RomajifyError {
    #[error("IO error: {msg}")]
    Io { msg: String },
    #[error("invalid data: {msg}")]
    InvalidData { msg: String },
}
