use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // Field errors
    #[error("Invalid timestamp: {message}")]
    InvalidTimestamp { message: String },

    #[error("Invalid building: {0}")]
    InvalidBuilding(String),

    #[error("Invalid room: {0}")]
    InvalidRoom(String),

    #[error("Invalid key id: {id:#X} exceeds 0xFFFFFFFF")]
    InvalidId { id: u64 },

    // Buffer errors
    #[error("Invalid key length: expected {expected} octets, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Octet {index} out of range 0-255: {value}")]
    OctetOutOfRange { index: usize, value: String },

    #[error("Invalid readable format: {0}")]
    InvalidReadableFormat(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
