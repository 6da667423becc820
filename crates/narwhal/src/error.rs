#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("vertex not found")]
    UnknownVertex,

    #[error("another vertex already uses the requested value")]
    VertexExists,

    #[error("Invalid graph options: {message}")]
    InvalidOptions { message: String },
}

pub type Result<T> = std::result::Result<T, Error>;
