pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error reading or writing file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed json document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not locate the user data directory")]
    DataDir,
}
