use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("Client call failed: {0}")]
    Client(String),
}

impl TestError {
    /// Wrap an error from the client under test, which this crate cannot name.
    pub fn client(error: impl std::fmt::Display) -> Self {
        Self::Client(error.to_string())
    }
}
