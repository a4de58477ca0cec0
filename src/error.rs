use thiserror::Error;

/// Errors that can occur while loading recipe input.
///
/// Rendering itself is infallible; only JSON ingestion and file I/O
/// can fail.
#[derive(Error, Debug)]
pub enum CookbookError {
    /// Recipe input was not a valid JSON array of recipes
    #[error("Failed to parse recipe JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to read recipe input
    #[error("Failed to read recipe input: {0}")]
    Io(#[from] std::io::Error),
}
