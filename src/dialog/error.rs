use thiserror::Error;

/// Failures that abort an invocation instead of producing a response.
///
/// Bad user input never lands here; it is answered with a re-prompt.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DialogError {
    #[error("Intent with name {0} not supported")]
    UnsupportedIntent(String),
}
