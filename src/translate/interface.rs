use async_trait::async_trait;
use thiserror::Error;

/// Result of a single translation call
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Source language as resolved by the provider (the detected one for `auto`)
    pub src: String,
    pub dest: String,
}

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("invalid source language")]
    InvalidSourceLanguage,

    #[error("invalid destination language")]
    InvalidDestinationLanguage,

    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("translation service returned status {0}")]
    Status(u16),

    #[error("unexpected response from translation service: {0}")]
    UnexpectedResponse(String),
}

/// Translate interface trait, shared across requests for the life of the process
#[async_trait]
pub trait TranslateInterface: Send + Sync {
    /// Translate `text` from `src` (or `auto`) into `dest`
    async fn translate(
        &self,
        text: &str,
        src: &str,
        dest: &str,
    ) -> Result<Translation, TranslateError>;
}
