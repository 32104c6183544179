use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Request carries no host")]
    MissingHost,

    #[error("Resolver transport error: {0}")]
    ResolverTransport(String),

    #[error("Malformed resolver answer: {0}")]
    MalformedAnswer(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}
