use thiserror::Error;

/// Rejections raised while validating a run configuration, before any
/// request is dispatched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Address must not be empty.")]
    AddressEmpty,
    #[error("Invalid address '{value}': {source}")]
    InvalidAddress {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Unsupported scheme '{scheme}'. Use http or https.")]
    UnsupportedScheme { scheme: String },
    #[error("Address '{value}' is missing a host.")]
    MissingHost { value: String },
}
