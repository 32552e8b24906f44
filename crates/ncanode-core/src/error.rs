use thiserror::Error;

/// Result type alias for NCANode operations
pub type Result<T> = std::result::Result<T, NcaNodeError>;

/// Errors that can occur when talking to NCANode or reading its responses
#[derive(Error, Debug)]
pub enum NcaNodeError {
    /// A certificate timestamp field is missing or cannot be parsed
    #[error("malformed date in field `{field}`: {value}")]
    MalformedDate {
        /// Name of the raw field (`notBefore` or `notAfter`)
        field: &'static str,
        /// The offending raw value, or `<missing>`
        value: String,
    },

    /// Requested field is not present in the certificate data
    #[error("unknown certificate field: {0}")]
    UnknownField(String),

    /// Certificates are read-only snapshots of the server response
    #[error("unsupported operation: cannot modify certificate field `{0}`")]
    UnsupportedOperation(String),

    /// Response lacks a field the accessor needs
    #[error("missing field in response: {0}")]
    MissingField(String),

    /// NCANode answered with a non-zero status
    #[error("API error ({status}): {message}")]
    Api {
        /// Status code reported by NCANode (or the HTTP status)
        status: i64,
        /// Error message from the API
        message: String,
    },

    /// Response body is not a JSON object
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// Request timed out
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Connection failed
    #[error("connection failed: {0}")]
    Connection(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl NcaNodeError {
    /// Returns true if the error comes from reading response data rather
    /// than from the transport
    #[must_use]
    pub const fn is_model_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedDate { .. }
                | Self::UnknownField(_)
                | Self::UnsupportedOperation(_)
                | Self::MissingField(_)
        )
    }

    /// Returns the status reported by the server if this is an API error
    #[must_use]
    pub const fn api_status(&self) -> Option<i64> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
