//! Error types for the dispatch pipeline

pub type Result<T> = std::result::Result<T, DispatchError>;

#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Policy carried a sink mode code outside the defined set
    #[error("Unknown sink mode code: {code}")]
    UnknownMode { code: i32 },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// Line writer error (generic)
    #[error("Writer error: {0}")]
    WriterError(String),

    /// Sink could not hand the rendered entry to its backing store
    #[error("Delivery failed for {sink} sink: {message}")]
    DeliveryError { sink: String, message: String },

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl DispatchError {
    /// Create an unknown-mode error
    pub fn unknown_mode(code: i32) -> Self {
        DispatchError::UnknownMode { code }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        DispatchError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    /// Create a writer error (generic)
    pub fn writer<S: Into<String>>(msg: S) -> Self {
        DispatchError::WriterError(msg.into())
    }

    /// Create a delivery error for a named sink
    pub fn delivery(sink: impl Into<String>, message: impl Into<String>) -> Self {
        DispatchError::DeliveryError {
            sink: sink.into(),
            message: message.into(),
        }
    }

    /// Create a generic error
    pub fn other<S: Into<String>>(msg: S) -> Self {
        DispatchError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = DispatchError::unknown_mode(99);
        assert!(matches!(err, DispatchError::UnknownMode { code: 99 }));

        let err = DispatchError::config("LoggingPolicy", "mode missing");
        assert!(matches!(err, DispatchError::InvalidConfiguration { .. }));

        let err = DispatchError::delivery("file", "disk full");
        assert!(matches!(err, DispatchError::DeliveryError { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = DispatchError::unknown_mode(99);
        assert_eq!(err.to_string(), "Unknown sink mode code: 99");

        let err = DispatchError::delivery("queue", "producer closed");
        assert_eq!(
            err.to_string(),
            "Delivery failed for queue sink: producer closed"
        );

        let err = DispatchError::config("Dispatcher", "no default writer");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Dispatcher: no default writer"
        );
    }
}
