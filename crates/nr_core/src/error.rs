use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied input was missing or invalid; nothing was changed.
    #[error("{0}")]
    Validation(String),

    /// A server-side setting (such as the model API key) is absent.
    #[error("Server configuration error: {0}")]
    Configuration(String),

    /// The generative model call failed or replied with an unexpected shape.
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The messaging API rejected the message or could not be reached.
    #[error("Failed to publish: {0}")]
    Publish(String),

    #[error("Automation is already running")]
    AlreadyRunning,

    #[error("Automation is not running")]
    NotRunning,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    /// True for failures that come from the caller misusing the API rather
    /// than from the service or its collaborators.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::AlreadyRunning | Error::NotRunning
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_errors_read_like_user_messages() {
        assert_eq!(Error::NotRunning.to_string(), "Automation is not running");
        assert_eq!(Error::AlreadyRunning.to_string(), "Automation is already running");
        assert_eq!(
            Error::Configuration("Missing Gemini API Key".to_string()).to_string(),
            "Server configuration error: Missing Gemini API Key"
        );
    }

    #[test]
    fn test_client_error_classification() {
        assert!(Error::Validation("missing".to_string()).is_client_error());
        assert!(Error::NotRunning.is_client_error());
        assert!(Error::AlreadyRunning.is_client_error());
        assert!(!Error::Upstream("boom".to_string()).is_client_error());
        assert!(!Error::Publish("boom".to_string()).is_client_error());
        assert!(!Error::Configuration("key".to_string()).is_client_error());
    }
}
