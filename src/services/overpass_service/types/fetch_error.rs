use reqwest::StatusCode;

#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// `status` is `None` when the endpoint was never reached or the body
    /// could not be read.
    Transport {
        status: Option<StatusCode>,
        message: String,
    },
    Parse(String),
    Cancelled,
}

impl FetchError {
    pub fn transport(status: Option<StatusCode>, message: impl Into<String>) -> Self {
        FetchError::Transport {
            status,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            FetchError::Transport {
                status: Some(status),
                message,
            } => write!(f, "Transport error ({}): {}", status, message),
            FetchError::Transport {
                status: None,
                message,
            } => write!(f, "Transport error: {}", message),
            FetchError::Parse(e) => write!(f, "Parse error: {}", e),
            FetchError::Cancelled => write!(f, "Fetch cancelled"),
        }
    }
}

impl std::error::Error for FetchError {}
