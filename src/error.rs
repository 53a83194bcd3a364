//! Recoverable error type for the remote E-utilities calls

/// Error from a search or fetch request.
///
/// Both stages treat this as recoverable: the runner logs it and degrades to
/// an empty result rather than aborting the run.
#[derive(Debug)]
pub enum FetchError {
    /// HTTP-level failure with optional status code
    Http {
        status: Option<u16>,
        message: String,
    },
    /// Response body could not be parsed as the expected XML structure
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Http {
                status: Some(s),
                message,
            } => write!(f, "HTTP {s}: {message}"),
            Self::Http {
                status: None,
                message,
            } => write!(f, "HTTP error: {message}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl FetchError {
    /// Create HTTP error from reqwest error
    pub fn from_reqwest(e: &reqwest::Error) -> Self {
        Self::Http {
            status: e.status().map(|s| s.as_u16()),
            message: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http_with_status() {
        let err = FetchError::Http {
            status: Some(503),
            message: "service unavailable".to_string(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("HTTP 503"));
        assert!(msg.contains("service unavailable"));
    }

    #[test]
    fn display_http_without_status() {
        let err = FetchError::Http {
            status: None,
            message: "connection refused".to_string(),
        };
        assert!(format!("{err}").starts_with("HTTP error:"));
    }

    #[test]
    fn display_parse() {
        let err = FetchError::Parse("unexpected EOF".to_string());
        assert!(format!("{err}").contains("parse error"));
    }
}
