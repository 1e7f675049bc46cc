use reqwest::StatusCode;

/// All error types that can occur when talking to the Yandex IoT API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Failed to serialize a request body to JSON.
    #[error("failed to dump json: {0:?}")]
    JsonDump(serde_json::Error),

    /// The API answered with a body that does not have the expected shape.
    #[error("failed to load json: {0:?}")]
    JsonLoad(serde_json::Error),

    /// The request never produced an HTTP response (DNS, TLS, connect, timeout).
    #[error("http {action} error: {err:?}")]
    Http { action: String, err: reqwest::Error },

    /// The request could not be built from the configured token or URL.
    #[error("invalid request: {0:?}")]
    InvalidRequest(reqwest::Error),

    /// The vendor rejected the bearer token.
    #[error("api token rejected with status {status}")]
    InvalidToken { status: StatusCode },

    /// A read endpoint answered with a non-success status.
    #[error("request to {path} failed with status {status}: {body}")]
    Status {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// The configured API endpoint cannot be used as a base URL.
    #[error("invalid base url {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The config entry is not known to the integration.
    #[error("config entry {0} not found")]
    EntryNotFound(uuid::Uuid),
}

impl Error {
    /// Create a new transport error, or an invalid request error if
    /// reqwest failed before anything was sent
    pub fn http(action: &str, err: reqwest::Error) -> Self {
        if err.is_builder() {
            return Error::InvalidRequest(err);
        }
        Error::Http {
            action: action.to_string(),
            err,
        }
    }

    /// Create a new non-success status error
    pub fn status(path: &str, status: StatusCode, body: &str) -> Self {
        Error::Status {
            path: path.to_string(),
            status,
            body: body.to_string(),
        }
    }

    /// Create a new invalid base url error
    pub fn invalid_base_url(url: &str, reason: &str) -> Self {
        Error::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Hacky implementation of PartialEq for testing
#[cfg(test)]
impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}
