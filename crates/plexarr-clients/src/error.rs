use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{service} request failed: {source}")]
    Request {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned status code {status}")]
    Status { service: &'static str, status: u16 },

    /// The backend answered with a validation message (`[{"errorMessage": ...}]`)
    #[error("{service} rejected the request ({status}): {message}")]
    Rejected {
        service: &'static str,
        status: u16,
        message: String,
    },

    #[error("{service} found nothing for '{term}'")]
    NotFound { service: &'static str, term: String },

    #[error("malformed watchlist XML: {0}")]
    Xml(String),

    #[error("invalid {service} credential: {reason}")]
    InvalidCredential { service: &'static str, reason: String },
}

impl ClientError {
    pub(crate) fn request(service: &'static str) -> impl FnOnce(reqwest::Error) -> Self {
        move |source| ClientError::Request { service, source }
    }

    /// HTTP status attached to the error, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Status { status, .. } | ClientError::Rejected { status, .. } => Some(*status),
            ClientError::Request { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
