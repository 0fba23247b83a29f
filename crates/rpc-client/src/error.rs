use thiserror::Error;

pub const CLIENT_ERROR_MESSAGE: &str = "Failed to send request. Contact the administrator for help.";
pub const SERVER_ERROR_MESSAGE: &str =
    "The Gameroom server has encountered an error. Please contact the administrator.";

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("url {0} cannot hold a path")]
    CannotBeABase(String),
    /// The server refused the request (4xx).
    #[error("{}", CLIENT_ERROR_MESSAGE)]
    Rejected {
        status: u16,
        message: Option<String>,
    },
    /// The server failed (5xx) or answered with an unexpected status.
    #[error("{}", SERVER_ERROR_MESSAGE)]
    Server {
        status: u16,
        message: Option<String>,
    },
    #[error("{}", SERVER_ERROR_MESSAGE)]
    Transport(#[source] reqwest::Error),
}

impl SubmitError {
    /// The `message` the server put in its JSON error body, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            SubmitError::Rejected { message, .. } | SubmitError::Server { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Rejected { status, .. } | SubmitError::Server { status, .. } => {
                Some(*status)
            }
            SubmitError::Transport(err) => err.status().map(|s| s.as_u16()),
            SubmitError::InvalidUrl { .. } | SubmitError::CannotBeABase(_) => None,
        }
    }
}
