/// Client-side errors
///
/// Transport failures, non-2xx responses, and malformed bodies all collapse
/// into this one enum at the call site. Components render or log their own
/// failure state; nothing propagates past the initiating component.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Login rejected: {0}")]
    LoginRejected(String),
}

pub type ClientResult<T> = Result<T, ClientError>;
