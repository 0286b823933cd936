/// Errors surfaced by the row-query and auth clients. Pages map these to a
/// human string in their error slot; nothing here retries.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The backend rejected the request; `message` comes from the error body.
    #[error("request failed with status {status}: {message}")]
    Http { status: u16, message: String },
    /// Transport failure before any response arrived.
    #[error("network error: {0}")]
    Network(String),
    /// The response body did not match the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// The auth endpoints rejected the credentials or token.
    #[error("{0}")]
    Auth(String),
}

impl From<gloo::net::Error> for Error {
    fn from(err: gloo::net::Error) -> Self {
        Error::Network(err.to_string())
    }
}
