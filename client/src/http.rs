//! Shared request plumbing: header assembly, status checking and body
//! decoding for the row API and the auth endpoints.

use gloo::net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::Error;

/// Attaches the service api key and, when present, the bearer token.
pub(crate) fn attach_headers(
    builder: RequestBuilder,
    config: &Config,
    token: Option<&str>,
) -> RequestBuilder {
    let builder = builder.header("apikey", &config.api_key);
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
        None => builder,
    }
}

/// Turns a non-2xx response into `Error::Http` with the error body as the
/// message, falling back to the status text when the body is unreadable.
pub(crate) async fn check(response: Response) -> Result<Response, Error> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .unwrap_or_else(|_| response.status_text());
    Err(Error::Http { status, message })
}

pub(crate) async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, Error> {
    response
        .json::<T>()
        .await
        .map_err(|err| Error::Decode(err.to_string()))
}
