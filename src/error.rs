use thiserror::Error;

/// A failed attempt to pull vacancies from one of the job APIs.
///
/// Any variant aborts the whole run; there are no retries and no partial
/// results.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
