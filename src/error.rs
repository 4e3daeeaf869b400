use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
  #[error("input is not an HTML document: {reason}")]
  MalformedInput { reason: &'static str },
  #[error("request failed")]
  Request(#[from] reqwest::Error),
  #[error("invalid selector `{selector}`: {message}")]
  Selector {
    message: String,
    selector: &'static str,
  },
  #[error("server returned {status} for {url}")]
  Status { status: StatusCode, url: String },
}
