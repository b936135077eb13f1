use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("stack `{stack}` has no output `{key}`")]
    MissingOutput { stack: String, key: String },
    #[error("GET {url} returned {status}, expected 200 OK")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[error(transparent)]
    Request(#[from] reqwest::Error),
    #[error("artifact is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error(transparent)]
    Sdk(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl<E> From<Box<E>> for Error
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn from(err: Box<E>) -> Self {
        Error::Sdk(err)
    }
}
