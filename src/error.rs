use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Couldn't build a selector from: {0}")]
    InvalidSelector(String),

    #[error("Reqwest Error: {0}")]
    Reqwest(#[from] reqwest::Error),
}
