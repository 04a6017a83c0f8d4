use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("cannot convert element {index} ('{value}'): {reason}")]
    Parse {
        index:  usize,
        value:  String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
