use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("executable not found: {name} (searched {} locations)", .searched.len())]
    NotFound { name: String, searched: Vec<PathBuf> },
}
