use thiserror::Error;

use crate::packet::Value;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid packet input: {0}")]
    Parse(#[from] nom::error::Error<String>),

    #[error("divider packet {0} missing after sort")]
    MissingDivider(Value),

    #[error("divider position product overflows")]
    Overflow,
}

pub type Result<T> = std::result::Result<T, Error>;
