use thiserror::Error;

/// Why one raw record was rejected.
///
/// Never fatal: the offending record is dropped and the stream continues.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{0} should be a non-negative integer")]
    InvalidType(&'static str),
    #[error("unrecognized status: {0}")]
    UnknownStatus(String),
    #[error("amount is required for a NEW order")]
    MissingAmount,
}

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("parse error in line {line}: {source}")]
    Parse {
        line: usize,
        #[source]
        source: ParseError,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
