use std::{error::Error, fmt::Display, io};

use iptvlist_rs::ParseError;

#[derive(Debug)]
pub enum ConvertError {
    ParseError(ParseError),
    SerializeError(serde_json::Error),
    IoError(io::Error),
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ParseError(e) => e.fmt(f),
            Self::SerializeError(e) => write!(f, "Failed to write json: {}", e),
            Self::IoError(e) => e.fmt(f),
        }
    }
}

impl Error for ConvertError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ParseError(e) => Some(e),
            Self::SerializeError(e) => Some(e),
            Self::IoError(e) => Some(e),
        }
    }
}

impl From<ParseError> for ConvertError {
    fn from(value: ParseError) -> Self {
        Self::ParseError(value)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(value: serde_json::Error) -> Self {
        Self::SerializeError(value)
    }
}

impl From<io::Error> for ConvertError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}
