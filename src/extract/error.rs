use std::{
    error::Error as StdError,
    fmt::{Debug, Display, Formatter, Result},
    io,
};

#[derive(Debug)]
pub(crate) enum ExtractError {
    DumpReader(DumpReaderError),
    Io(io::Error),
}
impl StdError for ExtractError {}
impl Display for ExtractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ExtractError::DumpReader(e) => write!(f, "{e}"),
            ExtractError::Io(e) => write!(f, "{e}"),
        }
    }
}
impl From<io::Error> for ExtractError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

#[derive(Debug)]
pub(crate) enum DumpReaderError {
    MalformedDump(String),
}
impl StdError for DumpReaderError {}
impl Display for DumpReaderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            DumpReaderError::MalformedDump(e) => {
                write!(f, "DumpReaderError::MalformedDump {e}")
            }
        }
    }
}
impl From<DumpReaderError> for ExtractError {
    fn from(value: DumpReaderError) -> Self {
        Self::DumpReader(value)
    }
}
