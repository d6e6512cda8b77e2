//! Error taxonomy for the station API.
//!
//! Every error exposed to clients carries one of four kinds. The kind
//! decides the HTTP status code and the `type` string in the JSON body.

use std::error::Error as StdError;
use std::fmt;

use serde::Serialize;
use serde::ser::{SerializeStruct, Serializer};

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// What went wrong, from the client's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The requested station is not in the current snapshot
    NotFound,
    /// A request or upstream payload could not be decoded
    Unmarshal,
    /// A response could not be encoded
    Marshal,
    /// An upstream fetch failed
    Io,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::NotFound => "notfound",
            ErrorKind::Unmarshal => "unmarshal",
            ErrorKind::Marshal => "marshal",
            ErrorKind::Io => "io",
        }
    }

    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Unmarshal => 400,
            ErrorKind::Marshal | ErrorKind::Io => 500,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error returned by the station service.
///
/// Displays as `<kind>: <message>: <cause>`, followed by each error in the
/// cause's own source chain.
#[derive(Debug)]
pub struct ApiError {
    kind: ErrorKind,
    message: String,
    source: BoxError,
}

impl ApiError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: source.into(),
        }
    }

    pub fn not_found(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::NotFound, message, source)
    }

    pub fn unmarshal(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Unmarshal, message, source)
    }

    pub fn marshal(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Marshal, message, source)
    }

    pub fn io(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Io, message, source)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn status_code(&self) -> u16 {
        self.kind.status_code()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.kind, self.message, self.source)?;

        let mut cause = self.source.source();
        while let Some(err) = cause {
            write!(f, ": {err}")?;
            cause = err.source();
        }
        Ok(())
    }
}

impl StdError for ApiError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Serialises as `{"message": ..., "code": ..., "type": ...}`.
impl Serialize for ApiError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut body = serializer.serialize_struct("ApiError", 3)?;
        body.serialize_field("message", &self.to_string())?;
        body.serialize_field("code", &self.status_code())?;
        body.serialize_field("type", self.kind.as_str())?;
        body.end()
    }
}
