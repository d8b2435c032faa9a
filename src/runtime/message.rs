//! Result events sent from widgets to the owning application.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// How the payload bytes of a [`UiEvent`] are meant to be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Bool,
    Byte,
    Complex128,
    Complex64,
    Error,
    F64,
    F32,
    Isize,
    I8,
    I16,
    I32,
    I64,
    Char,
    String,
    Usize,
    U8,
    U16,
    U32,
    U64,

    Json,
    Xml,

    Map,
    Slice,

    None,
}

/// The outcome of a finished widget interaction (a submitted edit box, a
/// selected menu option, a pressed button).
///
/// `custom` is an application-defined tag; the toolkit never interprets it
/// or the payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiEvent {
    pub error: Option<String>,
    pub kind: ResultKind,
    pub custom: u16,
    pub data: Vec<u8>,
}

impl UiEvent {
    pub fn new(kind: ResultKind, custom: u16, data: Vec<u8>) -> Self {
        Self {
            error: None,
            kind,
            custom,
            data,
        }
    }

    pub fn none(custom: u16) -> Self {
        Self::new(ResultKind::None, custom, Vec::new())
    }

    pub fn failed(custom: u16, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            kind: ResultKind::Error,
            custom,
            data: Vec::new(),
        }
    }

    pub fn text(custom: u16, text: &str) -> Self {
        Self::new(ResultKind::String, custom, text.as_bytes().to_vec())
    }

    /// A little-endian `u16` payload.
    pub fn u16(custom: u16, value: u16) -> Self {
        Self::new(ResultKind::U16, custom, value.to_le_bytes().to_vec())
    }

    pub fn json<T: Serialize>(custom: u16, value: &T) -> Result<Self, PayloadError> {
        let data = serde_json::to_vec(value).map_err(|e| PayloadError::Json(e.to_string()))?;
        Ok(Self::new(ResultKind::Json, custom, data))
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn as_text(&self) -> Result<&str, PayloadError> {
        self.expect_kind(ResultKind::String)?;
        std::str::from_utf8(&self.data).map_err(|_| PayloadError::Utf8)
    }

    pub fn as_u16(&self) -> Result<u16, PayloadError> {
        self.expect_kind(ResultKind::U16)?;
        let bytes: [u8; 2] = self
            .data
            .as_slice()
            .try_into()
            .map_err(|_| PayloadError::Length {
                expected: 2,
                actual: self.data.len(),
            })?;
        Ok(u16::from_le_bytes(bytes))
    }

    pub fn decode_json<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        self.expect_kind(ResultKind::Json)?;
        serde_json::from_slice(&self.data).map_err(|e| PayloadError::Json(e.to_string()))
    }

    fn expect_kind(&self, expected: ResultKind) -> Result<(), PayloadError> {
        if self.kind != expected {
            return Err(PayloadError::KindMismatch {
                expected,
                actual: self.kind,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    KindMismatch {
        expected: ResultKind,
        actual: ResultKind,
    },
    Length {
        expected: usize,
        actual: usize,
    },
    Utf8,
    Json(String),
}

impl std::fmt::Display for PayloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PayloadError::KindMismatch { expected, actual } => {
                write!(f, "expected {:?} payload, got {:?}", expected, actual)
            }
            PayloadError::Length { expected, actual } => {
                write!(f, "expected {} payload bytes, got {}", expected, actual)
            }
            PayloadError::Utf8 => write!(f, "payload is not valid UTF-8"),
            PayloadError::Json(msg) => write!(f, "invalid JSON payload: {}", msg),
        }
    }
}

impl std::error::Error for PayloadError {}

#[cfg(test)]
#[path = "../../tests/unit/runtime/message.rs"]
mod tests;
