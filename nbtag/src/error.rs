//! Contains the Error and Result type used by the reader and writer.

/// An error produced while reading, writing or building NBT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The data is not valid NBT, or a value cannot be represented in NBT.
    /// This includes input that ends part way through a value.
    MalformedFormat,

    /// A list would contain elements of more than one tag type.
    TypeMismatch,

    /// The underlying reader or writer failed.
    Io(std::io::ErrorKind),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self.kind, ErrorKind::MalformedFormat)
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, ErrorKind::TypeMismatch)
    }

    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }

    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::MalformedFormat,
        }
    }

    pub(crate) fn type_mismatch(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::TypeMismatch,
        }
    }

    pub(crate) fn invalid_tag(tag: u8) -> Self {
        Self::malformed(format!("invalid nbt tag value: {}", tag))
    }

    pub(crate) fn nonunicode_string(data: &[u8]) -> Self {
        Self::malformed(format!(
            "invalid nbt string: nonunicode: {}",
            String::from_utf8_lossy(data)
        ))
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            // Running out of input part way through a value is a property of
            // the data, not of the transport.
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: format!("eof: unexpectedly ran out of input: {}", e),
                kind: ErrorKind::MalformedFormat,
            },
            kind => Self {
                msg: format!("io error: {}", e),
                kind: ErrorKind::Io(kind),
            },
        }
    }
}
