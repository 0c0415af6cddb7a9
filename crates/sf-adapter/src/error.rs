//! Error types for sf-adapter.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    pub fn with_source(
        kind: ErrorKind,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            source: Some(Box::new(source)),
        }
    }

    /// Wrap a failure raised by a [`SalesforceApi`](crate::SalesforceApi) implementation.
    pub fn client(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::with_source(ErrorKind::Client(source.to_string()), source)
    }

    /// Individual vendor messages if this is an aggregated save error.
    pub fn save_messages(&self) -> Option<&[String]> {
        match &self.kind {
            ErrorKind::Save { messages } => Some(messages.as_slice()),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    /// The vendor client failed before returning results.
    #[error("Client error: {0}")]
    Client(String),

    /// One or more save/delete results carried errors.
    #[error("{}", .messages.join("\n"))]
    Save { messages: Vec<String> },

    /// The API name of an element changed between two versions.
    #[error("Failed to update element as api names prev={previous} and new={new} are different")]
    ApiNameMismatch { previous: String, new: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::with_source(ErrorKind::Serialization(err.to_string()), err)
    }
}
