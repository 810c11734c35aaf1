use std::fmt;

use serde::Deserialize;

/// Outbound payload as the engine sends it. Mirrors the core's request type;
/// the app layer maps between the two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    /// Raw image bytes, sent as a multipart form.
    Upload {
        image: Vec<u8>,
        filename: String,
        text: String,
    },
    /// Catalog asset identifier, sent as a JSON body.
    CatalogRef { image_id: String, text: String },
}

/// Response body of the generation endpoint. The body is trusted as-is;
/// an unrecognized status deserializes to [`GenerationStatus::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse {
    #[serde(default)]
    pub video_url: String,
    pub status: GenerationStatus,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationStatus {
    Processing,
    Completed,
    Error,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    GenerationFinished {
        result: Result<GenerationResponse, TransportError>,
    },
}

/// Transport-level failure with its cause kept as a tag. The generic
/// user-facing message is produced at the presentation boundary, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError {
    pub kind: TransportErrorKind,
    pub message: String,
}

impl TransportError {
    pub(crate) fn new(kind: TransportErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorKind {
    NetworkUnreachable,
    Timeout,
    HttpStatus(u16),
    MalformedBody,
}

impl fmt::Display for TransportErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportErrorKind::NetworkUnreachable => write!(f, "network unreachable"),
            TransportErrorKind::Timeout => write!(f, "timeout"),
            TransportErrorKind::HttpStatus(code) => write!(f, "http status {code}"),
            TransportErrorKind::MalformedBody => write!(f, "malformed body"),
        }
    }
}
