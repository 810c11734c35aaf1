use thiserror::Error;

use crate::{ImageSource, Selection};

/// Outbound payload, tagged by wire encoding. `Upload` travels as a
/// multipart form, `CatalogRef` as a JSON body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationRequest {
    Upload {
        image: Vec<u8>,
        filename: String,
        text: String,
    },
    CatalogRef {
        image_id: String,
        text: String,
    },
}

impl GenerationRequest {
    pub fn text(&self) -> &str {
        match self {
            GenerationRequest::Upload { text, .. } => text,
            GenerationRequest::CatalogRef { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please choose an image")]
    MissingImage,
    #[error("Please enter text")]
    EmptyText,
}

/// Pure builder: validates the selection and picks the wire encoding from
/// the image source tag. Text is trimmed on the way out.
pub fn build_request(selection: &Selection) -> Result<GenerationRequest, ValidationError> {
    let image = selection.image.as_ref().ok_or(ValidationError::MissingImage)?;
    let text = selection.text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    Ok(match image {
        ImageSource::Uploaded { bytes, filename } => GenerationRequest::Upload {
            image: bytes.clone(),
            filename: filename.clone(),
            text: text.to_string(),
        },
        ImageSource::Cataloged { id } => GenerationRequest::CatalogRef {
            image_id: id.clone(),
            text: text.to_string(),
        },
    })
}
