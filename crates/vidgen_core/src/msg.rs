#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Session mounted; the catalog should be loaded.
    SessionStarted,
    /// Catalog collaborator delivered its template and image lists.
    CatalogLoaded {
        templates: Vec<String>,
        images: Vec<crate::ImageChoice>,
    },
    /// User picked a local file for upload.
    ImageUploaded { bytes: Vec<u8>, filename: String },
    /// User selected an image from the catalog.
    CatalogImageSelected { id: String },
    /// User selected one of the text templates.
    TemplateSelected { text: String },
    /// User edited the free-form prompt text.
    TextChanged { text: String },
    /// User asked to generate a video from the current selection.
    SubmitClicked,
    /// User asked to discard the selection and any result.
    ClearClicked,
    /// The in-flight generation call resolved.
    GenerationFinished {
        result: Result<crate::GenerationOutcome, crate::RequestFailure>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
