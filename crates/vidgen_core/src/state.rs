use crate::view_model::AppViewModel;

/// User-facing message used whenever a failure has no better description.
pub const GENERIC_FAILURE_MESSAGE: &str = "Video generation failed";

/// Where the image for a submission comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// Raw file bytes picked by the user (ad-hoc upload).
    Uploaded { bytes: Vec<u8>, filename: String },
    /// Identifier of a pre-cataloged asset.
    Cataloged { id: String },
}

impl ImageSource {
    /// Short label for display purposes: the filename or the catalog id.
    pub fn label(&self) -> &str {
        match self {
            ImageSource::Uploaded { filename, .. } => filename,
            ImageSource::Cataloged { id } => id,
        }
    }
}

/// The inputs currently chosen by the user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub image: Option<ImageSource>,
    pub text: String,
}

/// Catalog image entry as the core sees it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageChoice {
    pub id: String,
    pub path: String,
    pub title: String,
}

/// Submission lifecycle phase. `Completed`, `Processing` and `Error` are
/// terminal until a new submit or clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Completed,
    Processing,
    Error,
}

/// Core-side mirror of the service's response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Processing,
    Completed,
    Error,
    /// The wire carried a status value this build does not recognize.
    Unknown,
}

/// Core-side mirror of the service's response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    pub status: GenerationStatus,
    pub video_url: String,
    pub message: Option<String>,
}

/// Normalized transport failure as the presentation boundary reports it.
/// The tagged cause stays in the engine and its logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFailure {
    pub message: String,
    pub status_code: u16,
}

impl RequestFailure {
    /// The fixed failure shape shown for any transport-level problem.
    pub fn generic() -> Self {
        Self {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
            status_code: 500,
        }
    }
}

/// Owns the selection, the submission phase and the last result. The UI
/// layer only ever sees the [`AppViewModel`] projection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    phase: Phase,
    selection: Selection,
    templates: Vec<String>,
    images: Vec<ImageChoice>,
    video_url: String,
    status_message: String,
    error_message: String,
    error_code: Option<u16>,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase,
            is_loading: self.phase == Phase::Submitting,
            status_message: self.status_message.clone(),
            error_message: self.error_message.clone(),
            error_code: self.error_code,
            video_url: self.video_url.clone(),
            templates: self.templates.clone(),
            images: self.images.clone(),
            selected_image: self.selection.image.as_ref().map(|i| i.label().to_string()),
            text: self.selection.text.clone(),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns whether the state changed since the last call and resets the
    /// flag. Used by the render loop to coalesce redraws.
    pub fn consume_dirty(&mut self) -> bool {
        let was = self.dirty;
        self.dirty = false;
        was
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn set_catalog(&mut self, templates: Vec<String>, images: Vec<ImageChoice>) {
        // Preselect the first template so a catalog-driven session can
        // submit without an explicit text choice.
        if self.selection.text.is_empty() {
            if let Some(first) = templates.first() {
                self.selection.text = first.clone();
            }
        }
        self.templates = templates;
        self.images = images;
        self.mark_dirty();
    }

    pub(crate) fn set_image(&mut self, image: ImageSource) {
        self.selection.image = Some(image);
        self.clear_error();
        self.mark_dirty();
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.selection.text = text;
        self.clear_error();
        self.mark_dirty();
    }

    pub(crate) fn begin_submission(&mut self) {
        self.phase = Phase::Submitting;
        self.video_url.clear();
        self.error_message.clear();
        self.error_code = None;
        self.status_message = "Generating video...".to_string();
        self.mark_dirty();
    }

    pub(crate) fn complete(&mut self, video_url: String) {
        self.phase = Phase::Completed;
        self.video_url = video_url;
        self.status_message = "Video generated successfully!".to_string();
        self.mark_dirty();
    }

    pub(crate) fn acknowledge_processing(&mut self) {
        self.phase = Phase::Processing;
        self.status_message = "Video is processing...".to_string();
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: String, code: Option<u16>) {
        self.phase = Phase::Error;
        self.status_message.clear();
        self.error_message = message;
        self.error_code = code;
        self.mark_dirty();
    }

    fn clear_error(&mut self) {
        self.error_message.clear();
        self.error_code = None;
    }

    pub(crate) fn reset(&mut self) {
        let templates = std::mem::take(&mut self.templates);
        let images = std::mem::take(&mut self.images);
        *self = Self {
            templates,
            images,
            dirty: true,
            ..Self::default()
        };
    }
}
