use crate::{ImageChoice, Phase};

/// Read-only projection handed to the rendering layer. Everything the UI
/// shows is derived from here; intents flow back as [`crate::Msg`]s.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub phase: Phase,
    pub is_loading: bool,
    pub status_message: String,
    pub error_message: String,
    pub error_code: Option<u16>,
    pub video_url: String,
    pub templates: Vec<String>,
    pub images: Vec<ImageChoice>,
    pub selected_image: Option<String>,
    pub text: String,
    pub dirty: bool,
}
