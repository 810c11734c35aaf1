use crate::{
    build_request, AppState, Effect, GenerationStatus, ImageSource, Msg, Phase, RequestFailure,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SessionStarted => vec![Effect::LoadCatalog],
        Msg::CatalogLoaded { templates, images } => {
            state.set_catalog(templates, images);
            Vec::new()
        }
        Msg::ImageUploaded { bytes, filename } => {
            if is_image_filename(&filename) {
                state.set_image(ImageSource::Uploaded { bytes, filename });
            } else {
                // Mirror the upload form's file-type guard: reject the pick,
                // keep whatever was selected before.
                state.fail("Please choose an image file".to_string(), None);
            }
            Vec::new()
        }
        Msg::CatalogImageSelected { id } => {
            state.set_image(ImageSource::Cataloged { id });
            Vec::new()
        }
        Msg::TemplateSelected { text } | Msg::TextChanged { text } => {
            state.set_text(text);
            Vec::new()
        }
        Msg::SubmitClicked => {
            // One request in flight per session; a second submit is ignored.
            if state.phase() == Phase::Submitting {
                return (state, Vec::new());
            }
            match build_request(state.selection()) {
                Ok(request) => {
                    state.begin_submission();
                    vec![Effect::SubmitGeneration { request }]
                }
                Err(validation) => {
                    state.fail(validation.to_string(), None);
                    Vec::new()
                }
            }
        }
        Msg::GenerationFinished { result } => {
            // A result is only meaningful while a submission is in flight;
            // a clear issued in the meantime discards it.
            if state.phase() != Phase::Submitting {
                return (state, Vec::new());
            }
            apply_outcome(&mut state, result);
            Vec::new()
        }
        Msg::ClearClicked => {
            state.reset();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn apply_outcome(
    state: &mut AppState,
    result: Result<crate::GenerationOutcome, RequestFailure>,
) {
    match result {
        Ok(outcome) => match outcome.status {
            GenerationStatus::Completed if !outcome.video_url.is_empty() => {
                state.complete(outcome.video_url);
            }
            GenerationStatus::Processing => {
                state.acknowledge_processing();
            }
            GenerationStatus::Error => {
                let message = outcome
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| crate::GENERIC_FAILURE_MESSAGE.to_string());
                state.fail(message, None);
            }
            // Completed without a URL, or a status this build does not know.
            GenerationStatus::Completed | GenerationStatus::Unknown => {
                state.fail(crate::GENERIC_FAILURE_MESSAGE.to_string(), None);
            }
        },
        Err(failure) => {
            state.fail(failure.message, Some(failure.status_code));
        }
    }
}

fn is_image_filename(filename: &str) -> bool {
    let Some((_, ext)) = filename.rsplit_once('.') else {
        return false;
    };
    matches!(
        ext.to_ascii_lowercase().as_str(),
        "jpg" | "jpeg" | "png" | "gif" | "webp" | "bmp"
    )
}
