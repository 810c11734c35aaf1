use std::sync::mpsc;
use std::sync::Arc;

use engine_logging::{engine_info, engine_warn};
use vidgen_core::{Effect, GenerationOutcome, ImageChoice, Msg, RequestFailure};
use vidgen_engine::{Catalog, ClientSettings, EngineEvent, EngineHandle};

/// Executes core effects against the engine and the catalog collaborator,
/// feeding results back into the message queue.
pub struct EffectRunner {
    engine: EngineHandle,
    catalog: Arc<dyn Catalog>,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(
        msg_tx: mpsc::Sender<Msg>,
        settings: ClientSettings,
        catalog: Arc<dyn Catalog>,
    ) -> Self {
        Self {
            engine: EngineHandle::new(settings),
            catalog,
            msg_tx,
        }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCatalog => {
                    let templates = self.catalog.text_templates();
                    let images = self
                        .catalog
                        .image_options()
                        .into_iter()
                        .map(map_image)
                        .collect();
                    let _ = self.msg_tx.send(Msg::CatalogLoaded { templates, images });
                }
                Effect::SubmitGeneration { request } => {
                    engine_info!("SubmitGeneration text_len={}", request.text().len());
                    self.engine.submit(map_request(request));
                }
            }
        }
    }

    /// Drains finished engine events into the message queue. This is the
    /// presentation boundary: the tagged transport cause is logged here and
    /// collapsed into the generic failure shape the UI shows.
    pub fn poll(&self) {
        while let Some(event) = self.engine.try_recv() {
            let EngineEvent::GenerationFinished { result } = event;
            let result = match result {
                Ok(response) => Ok(map_response(response)),
                Err(err) => {
                    engine_warn!("generation failed: {}: {}", err.kind, err.message);
                    Err(RequestFailure::generic())
                }
            };
            let _ = self.msg_tx.send(Msg::GenerationFinished { result });
        }
    }
}

fn map_image(option: vidgen_engine::ImageOption) -> ImageChoice {
    ImageChoice {
        id: option.id,
        path: option.path,
        title: option.title,
    }
}

fn map_request(request: vidgen_core::GenerationRequest) -> vidgen_engine::GenerationRequest {
    match request {
        vidgen_core::GenerationRequest::Upload {
            image,
            filename,
            text,
        } => vidgen_engine::GenerationRequest::Upload {
            image,
            filename,
            text,
        },
        vidgen_core::GenerationRequest::CatalogRef { image_id, text } => {
            vidgen_engine::GenerationRequest::CatalogRef { image_id, text }
        }
    }
}

fn map_response(response: vidgen_engine::GenerationResponse) -> GenerationOutcome {
    GenerationOutcome {
        status: map_status(response.status),
        video_url: response.video_url,
        message: response.message,
    }
}

fn map_status(status: vidgen_engine::GenerationStatus) -> vidgen_core::GenerationStatus {
    match status {
        vidgen_engine::GenerationStatus::Processing => vidgen_core::GenerationStatus::Processing,
        vidgen_engine::GenerationStatus::Completed => vidgen_core::GenerationStatus::Completed,
        vidgen_engine::GenerationStatus::Error => vidgen_core::GenerationStatus::Error,
        vidgen_engine::GenerationStatus::Unknown => vidgen_core::GenerationStatus::Unknown,
    }
}
