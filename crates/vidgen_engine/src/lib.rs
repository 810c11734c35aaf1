//! Vidgen engine: generation client, catalog collaborator and effect execution.
mod catalog;
mod client;
mod engine;
mod types;

pub use catalog::{Catalog, ImageOption, StaticCatalog};
pub use client::{ClientSettings, GenerationClient, HttpGenerationClient, GENERATE_PATH};
pub use engine::EngineHandle;
pub use types::{
    EngineEvent, GenerationRequest, GenerationResponse, GenerationStatus, TransportError,
    TransportErrorKind,
};
