//! Vidgen core: pure submission state machine and view-model helpers.
mod effect;
mod msg;
mod request;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use request::{build_request, GenerationRequest, ValidationError};
pub use state::{
    AppState, GenerationOutcome, GenerationStatus, ImageChoice, ImageSource, Phase,
    RequestFailure, Selection, GENERIC_FAILURE_MESSAGE,
};
pub use update::update;
pub use view_model::AppViewModel;
