#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the catalog collaborator for its template and image lists.
    LoadCatalog,
    /// Dispatch a validated request to the generation service.
    SubmitGeneration { request: crate::GenerationRequest },
}
