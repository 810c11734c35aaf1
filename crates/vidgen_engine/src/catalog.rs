/// Catalog image entry: an opaque asset identifier plus display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageOption {
    pub id: String,
    pub path: String,
    pub title: String,
}

/// External collaborator supplying selectable text templates and image
/// assets. The core only consumes the lists as opaque values.
pub trait Catalog: Send + Sync {
    fn text_templates(&self) -> Vec<String>;
    fn image_options(&self) -> Vec<ImageOption>;
}

/// Fixed in-memory catalog used until a real asset service exists.
pub struct StaticCatalog {
    templates: Vec<String>,
    images: Vec<ImageOption>,
}

impl StaticCatalog {
    pub fn new(templates: Vec<String>, images: Vec<ImageOption>) -> Self {
        Self { templates, images }
    }

    pub fn built_in() -> Self {
        let images = (1..=4)
            .map(|n| ImageOption {
                id: format!("img{n}"),
                path: format!("assets/character_{n:02}.jpg"),
                title: format!("Presenter {n}"),
            })
            .collect();
        Self::new(
            vec!["Welcome greeting".to_string(), "Hello!".to_string()],
            images,
        )
    }
}

impl Catalog for StaticCatalog {
    fn text_templates(&self) -> Vec<String> {
        self.templates.clone()
    }

    fn image_options(&self) -> Vec<ImageOption> {
        self.images.clone()
    }
}
