use std::time::Duration;

use engine_logging::engine_debug;
use reqwest::multipart;
use serde::Serialize;

use crate::{GenerationRequest, GenerationResponse, TransportError, TransportErrorKind};

/// Endpoint path of the generation service, relative to the base URL.
pub const GENERATE_PATH: &str = "/api/generate-video";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    /// Upper bound on the whole round trip. Generation is slow, so the
    /// default is 20 minutes.
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_millis(1_200_000),
        }
    }
}

#[async_trait::async_trait]
pub trait GenerationClient: Send + Sync {
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TransportError>;
}

#[derive(Debug, Clone)]
pub struct HttpGenerationClient {
    settings: ClientSettings,
}

#[derive(Serialize)]
struct CatalogRefBody<'a> {
    image: &'a str,
    text: &'a str,
}

impl HttpGenerationClient {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| {
                TransportError::new(TransportErrorKind::NetworkUnreachable, err.to_string())
            })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.settings.base_url.trim_end_matches('/'),
            GENERATE_PATH
        )
    }
}

#[async_trait::async_trait]
impl GenerationClient for HttpGenerationClient {
    /// Single round trip, no retries. Encoding follows the request tag:
    /// multipart for uploads, JSON for catalog references.
    async fn generate(
        &self,
        request: GenerationRequest,
    ) -> Result<GenerationResponse, TransportError> {
        let client = self.build_client()?;
        let endpoint = self.endpoint();

        let builder = match request {
            GenerationRequest::Upload {
                image,
                filename,
                text,
            } => {
                engine_debug!(
                    "submitting upload request bytes={} filename={}",
                    image.len(),
                    filename
                );
                let part = multipart::Part::bytes(image).file_name(filename);
                let form = multipart::Form::new()
                    .part("image", part)
                    .text("text", text);
                client.post(&endpoint).multipart(form)
            }
            GenerationRequest::CatalogRef { image_id, text } => {
                engine_debug!("submitting catalog request image_id={}", image_id);
                client.post(&endpoint).json(&CatalogRefBody {
                    image: &image_id,
                    text: &text,
                })
            }
        };

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::new(
                TransportErrorKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        response
            .json::<GenerationResponse>()
            .await
            .map_err(|err| {
                if err.is_timeout() {
                    TransportError::new(TransportErrorKind::Timeout, err.to_string())
                } else {
                    TransportError::new(TransportErrorKind::MalformedBody, err.to_string())
                }
            })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        return TransportError::new(TransportErrorKind::Timeout, err.to_string());
    }
    TransportError::new(TransportErrorKind::NetworkUnreachable, err.to_string())
}
