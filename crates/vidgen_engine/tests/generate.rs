use std::time::Duration;

use pretty_assertions::assert_eq;
use vidgen_engine::{
    ClientSettings, GenerationClient, GenerationRequest, GenerationStatus, HttpGenerationClient,
    TransportErrorKind, GENERATE_PATH,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpGenerationClient {
    HttpGenerationClient::new(ClientSettings {
        base_url: server.uri(),
        ..ClientSettings::default()
    })
}

fn upload_request() -> GenerationRequest {
    GenerationRequest::Upload {
        image: vec![0xFF, 0xD8, 0xFF, 0xE0],
        filename: "avatar.jpg".to_string(),
        text: "Hello!".to_string(),
    }
}

struct ContentTypeContains(&'static str);

impl wiremock::Match for ContentTypeContains {
    fn matches(&self, request: &Request) -> bool {
        request
            .headers
            .get("content-type")
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.contains(self.0))
    }
}

#[tokio::test]
async fn upload_is_sent_as_multipart_and_completed_is_parsed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(ContentTypeContains("multipart/form-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "videoUrl": "https://x/video.mp4",
            "status": "completed",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate(upload_request())
        .await
        .expect("generate ok");

    assert_eq!(response.status, GenerationStatus::Completed);
    assert_eq!(response.video_url, "https://x/video.mp4");
    assert_eq!(response.message, None);
}

#[tokio::test]
async fn catalog_reference_is_sent_as_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_json(serde_json::json!({
            "image": "img2",
            "text": "Welcome greeting",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "videoUrl": "",
            "status": "processing",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate(GenerationRequest::CatalogRef {
            image_id: "img2".to_string(),
            text: "Welcome greeting".to_string(),
        })
        .await
        .expect("generate ok");

    assert_eq!(response.status, GenerationStatus::Processing);
    assert!(response.video_url.is_empty());
}

#[tokio::test]
async fn server_error_body_is_passed_through() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "videoUrl": "",
            "status": "error",
            "message": "quota exceeded",
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate(upload_request())
        .await
        .expect("generate ok");

    assert_eq!(response.status, GenerationStatus::Error);
    assert_eq!(response.message.as_deref(), Some("quota exceeded"));
}

#[tokio::test]
async fn unknown_wire_status_is_representable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "videoUrl": "",
            "status": "queued",
        })))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .generate(upload_request())
        .await
        .expect("generate ok");

    assert_eq!(response.status, GenerationStatus::Unknown);
}

#[tokio::test]
async fn non_success_status_is_tagged_with_the_code() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(upload_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, TransportErrorKind::HttpStatus(503));
}

#[tokio::test]
async fn slow_response_is_tagged_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(250))
                .set_body_string("slow"),
        )
        .mount(&server)
        .await;

    let client = HttpGenerationClient::new(ClientSettings {
        base_url: server.uri(),
        request_timeout: Duration::from_millis(50),
        ..ClientSettings::default()
    });

    let err = client.generate(upload_request()).await.unwrap_err();

    assert_eq!(err.kind, TransportErrorKind::Timeout);
}

#[tokio::test]
async fn undecodable_body_is_tagged_as_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .generate(upload_request())
        .await
        .unwrap_err();

    assert_eq!(err.kind, TransportErrorKind::MalformedBody);
}

#[tokio::test]
async fn unreachable_server_is_tagged_as_network_error() {
    // A non-pooled server: `MockServer::start()` hands out pooled servers
    // that keep listening after drop, so the port would still answer.
    let server = MockServer::builder().start().await;
    let uri = server.uri();
    drop(server);

    let client = HttpGenerationClient::new(ClientSettings {
        base_url: uri,
        ..ClientSettings::default()
    });

    let err = client.generate(upload_request()).await.unwrap_err();

    assert_eq!(err.kind, TransportErrorKind::NetworkUnreachable);
}
