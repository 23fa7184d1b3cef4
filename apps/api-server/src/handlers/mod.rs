//! HTTP handlers and route configuration.

mod health;
mod images;
mod posts;

use actix_web::web;

use crate::middleware::error::{AppError, AppResult};

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root)).service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(web::resource("/generateImage").route(web::post().to(images::generate_image)))
            .service(
                web::resource("/post")
                    .route(web::get().to(posts::list_posts))
                    .route(web::post().to(posts::create_post)),
            ),
    );
}

/// Fallback for unknown routes.
pub async fn not_found() -> AppResult<actix_web::HttpResponse> {
    Err(AppError::NotFound("Route not found".to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use actix_web::{App, test, web};
    use async_trait::async_trait;
    use serde_json::{Value, json};

    use artboard_core::ports::{
        GenerationError, GenerationMode, ImageGenerator, MediaUploader, PostRepository,
        UploadError,
    };
    use artboard_infra::{InMemoryPostRepository, MockImageGenerator};
    use artboard_shared::Variant;

    use super::*;
    use crate::middleware::error::json_config;
    use crate::state::AppState;

    const HOSTED_URL: &str = "https://res.cloudinary.com/demo/image/upload/v1/abc.png";

    macro_rules! test_app {
        ($state:expr) => {
            test_app!($state, 1024 * 1024)
        };
        ($state:expr, $limit:expr) => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new($state))
                    .app_data(json_config($limit))
                    .configure(configure_routes)
                    .default_service(web::to(not_found)),
            )
            .await
        };
    }

    struct FailingGenerator {
        status: Option<u16>,
    }

    #[async_trait]
    impl ImageGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
            match self.status {
                Some(status) => Err(GenerationError::Provider {
                    status: Some(status),
                    message: "Rate limit exceeded".to_string(),
                }),
                None => Err(GenerationError::Transport("connection reset".to_string())),
            }
        }

        fn mode(&self) -> GenerationMode {
            GenerationMode::Live
        }
    }

    struct RecordingUploader {
        url: Option<&'static str>,
        calls: AtomicUsize,
    }

    impl RecordingUploader {
        fn ok() -> Arc<Self> {
            Arc::new(Self {
                url: Some(HOSTED_URL),
                calls: AtomicUsize::new(0),
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                url: None,
                calls: AtomicUsize::new(0),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MediaUploader for RecordingUploader {
        async fn upload(&self, _payload: &str) -> Result<String, UploadError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.url.map(String::from).ok_or(UploadError::Rejected {
                status: Some(401),
                message: "Invalid Signature".to_string(),
            })
        }
    }

    fn instant_mock() -> Arc<dyn ImageGenerator> {
        Arc::new(MockImageGenerator::new(Duration::ZERO, Duration::ZERO))
    }

    fn state_with(
        repo: Option<Arc<InMemoryPostRepository>>,
        uploader: Arc<RecordingUploader>,
    ) -> AppState {
        AppState::from_parts(
            instant_mock(),
            repo.map(|r| r as Arc<dyn PostRepository>),
            uploader,
        )
    }

    #[actix_web::test]
    async fn generate_rejects_blank_prompt() {
        let app = test_app!(state_with(None, RecordingUploader::ok()));

        for body in [json!({}), json!({ "prompt": "   " })] {
            let req = test::TestRequest::post()
                .uri("/api/generateImage")
                .set_json(body)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), 400);

            let body: Value = test::read_body_json(resp).await;
            assert_eq!(body["success"], false);
            assert_eq!(body["status"], 400);
            assert_eq!(body["message"], "Prompt is required");
        }
    }

    #[actix_web::test]
    async fn generate_returns_keyword_placeholder_in_mock_mode() {
        let app = test_app!(state_with(None, RecordingUploader::ok()));

        let req = test::TestRequest::post()
            .uri("/api/generateImage")
            .set_json(json!({ "prompt": "a sunset over the ocean" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["photo"], Variant::Sunset.base64());
    }

    #[actix_web::test]
    async fn provider_status_is_passed_through() {
        let state = AppState::from_parts(
            Arc::new(FailingGenerator { status: Some(429) }),
            None,
            RecordingUploader::ok(),
        );
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/generateImage")
            .set_json(json!({ "prompt": "a cat" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 429);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 429);
        assert_eq!(body["message"], "Rate limit exceeded");
    }

    #[actix_web::test]
    async fn provider_failure_without_status_is_500() {
        let state = AppState::from_parts(
            Arc::new(FailingGenerator { status: None }),
            None,
            RecordingUploader::ok(),
        );
        let app = test_app!(state);

        let req = test::TestRequest::post()
            .uri("/api/generateImage")
            .set_json(json!({ "prompt": "a cat" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 500);
    }

    #[actix_web::test]
    async fn list_is_empty_demo_when_store_offline() {
        let app = test_app!(state_with(None, RecordingUploader::ok()));

        let req = test::TestRequest::get().uri("/api/post").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["demo"], true);
        assert_eq!(body["message"], "Database not connected - running in demo mode");
    }

    #[actix_web::test]
    async fn create_requires_every_field() {
        let uploader = RecordingUploader::ok();
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(state_with(Some(repo.clone()), uploader.clone()));

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({ "prompt": "a city at night", "photo": "aW1n" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], "name is required");
        assert_eq!(uploader.calls(), 0);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn created_post_is_listed_once_with_hosted_url() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(state_with(Some(repo), RecordingUploader::ok()));

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({
                "name": "Ada",
                "prompt": "a city at night",
                "photo": "data:image/png;base64,aW1n",
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let created: Value = test::read_body_json(resp).await;
        assert_eq!(created["success"], true);
        assert!(created.get("demo").is_none());
        assert_eq!(created["data"]["photo"], HOSTED_URL);
        assert!(!created["data"]["id"].as_str().unwrap().is_empty());

        let req = test::TestRequest::get().uri("/api/post").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        let posts = listed["data"].as_array().unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0]["id"], created["data"]["id"]);
        assert_eq!(posts[0]["name"], "Ada");
        assert_eq!(posts[0]["prompt"], "a city at night");
        assert_eq!(posts[0]["photo"], HOSTED_URL);
        assert!(posts[0]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn upload_failure_is_500_and_nothing_is_stored() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(state_with(Some(repo.clone()), RecordingUploader::failing()));

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({ "name": "Ada", "prompt": "a cat", "photo": "aW1n" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 500);
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn create_returns_stand_in_when_store_offline() {
        let repo = Arc::new(InMemoryPostRepository::new());
        repo.set_online(false);
        let uploader = RecordingUploader::ok();
        let app = test_app!(state_with(Some(repo), uploader.clone()));

        let req = test::TestRequest::post()
            .uri("/api/post")
            .set_json(json!({ "name": "Ada", "prompt": "a cat", "photo": "aW1n" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["demo"], true);
        assert_eq!(body["data"]["photo"], "demo-image.jpg");
        assert_eq!(body["message"], "Demo mode - post not saved to database");
        assert_eq!(uploader.calls(), 0);
    }

    #[actix_web::test]
    async fn malformed_json_is_400_in_uniform_shape() {
        let app = test_app!(state_with(None, RecordingUploader::ok()));

        let req = test::TestRequest::post()
            .uri("/api/post")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 400);
    }

    #[actix_web::test]
    async fn oversized_body_is_413() {
        let app = test_app!(state_with(None, RecordingUploader::ok()), 64);

        let req = test::TestRequest::post()
            .uri("/api/generateImage")
            .set_json(json!({ "prompt": "x".repeat(256) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 413);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], 413);
    }

    #[actix_web::test]
    async fn root_and_health() {
        let repo = Arc::new(InMemoryPostRepository::new());
        let app = test_app!(state_with(Some(repo), RecordingUploader::ok()));

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Hello Users");

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["generation"], "mock");
        assert_eq!(body["database"], "connected");
    }

    #[actix_web::test]
    async fn unknown_route_is_404_in_uniform_shape() {
        let app = test_app!(state_with(None, RecordingUploader::ok()));

        let req = test::TestRequest::get().uri("/api/nope").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["status"], 404);
    }
}
