//! In-process transport that answers requests with the mock backend router.

use async_trait::async_trait;
use axum::{http::Request, Router};
use http_body_util::BodyExt;
use medicine_core::{ApiError, HttpRequest, HttpResponse, MedicineClient};
use medicine_frontend::{PageController, Transport};
use mock_server::Medicine;
use tower::ServiceExt;

pub const BASE_URL: &str = "http://backend.test";

pub struct RouterTransport {
    app: Router,
}

impl RouterTransport {
    pub fn new(app: Router) -> Self {
        Self { app }
    }
}

#[async_trait]
impl Transport for RouterTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let mut builder = Request::builder().method(request.method.as_str()).uri(&request.path);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        let req = builder
            .body(request.body.unwrap_or_default())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let response = self.app.clone().oneshot(req).await.unwrap();
        let status = response.status().as_u16();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        Ok(HttpResponse {
            status,
            headers: Vec::new(),
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}

pub fn medicine(name: &str, price: Option<f64>) -> Medicine {
    Medicine {
        name: name.to_string(),
        price,
    }
}

/// Controller wired to a fresh mock backend seeded with `medicines`.
pub fn controller(medicines: Vec<Medicine>) -> PageController<RouterTransport> {
    PageController::new(
        MedicineClient::new(BASE_URL),
        RouterTransport::new(mock_server::app_with(medicines)),
    )
}
