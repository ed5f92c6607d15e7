use axum::{Json, Router, extract::State, routing::post};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;

use crate::error::ApiError;
use crate::loader;
use crate::state::AppState;
use detection::Annotation;

#[derive(Debug, Deserialize)]
pub struct AnnotateRequest {
    #[serde(rename = "imageUrl")]
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnnotateResponse {
    pub annotations: Vec<Annotation>,
}

pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/auto-annotate", post(auto_annotate))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run_server(bind_addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Annotation server listening on {}", bind_addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}

async fn auto_annotate(
    State(state): State<AppState>,
    Json(request): Json<AnnotateRequest>,
) -> Result<Json<AnnotateResponse>, ApiError> {
    let image_ref = request.image_url.unwrap_or_default();
    if image_ref.is_empty() {
        return Err(ApiError::MissingImageUrl);
    }

    let image = loader::load(&image_ref, &state.http).await?;
    let (width, height) = image.dimensions();

    // Model execution is CPU/accelerator-bound; keep it off the async runtime.
    let detector = state.detector.clone();
    let detections = tokio::task::spawn_blocking(move || detector.infer(&image))
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))??;

    tracing::debug!(
        detections = detections.len(),
        width,
        height,
        "Image annotated"
    );

    let annotations = detection::format_detections(&detections, width, height);

    Ok(Json(AnnotateResponse { annotations }))
}
