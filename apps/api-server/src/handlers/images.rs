//! Image generation endpoint.

use actix_web::{HttpResponse, web};

use artboard_shared::dto::{GenerateImageRequest, GenerateImageResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

/// Generate an image for a prompt.
///
/// POST /api/generateImage
pub async fn generate_image(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<GenerateImageRequest>,
) -> AppResult<HttpResponse> {
    let prompt = body.validate().map_err(|m| AppError::BadRequest(m.to_string()))?;

    tracing::debug!(request_id = %request_id.as_str(), "Generate image requested");
    let photo = state.images.generate(prompt).await?;

    Ok(HttpResponse::Ok().json(GenerateImageResponse { photo }))
}
