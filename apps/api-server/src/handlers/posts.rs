//! Gallery post endpoints.

use actix_web::{HttpResponse, web};

use artboard_core::domain::{NewPost, Post, StoreOutcome};
use artboard_shared::ApiResponse;
use artboard_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id.to_string(),
        name: post.name,
        prompt: post.prompt,
        photo: post.photo,
        created_at: post.created_at.to_rfc3339(),
    }
}

/// List every post. Degrades to an empty demo listing.
///
/// GET /api/post
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let outcome = state.gallery.list_posts().await?;
    let reason = outcome.demo_reason();
    let posts: Vec<PostResponse> = outcome.into_data().into_iter().map(to_response).collect();

    let response = match reason {
        Some(reason) => ApiResponse::demo(posts, reason.list_message()),
        None => ApiResponse::ok(posts),
    };

    Ok(HttpResponse::Ok().json(response))
}

/// Upload the photo and publish a post.
///
/// POST /api/post
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let valid = body
        .into_inner()
        .validate()
        .map_err(|m| AppError::BadRequest(m.to_string()))?;

    let outcome = state
        .gallery
        .create_post(NewPost {
            name: valid.name,
            prompt: valid.prompt,
            photo: valid.photo,
        })
        .await?;

    let response = match outcome {
        StoreOutcome::Stored(post) => {
            tracing::info!(post_id = %post.id, "Post published");
            ApiResponse::ok(to_response(post))
        }
        StoreOutcome::Demo { data, reason } => {
            ApiResponse::demo(to_response(data), reason.create_message())
        }
    };

    Ok(HttpResponse::Ok().json(response))
}
