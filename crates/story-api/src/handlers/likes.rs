//! Like handlers
//!
//! Endpoints for toggling likes, querying like state, aggregate counts,
//! and per-user like listings.

use std::collections::HashMap;

use axum::extract::{Path, State};
use story_core::value_objects::EntityId;
use story_service::dto::{
    BookIdsRequest, ChapterIdsRequest, LikeStatusQuery, LikeStatusResponse, LikeToggleResponse,
    LikedBookResponse, LikedChapterResponse, MultipleBookStatusRequest,
    MultipleChapterStatusRequest, ToggleBookLikeRequest, ToggleChapterLikeRequest,
    UserLikesResponse,
};
use story_service::LikeService;

use crate::extractors::{BookIdPath, ChapterIdPath, UserIdPath, ValidatedJson, ValidatedQuery};
use crate::response::{ApiEnvelope, ApiResult};
use crate::state::AppState;

/// Toggle a book like
///
/// POST /api/likes/books/toggle
pub async fn toggle_book_like(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ToggleBookLikeRequest>,
) -> ApiResult<ApiEnvelope<LikeToggleResponse>> {
    let service = LikeService::new(state.service_context());
    let result = service
        .toggle_book_like(EntityId::from(req.user_id), EntityId::from(req.book_id))
        .await?;

    Ok(ApiEnvelope::with_message(result.message.clone(), result))
}

/// Toggle a chapter like
///
/// POST /api/likes/chapters/toggle
pub async fn toggle_chapter_like(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ToggleChapterLikeRequest>,
) -> ApiResult<ApiEnvelope<LikeToggleResponse>> {
    let service = LikeService::new(state.service_context());
    let result = service
        .toggle_chapter_like(
            EntityId::from(req.user_id),
            EntityId::from(req.chapter_id),
        )
        .await?;

    Ok(ApiEnvelope::with_message(result.message.clone(), result))
}

/// Get like status for a single book
///
/// GET /api/likes/books/{book_id}/status?userId=...
pub async fn book_like_status(
    State(state): State<AppState>,
    Path(path): Path<BookIdPath>,
    ValidatedQuery(query): ValidatedQuery<LikeStatusQuery>,
) -> ApiResult<ApiEnvelope<LikeStatusResponse>> {
    let book_id = path.book_id()?;

    let service = LikeService::new(state.service_context());
    let status = service
        .book_like_status(EntityId::from(query.user_id), book_id)
        .await?;

    Ok(ApiEnvelope::success(status))
}

/// Get like status for a single chapter
///
/// GET /api/likes/chapters/{chapter_id}/status?userId=...
pub async fn chapter_like_status(
    State(state): State<AppState>,
    Path(path): Path<ChapterIdPath>,
    ValidatedQuery(query): ValidatedQuery<LikeStatusQuery>,
) -> ApiResult<ApiEnvelope<LikeStatusResponse>> {
    let chapter_id = path.chapter_id()?;

    let service = LikeService::new(state.service_context());
    let status = service
        .chapter_like_status(EntityId::from(query.user_id), chapter_id)
        .await?;

    Ok(ApiEnvelope::success(status))
}

/// Get like status for several books at once
///
/// POST /api/likes/books/status/multiple
pub async fn multiple_book_like_status(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MultipleBookStatusRequest>,
) -> ApiResult<ApiEnvelope<HashMap<EntityId, LikeStatusResponse>>> {
    let book_ids: Vec<EntityId> = req.book_ids.iter().copied().map(EntityId::from).collect();

    let service = LikeService::new(state.service_context());
    let statuses = service
        .multiple_book_like_status(EntityId::from(req.user_id), &book_ids)
        .await?;

    Ok(ApiEnvelope::success(statuses))
}

/// Get like status for several chapters at once
///
/// POST /api/likes/chapters/status/multiple
pub async fn multiple_chapter_like_status(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<MultipleChapterStatusRequest>,
) -> ApiResult<ApiEnvelope<HashMap<EntityId, LikeStatusResponse>>> {
    let chapter_ids: Vec<EntityId> = req
        .chapter_ids
        .iter()
        .copied()
        .map(EntityId::from)
        .collect();

    let service = LikeService::new(state.service_context());
    let statuses = service
        .multiple_chapter_like_status(EntityId::from(req.user_id), &chapter_ids)
        .await?;

    Ok(ApiEnvelope::success(statuses))
}

/// Get like counts for several books at once
///
/// POST /api/likes/books/count/multiple
pub async fn multiple_book_likes_count(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<BookIdsRequest>,
) -> ApiResult<ApiEnvelope<HashMap<EntityId, i64>>> {
    let book_ids: Vec<EntityId> = req.book_ids.iter().copied().map(EntityId::from).collect();

    let service = LikeService::new(state.service_context());
    let counts = service.multiple_book_likes_count(&book_ids).await?;

    Ok(ApiEnvelope::success(counts))
}

/// Get like counts for several chapters at once
///
/// POST /api/likes/chapters/count/multiple
pub async fn multiple_chapter_likes_count(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<ChapterIdsRequest>,
) -> ApiResult<ApiEnvelope<HashMap<EntityId, i64>>> {
    let chapter_ids: Vec<EntityId> = req
        .chapter_ids
        .iter()
        .copied()
        .map(EntityId::from)
        .collect();

    let service = LikeService::new(state.service_context());
    let counts = service.multiple_chapter_likes_count(&chapter_ids).await?;

    Ok(ApiEnvelope::success(counts))
}

/// Get everything a user has liked
///
/// GET /api/likes/user/{user_id}
pub async fn user_likes(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiEnvelope<UserLikesResponse>> {
    let user_id = path.user_id()?;

    let service = LikeService::new(state.service_context());
    let likes = service.user_likes(user_id).await?;

    Ok(ApiEnvelope::success(likes))
}

/// Get the books a user has liked
///
/// GET /api/likes/user/{user_id}/books
pub async fn user_liked_books(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiEnvelope<Vec<LikedBookResponse>>> {
    let user_id = path.user_id()?;

    let service = LikeService::new(state.service_context());
    let books = service.user_liked_books(user_id).await?;

    Ok(ApiEnvelope::success(books))
}

/// Get the chapters a user has liked
///
/// GET /api/likes/user/{user_id}/chapters
pub async fn user_liked_chapters(
    State(state): State<AppState>,
    Path(path): Path<UserIdPath>,
) -> ApiResult<ApiEnvelope<Vec<LikedChapterResponse>>> {
    let user_id = path.user_id()?;

    let service = LikeService::new(state.service_context());
    let chapters = service.user_liked_chapters(user_id).await?;

    Ok(ApiEnvelope::success(chapters))
}
