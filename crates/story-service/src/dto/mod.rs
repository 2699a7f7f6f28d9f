//! Data transfer objects
//!
//! Request DTOs (deserialization + validation) and response DTOs
//! (serialization), with mappers from domain entities.

mod mappers;
mod requests;
mod responses;

pub use requests::{
    BookIdsRequest, ChapterIdsRequest, LikeStatusQuery, MultipleBookStatusRequest,
    MultipleChapterStatusRequest, ToggleBookLikeRequest, ToggleChapterLikeRequest,
};
pub use responses::{
    AuthorResponse, BookSummaryResponse, ChapterSummaryResponse, LikeStatusResponse,
    LikeToggleResponse, LikedBookResponse, LikedChapterResponse, UserLikesResponse,
};
