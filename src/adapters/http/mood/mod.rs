//! HTTP adapter for mood endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CreateMoodRequest, DeleteMoodResponse, ListMoodsParams, MoodEnvelope, MoodListResponse,
    MoodResponse, TagListResponse, UpdateMoodRequest,
};
pub use handlers::MoodHandlers;
pub use routes::mood_routes;
