use crate::dtos::MessageResponse;
use axum::Json;

pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from FastAPI Backend!",
    })
}

pub async fn hello() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello from the backend API!",
    })
}
