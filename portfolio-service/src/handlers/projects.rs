use crate::dtos::ProjectsResponse;
use crate::models::catalog;
use axum::Json;

/// Returns the compiled-in project catalog.
pub async fn list_projects() -> Json<ProjectsResponse> {
    Json(ProjectsResponse {
        projects: catalog(),
    })
}
