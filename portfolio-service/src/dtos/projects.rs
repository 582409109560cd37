use crate::models::ProjectRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProjectsResponse {
    pub projects: &'static [ProjectRecord],
}
