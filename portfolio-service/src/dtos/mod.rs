pub mod contact;
pub mod diagnostics;
pub mod projects;

pub use contact::ContactAck;
pub use diagnostics::DiagnosticReport;
pub use projects::ProjectsResponse;

use serde::Serialize;

/// Body of the greeting endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
