pub mod contact;
pub mod project;

pub use contact::{ContactMessage, ContactSubmission, CONTACT_COLLECTION};
pub use project::{catalog, ProjectRecord};
