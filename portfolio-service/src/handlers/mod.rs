pub mod contact;
pub mod diagnostics;
pub mod greeting;
pub mod metrics;
pub mod projects;

pub use contact::submit_contact;
pub use diagnostics::diagnostics;
pub use greeting::{hello, root};
pub use self::metrics::metrics;
pub use projects::list_projects;
