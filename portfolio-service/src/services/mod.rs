pub mod database;
pub mod metrics;
pub mod store;

pub use database::MongoDb;
pub use self::metrics::{get_metrics, init_metrics, record_contact, ContactOutcome};
pub use store::DocumentStore;
