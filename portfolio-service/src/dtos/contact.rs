use serde::Serialize;

/// Acknowledgement returned once a contact message is stored.
#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub status: &'static str,
    pub id: String,
}

impl ContactAck {
    pub fn stored(id: String) -> Self {
        Self { status: "ok", id }
    }
}
