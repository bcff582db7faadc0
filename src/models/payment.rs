use serde::{Deserialize, Serialize};

/// Reservation request as posted by the client. Absent fields deserialize
/// to empty strings and are caught by the presence check.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub pin: String,
    #[serde(default)]
    pub course: String,
}

impl PaymentRequest {
    pub fn has_missing_input(&self) -> bool {
        self.card_number.is_empty() || self.pin.is_empty() || self.course.is_empty()
    }
}

#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct PaymentVerdict {
    pub success: bool,
    pub message: String,
}
