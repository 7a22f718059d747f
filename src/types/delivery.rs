use serde::Serialize;

use super::NotificationPayload;

/// A successful acknowledgement from the notification endpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Acknowledgement {
    /// HTTP status of the reply, always in the 2xx range.
    pub status: u16,
}

impl Acknowledgement {
    #[inline]
    pub const fn new(status: u16) -> Self {
        Self { status }
    }
}

/// Success value of a full pipeline run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Delivery {
    /// The payload that was sent.
    pub payload: NotificationPayload,
    pub acknowledgement: Acknowledgement,
}
