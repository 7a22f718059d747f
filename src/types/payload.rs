use serde::{Deserialize, Serialize};

/// Body of the outbound thank-you notification.
///
/// The two variants never mix: only [`NotificationPayload::Coupon`] carries a
/// `coupon` key on the wire.
///
/// # Examples
///
/// ```
/// use purchase_rail::types::NotificationPayload;
///
/// let plain = NotificationPayload::Plain { message: "hi".into() };
/// assert_eq!(serde_json::to_string(&plain).unwrap(), r#"{"message":"hi"}"#);
/// assert_eq!(plain.coupon(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NotificationPayload {
    Coupon { message: String, coupon: String },
    Plain { message: String },
}

impl NotificationPayload {
    /// The human-readable message, present in both variants.
    #[inline]
    pub fn message(&self) -> &str {
        match self {
            Self::Coupon { message, .. } | Self::Plain { message } => message,
        }
    }

    /// The coupon code, if this is the coupon variant.
    #[inline]
    pub fn coupon(&self) -> Option<&str> {
        match self {
            Self::Coupon { coupon, .. } => Some(coupon),
            Self::Plain { .. } => None,
        }
    }

    /// Returns `true` for the coupon variant.
    #[inline]
    pub fn is_coupon(&self) -> bool {
        matches!(self, Self::Coupon { .. })
    }
}
