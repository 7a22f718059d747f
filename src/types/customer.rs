use serde::{Deserialize, Serialize};

/// A customer who completed a purchase.
///
/// Field names follow the camelCase wire format used by the order-completion
/// handlers that feed the pipeline (`firstName`, `lastName`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub age: u32,
    pub email: String,
}

impl Customer {
    /// Creates a customer from its parts.
    #[inline]
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        age: u32,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            age,
            email: email.into(),
        }
    }
}
