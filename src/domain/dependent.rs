use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::client::SubscriptionStatus;

/// A family member covered by a client's plan.
///
/// Dependents are read-only in the edit flow; only their status is
/// presented alongside the client record.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Dependent {
    pub id: i32,
    pub client_id: i32,
    pub name: String,
    /// Relationship to the plan holder ("Cônjuge", "Filho", ...).
    pub relationship: String,
    pub status: SubscriptionStatus,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDependent {
    pub client_id: i32,
    pub name: String,
    pub relationship: String,
    pub status: SubscriptionStatus,
}

impl NewDependent {
    #[must_use]
    pub fn new(client_id: i32, name: String, relationship: String) -> Self {
        Self {
            client_id,
            name: name.trim().to_string(),
            relationship: relationship.trim().to_string(),
            status: SubscriptionStatus::Pending,
        }
    }
}
