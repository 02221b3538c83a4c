//! User identity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Domain model representing a record owner.
///
/// Every ledger record belongs to exactly one user; aggregation never
/// mixes users.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: NaiveDateTime,
}
