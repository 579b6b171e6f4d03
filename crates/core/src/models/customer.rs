//! Customer record.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::types::CustomerId;

use super::timestamp;

/// A registered customer as listed by the admin endpoints.
///
/// Created and destroyed server-side; the client only reads these and asks
/// for deletion by id. The password is never part of the listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: CustomerId,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub contact_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default, deserialize_with = "timestamp::deserialize_optional")]
    pub created_at: Option<NaiveDateTime>,
}
