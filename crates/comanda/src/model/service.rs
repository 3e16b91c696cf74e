//! Service-call model: the "call server" / "request bill" side channel,
//! keyed by restaurant and table and independent of the order machine.

use crate::model::RestaurantId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for service calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ServiceCallId(pub u32);

impl From<u32> for ServiceCallId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ServiceCallId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "call_{}", self.0)
    }
}

/// What the table is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceKind {
    CallServer,
    RequestBill,
}

/// A raised alert from a dine-in table. Stays open until a staff member
/// acknowledges it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCall {
    pub id: ServiceCallId,
    pub restaurant: RestaurantId,
    pub table: u32,
    pub kind: ServiceKind,
    pub raised_at: DateTime<Utc>,
    pub acknowledged: bool,
}

/// Payload for raising a service call.
#[derive(Debug, Clone)]
pub struct ServiceCallCreate {
    pub restaurant: RestaurantId,
    pub table: u32,
    pub kind: ServiceKind,
}

/// Payload for acknowledging a call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCallUpdate {
    pub acknowledged: Option<bool>,
}

/// Listing predicate for the floor staff's alert strip.
#[derive(Debug, Clone, Copy)]
pub struct ServiceCallFilter {
    pub restaurant: RestaurantId,
    pub open_only: bool,
}
