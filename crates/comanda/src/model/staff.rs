//! Staff references used by the lifecycle guards.
//!
//! Staff are plain `(restaurant, role)` values rather than managed entities:
//! the transition guards need exactly those two facts, and staff
//! administration is presentation glue outside the core.

use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Staff roles recognized by the lifecycle guards. `Admin` can perform every
/// staff-gated transition for its own restaurant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Kitchen,
    Server,
    Courier,
    Admin,
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Role::Kitchen => "kitchen",
            Role::Server => "server",
            Role::Courier => "courier",
            Role::Admin => "admin",
        };
        write!(f, "{name}")
    }
}

/// The acting staff member behind a transition request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffRef {
    pub restaurant: RestaurantId,
    pub role: Role,
}

impl StaffRef {
    pub fn new(restaurant: RestaurantId, role: Role) -> Self {
        Self { restaurant, role }
    }
}
