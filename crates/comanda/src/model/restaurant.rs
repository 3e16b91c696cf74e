//! Restaurant (tenant) model for the HQ console.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Restaurants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub u32);

impl From<u32> for RestaurantId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for RestaurantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "restaurant_{}", self.0)
    }
}

/// One tenant of the platform. Order placement checks `active`;
/// `auto_acknowledge` decides whether new orders enter the lifecycle at
/// `Pending` or skip straight to `Received`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub active: bool,
    pub auto_acknowledge: bool,
}

/// Payload for registering a new restaurant.
#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub auto_acknowledge: bool,
}

/// Payload for updating tenant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub active: Option<bool>,
    pub auto_acknowledge: Option<bool>,
}

/// Listing predicate for the HQ console.
#[derive(Debug, Clone, Copy)]
pub struct RestaurantFilter {
    pub active_only: bool,
}
