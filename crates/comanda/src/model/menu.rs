//! Menu catalog model. Read-only from the order board's perspective;
//! placement resolves item references to priced, named order lines.

use crate::model::RestaurantId;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for menu items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MenuItemId(pub u32);

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "item_{}", self.0)
    }
}

/// One dish on a restaurant's menu. Prices are integer cents so order totals
/// compare exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: MenuItemId,
    pub restaurant: RestaurantId,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
    pub available: bool,
}

/// Payload for adding a dish to a restaurant's menu.
#[derive(Debug, Clone)]
pub struct MenuItemCreate {
    pub restaurant: RestaurantId,
    pub name: String,
    pub category: String,
    pub price_cents: i64,
}

/// Payload for back-office price or availability edits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItemUpdate {
    pub price_cents: Option<i64>,
    pub available: Option<bool>,
}

/// Listing predicate: one restaurant's menu, optionally only what the diner
/// can currently order.
#[derive(Debug, Clone, Copy)]
pub struct MenuFilter {
    pub restaurant: RestaurantId,
    pub available_only: bool,
}
