//! Order domain model: the one entity with lifecycle complexity.
//!
//! An [`Order`] moves forward along a fixed status sequence and never
//! regresses, so concurrent readers (kitchen board, floor view, delivery
//! board) never observe an order going backward. The closed [`OrderStatus`]
//! enum replaces the loose status strings of typical front-ends with
//! compiler-checked exhaustive handling of every transition and filter.

use crate::model::{MenuItemId, RestaurantId};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// How the order is fulfilled. Fixed at creation, never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    DineIn,
    Takeaway,
    Delivery,
}

/// Lifecycle states, in forward order. Transitions only increase
/// [`rank`](OrderStatus::rank); there are no backward edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    /// Placed, awaiting acknowledgement by the restaurant.
    Pending,
    /// Acknowledged by the restaurant, not yet accepted by the kitchen.
    Received,
    /// Kitchen accepted and is preparing; `accepted_at` is set here.
    Preparing,
    /// Ready: plated for service, or awaiting a courier for delivery orders.
    OnRoute,
    /// A courier is carrying the order (delivery only).
    OutForDelivery,
    /// Delivered to the table (dine-in / takeaway pickup).
    Served,
    /// Dropped off by the courier (delivery only).
    Delivered,
    /// Terminal. Reached through payment or the stalled-order timeout.
    Completed,
}

/// Kitchen board columns. Every status maps to exactly one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KitchenColumn {
    Pending,
    Preparing,
    Ready,
    Completed,
}

impl OrderStatus {
    /// Position in the forward sequence. Transitions must strictly increase
    /// this value (settling an already-Completed order is the one rank-equal
    /// move, on the payment axis).
    pub fn rank(self) -> u8 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Received => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::OnRoute => 3,
            OrderStatus::OutForDelivery => 4,
            OrderStatus::Served => 5,
            OrderStatus::Delivered => 6,
            OrderStatus::Completed => 7,
        }
    }

    /// The kitchen board column this status belongs to.
    pub fn kitchen_column(self) -> KitchenColumn {
        match self {
            OrderStatus::Pending => KitchenColumn::Pending,
            OrderStatus::Received | OrderStatus::Preparing => KitchenColumn::Preparing,
            OrderStatus::OnRoute | OrderStatus::OutForDelivery => KitchenColumn::Ready,
            OrderStatus::Served | OrderStatus::Delivered | OrderStatus::Completed => {
                KitchenColumn::Completed
            }
        }
    }

    /// Step (1..=4) in the diner tracker's visual progress
    /// (Received / Preparing / On Route / Served).
    pub fn tracker_step(self) -> u8 {
        match self {
            OrderStatus::Pending | OrderStatus::Received => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::OnRoute | OrderStatus::OutForDelivery => 3,
            OrderStatus::Served | OrderStatus::Delivered | OrderStatus::Completed => 4,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Received => "received",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OnRoute => "on-route",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Served => "served",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// Independent payment axis. An order can auto-complete via the stalled-order
/// timeout while still unpaid; payment settles it separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Unpaid,
    Paid,
}

/// One priced line of an order. The item name and unit price are denormalized
/// from the menu catalog at placement, so later menu edits never change a
/// placed order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item: MenuItemId,
    pub name: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
}

impl OrderLine {
    pub fn subtotal_cents(&self) -> i64 {
        self.quantity as i64 * self.unit_price_cents
    }
}

/// A customer order. Lines and total are immutable after placement; only
/// `status`, `payment`, and the accept-time fields ever change, and the
/// accept-time fields (`prep_minutes`, `accepted_at`) are write-once.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub restaurant: RestaurantId,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub lines: Vec<OrderLine>,
    pub total_cents: i64,
    pub table_number: Option<u32>,
    pub delivery_address: Option<String>,
    pub prep_minutes: Option<u32>,
    pub accepted_at: Option<DateTime<Utc>>,
    pub payment: PaymentStatus,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// Time remaining until the kitchen's own estimate elapses, clamped at
    /// zero. `None` before the kitchen has accepted. Zero means the tracker
    /// shows "arriving now".
    pub fn countdown(&self, now: DateTime<Utc>) -> Option<Duration> {
        let accepted_at = self.accepted_at?;
        let prep_minutes = self.prep_minutes?;
        let due = accepted_at + Duration::minutes(prep_minutes as i64);
        Some((due - now).max(Duration::zero()))
    }
}

/// Payload for placing a new order. Items are references into the owning
/// restaurant's menu; they are resolved to priced [`OrderLine`]s at placement.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub restaurant: RestaurantId,
    pub order_type: OrderType,
    pub items: Vec<(MenuItemId, u32)>,
    pub table_number: Option<u32>,
    pub delivery_address: Option<String>,
}
