//! Derived views over the live order collection.
//!
//! These are pure read-only projections, recomputed per request and never
//! stored. Each carries full order snapshots so screens can render without a
//! second round trip.

use crate::model::{Order, OrderId};
use std::collections::BTreeMap;

/// Kitchen-facing columnar view. Every live order of the restaurant appears
/// in exactly one column (see `OrderStatus::kitchen_column`).
#[derive(Debug, Clone, Default)]
pub struct KitchenBoard {
    pub pending: Vec<Order>,
    pub preparing: Vec<Order>,
    pub ready: Vec<Order>,
    pub completed: Vec<Order>,
}

impl KitchenBoard {
    pub fn total(&self) -> usize {
        self.pending.len() + self.preparing.len() + self.ready.len() + self.completed.len()
    }
}

/// Server-facing floor view: dine-in orders only, grouped by table number.
/// `BTreeMap` keeps tables in numeric order for the dashboard.
#[derive(Debug, Clone, Default)]
pub struct FloorView {
    pub tables: BTreeMap<u32, Vec<Order>>,
}

/// Delivery-staff board: delivery orders partitioned by leg. Settled orders
/// drop off the board entirely.
#[derive(Debug, Clone, Default)]
pub struct DeliveryBoard {
    pub ready_for_driver: Vec<Order>,
    pub out_for_delivery: Vec<Order>,
    pub delivered: Vec<Order>,
}

/// Diner-facing tracker for a single order: a 4-step visual progress plus the
/// preparation countdown.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerView {
    pub order: OrderId,
    /// 1 = received, 2 = preparing, 3 = on route, 4 = served.
    pub step: u8,
    /// Milliseconds until the kitchen's estimate elapses, clamped at zero.
    /// `None` before the kitchen has accepted.
    pub countdown_ms: Option<i64>,
    /// True once the countdown has hit zero ("arriving now").
    pub arriving_now: bool,
}
