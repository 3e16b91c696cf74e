//! The order lifecycle state machine.
//!
//! [`OrderBoard`] owns the canonical collection of live orders for all
//! restaurants and is the only place order state is mutated. Every transition
//! method checks the edge's from-states, the acting staff's role, and tenant
//! ownership before touching anything; a rejected request leaves the board
//! (and its revision counter) untouched.
//!
//! The machine is append-only: every edge raises the status rank, so readers
//! computing derived views never observe an order going backward.

use crate::model::{
    Order, OrderDraft, OrderId, OrderLine, OrderStatus, OrderType, PaymentStatus, RestaurantId,
    Role, StaffRef,
};
use crate::order_board::error::LifecycleError;
use crate::order_board::views::{DeliveryBoard, FloorView, KitchenBoard, TrackerView};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// An On Route order untouched for longer than this is assumed forgotten and
/// auto-completed by the sweep. Liveness fallback, not a correctness rule: it
/// only fires forward and never blocks a manual transition that races it.
pub const STALL_TIMEOUT_SECS: i64 = 120;

/// Serializable image of the whole board, used as the opaque persistence blob
/// and for restore-on-startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub orders: Vec<Order>,
    pub archived: Vec<Order>,
    pub next_id: u32,
    pub revision: u64,
}

/// The authoritative in-memory order store.
///
/// Owned exclusively by the board actor; everything here is synchronous and
/// deterministic. Operations that read the clock take `now` as a parameter,
/// which keeps the machine testable with fabricated timestamps.
#[derive(Debug, Default)]
pub struct OrderBoard {
    orders: BTreeMap<OrderId, Order>,
    archived: Vec<Order>,
    next_id: u32,
    revision: u64,
}

impl OrderBoard {
    pub fn new() -> Self {
        Self {
            orders: BTreeMap::new(),
            archived: Vec::new(),
            next_id: 1,
            revision: 0,
        }
    }

    /// Monotonic counter bumped by every successful mutation. The autosaver
    /// compares it against the last persisted value to skip no-op writes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of orders still on the live board.
    pub fn live_count(&self) -> usize {
        self.orders.len()
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    // --- Placement ---

    /// Places a pre-priced order. `lines` must already be resolved against
    /// the menu catalog; `entry` is `Pending` or `Received` depending on the
    /// tenant's auto-acknowledge setting.
    pub fn place(
        &mut self,
        draft: &OrderDraft,
        lines: Vec<OrderLine>,
        entry: OrderStatus,
        now: DateTime<Utc>,
    ) -> Result<OrderId, LifecycleError> {
        debug_assert!(matches!(
            entry,
            OrderStatus::Pending | OrderStatus::Received
        ));
        if lines.is_empty() {
            return Err(LifecycleError::Validation("order has no items".into()));
        }
        if let Some(line) = lines.iter().find(|l| l.quantity == 0) {
            return Err(LifecycleError::Validation(format!(
                "zero quantity for {}",
                line.item
            )));
        }
        match draft.order_type {
            OrderType::DineIn if draft.table_number.is_none() => {
                return Err(LifecycleError::Validation(
                    "dine-in order needs a table number".into(),
                ));
            }
            OrderType::Delivery if draft.delivery_address.is_none() => {
                return Err(LifecycleError::Validation(
                    "delivery order needs an address".into(),
                ));
            }
            _ => {}
        }

        let id = OrderId::from(self.next_id);
        self.next_id += 1;
        let total_cents = lines.iter().map(OrderLine::subtotal_cents).sum();

        let order = Order {
            id,
            restaurant: draft.restaurant,
            order_type: draft.order_type,
            status: entry,
            lines,
            total_cents,
            table_number: draft.table_number,
            delivery_address: draft.delivery_address.clone(),
            prep_minutes: None,
            accepted_at: None,
            payment: PaymentStatus::Unpaid,
            placed_at: now,
        };
        info!(
            order = %id,
            restaurant = %order.restaurant,
            status = %entry,
            total_cents,
            "Order placed"
        );
        self.orders.insert(id, order);
        self.revision += 1;
        Ok(id)
    }

    // --- Guarded transitions ---

    /// Kitchen accepts the order and commits to a preparation estimate.
    /// Sets `accepted_at`, the origin for the countdown and the stall sweep.
    pub fn accept(
        &mut self,
        id: OrderId,
        staff: StaffRef,
        prep_minutes: u32,
        now: DateTime<Utc>,
    ) -> Result<Order, LifecycleError> {
        if prep_minutes == 0 {
            return Err(LifecycleError::InvalidPrepTime(prep_minutes));
        }
        let order = self.guarded(
            id,
            staff,
            &[Role::Kitchen, Role::Admin],
            "accept",
            &[OrderStatus::Pending, OrderStatus::Received],
            OrderStatus::Preparing,
        )?;
        order.prep_minutes = Some(prep_minutes);
        order.accepted_at = Some(now);
        let order = order.clone();
        self.log_transition(&order, "accepted");
        Ok(order)
    }

    /// Kitchen marks the order plated / ready for handoff.
    pub fn mark_ready(&mut self, id: OrderId, staff: StaffRef) -> Result<Order, LifecycleError> {
        let order = self
            .guarded(
                id,
                staff,
                &[Role::Kitchen, Role::Admin],
                "mark ready",
                &[OrderStatus::Preparing],
                OrderStatus::OnRoute,
            )?
            .clone();
        self.log_transition(&order, "ready");
        Ok(order)
    }

    /// Server confirms the order reached the table. Not a delivery edge;
    /// delivery orders leave On Route through `start_delivery`.
    pub fn mark_served(&mut self, id: OrderId, staff: StaffRef) -> Result<Order, LifecycleError> {
        let current = self.order(id)?;
        if current.order_type == OrderType::Delivery {
            return Err(LifecycleError::InvalidTransition {
                from: current.status,
                to: OrderStatus::Served,
            });
        }
        let order = self
            .guarded(
                id,
                staff,
                &[Role::Server, Role::Admin],
                "mark served",
                &[OrderStatus::OnRoute],
                OrderStatus::Served,
            )?
            .clone();
        self.log_transition(&order, "served");
        Ok(order)
    }

    /// Courier picks the order up and starts the run (delivery orders only).
    pub fn start_delivery(
        &mut self,
        id: OrderId,
        staff: StaffRef,
    ) -> Result<Order, LifecycleError> {
        let current = self.order(id)?;
        if current.order_type != OrderType::Delivery {
            return Err(LifecycleError::InvalidTransition {
                from: current.status,
                to: OrderStatus::OutForDelivery,
            });
        }
        let order = self
            .guarded(
                id,
                staff,
                &[Role::Courier, Role::Admin],
                "start delivery",
                &[OrderStatus::OnRoute],
                OrderStatus::OutForDelivery,
            )?
            .clone();
        self.log_transition(&order, "out for delivery");
        Ok(order)
    }

    /// Courier confirms the drop-off.
    pub fn mark_delivered(
        &mut self,
        id: OrderId,
        staff: StaffRef,
    ) -> Result<Order, LifecycleError> {
        let order = self
            .guarded(
                id,
                staff,
                &[Role::Courier, Role::Admin],
                "mark delivered",
                &[OrderStatus::OutForDelivery],
                OrderStatus::Delivered,
            )?
            .clone();
        self.log_transition(&order, "delivered");
        Ok(order)
    }

    /// Payment success: settles the order. Sets the terminal status and flips
    /// the independent payment axis. Triggered by the payment flow, so there
    /// is no staff guard; the only precondition is that the order is unpaid
    /// and far enough along.
    pub fn settle_payment(&mut self, id: OrderId) -> Result<Order, LifecycleError> {
        let order = self.order_mut(id)?;
        if order.payment == PaymentStatus::Paid {
            return Err(LifecycleError::AlreadyPaid(id));
        }
        match order.status {
            OrderStatus::Served | OrderStatus::Delivered | OrderStatus::Completed => {}
            from => {
                return Err(LifecycleError::InvalidTransition {
                    from,
                    to: OrderStatus::Completed,
                });
            }
        }
        order.status = OrderStatus::Completed;
        order.payment = PaymentStatus::Paid;
        let order = order.clone();
        self.revision += 1;
        info!(order = %id, total_cents = order.total_cents, "Payment settled");
        Ok(order)
    }

    // --- Timer sweep ---

    /// Completes every On Route order whose kitchen acceptance is older than
    /// [`STALL_TIMEOUT_SECS`]. Idempotent: completed orders are no longer On
    /// Route, so a re-sweep is a no-op. Payment stays untouched.
    pub fn sweep_timeouts(&mut self, now: DateTime<Utc>) -> Vec<OrderId> {
        let mut timed_out = Vec::new();
        for order in self.orders.values_mut() {
            if order.status != OrderStatus::OnRoute {
                continue;
            }
            let stalled = order
                .accepted_at
                .is_some_and(|accepted| now - accepted > Duration::seconds(STALL_TIMEOUT_SECS));
            if stalled {
                order.status = OrderStatus::Completed;
                warn!(order = %order.id, "Stalled on-route order auto-completed");
                timed_out.push(order.id);
            }
        }
        if !timed_out.is_empty() {
            self.revision += 1;
        }
        timed_out
    }

    // --- Derived views ---

    /// Kitchen board for one restaurant. Exhaustive column mapping: every
    /// live order lands in exactly one column.
    pub fn kitchen_board(&self, restaurant: RestaurantId) -> KitchenBoard {
        let mut board = KitchenBoard::default();
        for order in self.of_restaurant(restaurant) {
            use crate::model::KitchenColumn;
            match order.status.kitchen_column() {
                KitchenColumn::Pending => board.pending.push(order.clone()),
                KitchenColumn::Preparing => board.preparing.push(order.clone()),
                KitchenColumn::Ready => board.ready.push(order.clone()),
                KitchenColumn::Completed => board.completed.push(order.clone()),
            }
        }
        board
    }

    /// Floor view for one restaurant: dine-in orders grouped by table.
    pub fn floor_view(&self, restaurant: RestaurantId) -> FloorView {
        let mut view = FloorView::default();
        for order in self.of_restaurant(restaurant) {
            if order.order_type != OrderType::DineIn {
                continue;
            }
            // Placement guarantees dine-in orders carry a table number.
            if let Some(table) = order.table_number {
                view.tables.entry(table).or_default().push(order.clone());
            }
        }
        view
    }

    /// Delivery board for one restaurant, partitioned by leg.
    pub fn delivery_board(&self, restaurant: RestaurantId) -> DeliveryBoard {
        let mut board = DeliveryBoard::default();
        for order in self.of_restaurant(restaurant) {
            if order.order_type != OrderType::Delivery {
                continue;
            }
            match order.status {
                OrderStatus::OnRoute => board.ready_for_driver.push(order.clone()),
                OrderStatus::OutForDelivery => board.out_for_delivery.push(order.clone()),
                OrderStatus::Delivered => board.delivered.push(order.clone()),
                _ => {}
            }
        }
        board
    }

    /// Diner tracker for a single order.
    pub fn track(&self, id: OrderId, now: DateTime<Utc>) -> Result<TrackerView, LifecycleError> {
        let order = self.order(id)?;
        let countdown = order.countdown(now);
        Ok(TrackerView {
            order: id,
            step: order.status.tracker_step(),
            countdown_ms: countdown.map(|d| d.num_milliseconds()),
            arriving_now: countdown.is_some_and(|d| d.is_zero()),
        })
    }

    // --- Archiving & persistence ---

    /// Moves settled (`Completed`) orders off the live board into the
    /// archive. This is the only way an order leaves the live collection;
    /// orders are never deleted.
    pub fn archive_settled(&mut self) -> usize {
        let settled: Vec<OrderId> = self
            .orders
            .values()
            .filter(|o| o.status == OrderStatus::Completed)
            .map(|o| o.id)
            .collect();
        for id in &settled {
            if let Some(order) = self.orders.remove(id) {
                self.archived.push(order);
            }
        }
        if !settled.is_empty() {
            self.revision += 1;
            info!(count = settled.len(), "Archived settled orders");
        }
        settled.len()
    }

    /// Full serializable image of the board.
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            orders: self.orders.values().cloned().collect(),
            archived: self.archived.clone(),
            next_id: self.next_id,
            revision: self.revision,
        }
    }

    /// Replaces the board's contents with a snapshot. Fresh ids continue
    /// beyond the restored maximum even if the snapshot's counter lags.
    pub fn restore(&mut self, snapshot: BoardSnapshot) {
        let max_seen = snapshot
            .orders
            .iter()
            .chain(snapshot.archived.iter())
            .map(|o| o.id.0)
            .max()
            .unwrap_or(0);
        self.orders = snapshot.orders.into_iter().map(|o| (o.id, o)).collect();
        self.archived = snapshot.archived;
        self.next_id = snapshot.next_id.max(max_seen + 1);
        self.revision = snapshot.revision;
        info!(
            live = self.orders.len(),
            archived = self.archived.len(),
            "Board restored from snapshot"
        );
    }

    // --- Internals ---

    fn order(&self, id: OrderId) -> Result<&Order, LifecycleError> {
        self.orders.get(&id).ok_or(LifecycleError::NotFound(id))
    }

    fn order_mut(&mut self, id: OrderId) -> Result<&mut Order, LifecycleError> {
        self.orders.get_mut(&id).ok_or(LifecycleError::NotFound(id))
    }

    fn of_restaurant(&self, restaurant: RestaurantId) -> impl Iterator<Item = &Order> {
        self.orders
            .values()
            .filter(move |o| o.restaurant == restaurant)
    }

    /// Common gate for staff transitions: order exists, staff belongs to the
    /// order's restaurant, role is in the edge's set, and the current status
    /// is one of the edge's from-states. On success the status is advanced
    /// and the revision bumped.
    fn guarded(
        &mut self,
        id: OrderId,
        staff: StaffRef,
        allowed: &[Role],
        operation: &'static str,
        from: &[OrderStatus],
        to: OrderStatus,
    ) -> Result<&mut Order, LifecycleError> {
        let order = self.orders.get_mut(&id).ok_or(LifecycleError::NotFound(id))?;
        if staff.restaurant != order.restaurant {
            return Err(LifecycleError::WrongRestaurant {
                staff: staff.restaurant,
                order: order.restaurant,
            });
        }
        if !allowed.contains(&staff.role) {
            return Err(LifecycleError::RoleNotAllowed {
                role: staff.role,
                operation,
            });
        }
        if !from.contains(&order.status) {
            return Err(LifecycleError::InvalidTransition {
                from: order.status,
                to,
            });
        }
        order.status = to;
        self.revision += 1;
        Ok(order)
    }

    fn log_transition(&self, order: &Order, what: &str) {
        info!(order = %order.id, status = %order.status, "Order {what}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItemId;
    use chrono::TimeZone;

    const R1: RestaurantId = RestaurantId(1);
    const R2: RestaurantId = RestaurantId(2);

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn kitchen(r: RestaurantId) -> StaffRef {
        StaffRef::new(r, Role::Kitchen)
    }

    fn server(r: RestaurantId) -> StaffRef {
        StaffRef::new(r, Role::Server)
    }

    fn courier(r: RestaurantId) -> StaffRef {
        StaffRef::new(r, Role::Courier)
    }

    fn lines() -> Vec<OrderLine> {
        vec![
            OrderLine {
                item: MenuItemId(1),
                name: "Margherita".into(),
                quantity: 1,
                unit_price_cents: 1400,
            },
            OrderLine {
                item: MenuItemId(2),
                name: "Tiramisu".into(),
                quantity: 1,
                unit_price_cents: 1250,
            },
        ]
    }

    fn dine_in_draft(table: u32) -> OrderDraft {
        OrderDraft {
            restaurant: R1,
            order_type: OrderType::DineIn,
            items: vec![(MenuItemId(1), 1), (MenuItemId(2), 1)],
            table_number: Some(table),
            delivery_address: None,
        }
    }

    fn delivery_draft() -> OrderDraft {
        OrderDraft {
            restaurant: R1,
            order_type: OrderType::Delivery,
            items: vec![(MenuItemId(1), 1), (MenuItemId(2), 1)],
            table_number: None,
            delivery_address: Some("12 Via Roma".into()),
        }
    }

    fn place_dine_in(board: &mut OrderBoard, table: u32) -> OrderId {
        board
            .place(&dine_in_draft(table), lines(), OrderStatus::Pending, t0())
            .unwrap()
    }

    fn place_delivery(board: &mut OrderBoard) -> OrderId {
        board
            .place(&delivery_draft(), lines(), OrderStatus::Pending, t0())
            .unwrap()
    }

    #[test]
    fn dine_in_order_walks_the_full_lifecycle() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);

        let placed = board.get(id).unwrap();
        assert_eq!(placed.status, OrderStatus::Pending);
        assert_eq!(placed.total_cents, 2650);
        assert_eq!(placed.table_number, Some(5));
        assert_eq!(placed.payment, PaymentStatus::Unpaid);

        let accepted = board.accept(id, kitchen(R1), 15, t0()).unwrap();
        assert_eq!(accepted.status, OrderStatus::Preparing);
        assert_eq!(accepted.prep_minutes, Some(15));
        assert_eq!(accepted.accepted_at, Some(t0()));

        let ready = board.mark_ready(id, kitchen(R1)).unwrap();
        assert_eq!(ready.status, OrderStatus::OnRoute);

        let served = board.mark_served(id, server(R1)).unwrap();
        assert_eq!(served.status, OrderStatus::Served);

        let settled = board.settle_payment(id).unwrap();
        assert_eq!(settled.status, OrderStatus::Completed);
        assert_eq!(settled.payment, PaymentStatus::Paid);
    }

    #[test]
    fn entry_at_received_still_accepts() {
        let mut board = OrderBoard::new();
        let id = board
            .place(&dine_in_draft(3), lines(), OrderStatus::Received, t0())
            .unwrap();
        assert_eq!(board.get(id).unwrap().status, OrderStatus::Received);
        let accepted = board.accept(id, kitchen(R1), 10, t0()).unwrap();
        assert_eq!(accepted.status, OrderStatus::Preparing);
    }

    #[test]
    fn skip_level_and_backward_requests_are_rejected_without_mutation() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);
        let revision = board.revision();

        // Skip: serving a Pending order.
        let err = board.mark_served(id, server(R1)).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
        assert_eq!(board.get(id).unwrap().status, OrderStatus::Pending);
        assert_eq!(board.revision(), revision);

        // Backward: re-accepting once past Preparing.
        board.accept(id, kitchen(R1), 10, t0()).unwrap();
        board.mark_ready(id, kitchen(R1)).unwrap();
        let err = board.accept(id, kitchen(R1), 10, t0()).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::InvalidTransition {
                from: OrderStatus::OnRoute,
                to: OrderStatus::Preparing,
            }
        ));
        assert_eq!(board.get(id).unwrap().status, OrderStatus::OnRoute);
    }

    #[test]
    fn role_and_tenant_guards_reject_without_mutation() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);
        let revision = board.revision();

        // Server cannot accept.
        let err = board.accept(id, server(R1), 10, t0()).unwrap_err();
        assert!(matches!(err, LifecycleError::RoleNotAllowed { .. }));

        // Staff of another restaurant cannot act at all, whatever the role.
        let err = board.accept(id, kitchen(R2), 10, t0()).unwrap_err();
        assert!(matches!(err, LifecycleError::WrongRestaurant { .. }));

        let order = board.get(id).unwrap();
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.accepted_at, None);
        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn accept_requires_positive_prep_time() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);
        let err = board.accept(id, kitchen(R1), 0, t0()).unwrap_err();
        assert_eq!(err, LifecycleError::InvalidPrepTime(0));
        assert_eq!(board.get(id).unwrap().status, OrderStatus::Pending);
    }

    #[test]
    fn delivery_orders_take_the_delivery_edges() {
        let mut board = OrderBoard::new();
        let id = place_delivery(&mut board);
        board.accept(id, kitchen(R1), 20, t0()).unwrap();
        board.mark_ready(id, kitchen(R1)).unwrap();

        // A delivery order cannot be served at a table.
        let err = board.mark_served(id, server(R1)).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

        let out = board.start_delivery(id, courier(R1)).unwrap();
        assert_eq!(out.status, OrderStatus::OutForDelivery);

        let dropped = board.mark_delivered(id, courier(R1)).unwrap();
        assert_eq!(dropped.status, OrderStatus::Delivered);

        let settled = board.settle_payment(id).unwrap();
        assert_eq!(settled.payment, PaymentStatus::Paid);
    }

    #[test]
    fn dine_in_orders_cannot_start_a_delivery_run() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);
        board.accept(id, kitchen(R1), 10, t0()).unwrap();
        board.mark_ready(id, kitchen(R1)).unwrap();

        let err = board.start_delivery(id, courier(R1)).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));
        assert_eq!(board.get(id).unwrap().status, OrderStatus::OnRoute);
    }

    #[test]
    fn settle_rejects_unpaid_precondition_and_early_orders() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);

        // Too early: nothing to settle while still Pending.
        let err = board.settle_payment(id).unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidTransition { .. }));

        board.accept(id, kitchen(R1), 10, t0()).unwrap();
        board.mark_ready(id, kitchen(R1)).unwrap();
        board.mark_served(id, server(R1)).unwrap();
        board.settle_payment(id).unwrap();

        // Double payment is rejected.
        let err = board.settle_payment(id).unwrap_err();
        assert_eq!(err, LifecycleError::AlreadyPaid(id));
    }

    #[test]
    fn auto_timeout_completes_stalled_on_route_orders_once() {
        let mut board = OrderBoard::new();
        let stalled = place_delivery(&mut board);
        board.accept(stalled, kitchen(R1), 20, t0()).unwrap();
        board.mark_ready(stalled, kitchen(R1)).unwrap();

        // A second order that is out with a courier must not be swept.
        let moving = place_delivery(&mut board);
        board.accept(moving, kitchen(R1), 20, t0()).unwrap();
        board.mark_ready(moving, kitchen(R1)).unwrap();
        board.start_delivery(moving, courier(R1)).unwrap();

        // 119 s elapsed: under the threshold, nothing fires.
        let swept = board.sweep_timeouts(t0() + Duration::seconds(119));
        assert!(swept.is_empty());
        assert_eq!(board.get(stalled).unwrap().status, OrderStatus::OnRoute);

        // 125 s elapsed: the stalled order completes, payment untouched.
        let swept = board.sweep_timeouts(t0() + Duration::seconds(125));
        assert_eq!(swept, vec![stalled]);
        let order = board.get(stalled).unwrap();
        assert_eq!(order.status, OrderStatus::Completed);
        assert_eq!(order.payment, PaymentStatus::Unpaid);
        assert_eq!(
            board.get(moving).unwrap().status,
            OrderStatus::OutForDelivery
        );

        // Re-sweeping is a no-op, revision included.
        let revision = board.revision();
        let swept = board.sweep_timeouts(t0() + Duration::seconds(300));
        assert!(swept.is_empty());
        assert_eq!(board.revision(), revision);
    }

    #[test]
    fn every_live_order_appears_in_exactly_one_kitchen_column() {
        let mut board = OrderBoard::new();
        let a = place_dine_in(&mut board, 1);
        let b = place_dine_in(&mut board, 2);
        let c = place_delivery(&mut board);
        board.accept(b, kitchen(R1), 10, t0()).unwrap();
        board.accept(c, kitchen(R1), 10, t0()).unwrap();
        board.mark_ready(c, kitchen(R1)).unwrap();

        // An order of another restaurant must not leak in.
        let mut foreign = dine_in_draft(9);
        foreign.restaurant = R2;
        board
            .place(&foreign, lines(), OrderStatus::Pending, t0())
            .unwrap();

        let view = board.kitchen_board(R1);
        assert_eq!(view.total(), 3);
        assert_eq!(view.pending.len(), 1);
        assert_eq!(view.pending[0].id, a);
        assert_eq!(view.preparing.len(), 1);
        assert_eq!(view.preparing[0].id, b);
        assert_eq!(view.ready.len(), 1);
        assert_eq!(view.ready[0].id, c);
        assert!(view.completed.is_empty());
    }

    #[test]
    fn floor_view_groups_dine_in_orders_by_table() {
        let mut board = OrderBoard::new();
        let a = place_dine_in(&mut board, 5);
        let b = place_dine_in(&mut board, 5);
        let c = place_dine_in(&mut board, 2);
        place_delivery(&mut board); // no table, must not appear

        let view = board.floor_view(R1);
        assert_eq!(view.tables.len(), 2);
        assert_eq!(
            view.tables[&5].iter().map(|o| o.id).collect::<Vec<_>>(),
            vec![a, b]
        );
        assert_eq!(view.tables[&2][0].id, c);

        // Every dine-in order is in exactly one cell.
        let total: usize = view.tables.values().map(Vec::len).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn delivery_board_partitions_by_leg_and_drops_settled() {
        let mut board = OrderBoard::new();
        let ready = place_delivery(&mut board);
        let out = place_delivery(&mut board);
        let done = place_delivery(&mut board);
        for id in [ready, out, done] {
            board.accept(id, kitchen(R1), 10, t0()).unwrap();
            board.mark_ready(id, kitchen(R1)).unwrap();
        }
        board.start_delivery(out, courier(R1)).unwrap();
        board.start_delivery(done, courier(R1)).unwrap();
        board.mark_delivered(done, courier(R1)).unwrap();

        let view = board.delivery_board(R1);
        assert_eq!(view.ready_for_driver[0].id, ready);
        assert_eq!(view.out_for_delivery[0].id, out);
        assert_eq!(view.delivered[0].id, done);

        // Settled orders leave the board.
        board.settle_payment(done).unwrap();
        let view = board.delivery_board(R1);
        assert!(view.delivered.is_empty());
    }

    #[test]
    fn tracker_reports_step_and_clamped_countdown() {
        let mut board = OrderBoard::new();
        let id = place_dine_in(&mut board, 5);

        let view = board.track(id, t0()).unwrap();
        assert_eq!(view.step, 1);
        assert_eq!(view.countdown_ms, None);
        assert!(!view.arriving_now);

        board.accept(id, kitchen(R1), 15, t0()).unwrap();
        let view = board.track(id, t0() + Duration::minutes(5)).unwrap();
        assert_eq!(view.step, 2);
        assert_eq!(view.countdown_ms, Some(10 * 60 * 1000));

        board.mark_ready(id, kitchen(R1)).unwrap();
        let view = board.track(id, t0() + Duration::minutes(20)).unwrap();
        assert_eq!(view.step, 3);
        assert_eq!(view.countdown_ms, Some(0));
        assert!(view.arriving_now);

        board.mark_served(id, server(R1)).unwrap();
        let view = board.track(id, t0() + Duration::minutes(20)).unwrap();
        assert_eq!(view.step, 4);
    }

    #[test]
    fn archive_moves_only_settled_orders_off_the_live_board() {
        let mut board = OrderBoard::new();
        let live = place_dine_in(&mut board, 1);
        let done = place_dine_in(&mut board, 2);
        board.accept(done, kitchen(R1), 10, t0()).unwrap();
        board.mark_ready(done, kitchen(R1)).unwrap();
        board.mark_served(done, server(R1)).unwrap();
        board.settle_payment(done).unwrap();

        assert_eq!(board.archive_settled(), 1);
        assert_eq!(board.live_count(), 1);
        assert!(board.get(live).is_some());
        assert!(board.get(done).is_none());

        // Archived orders survive in the snapshot.
        let snapshot = board.snapshot();
        assert_eq!(snapshot.archived.len(), 1);
        assert_eq!(snapshot.archived[0].id, done);
    }

    #[test]
    fn restore_continues_ids_beyond_the_snapshot_maximum() {
        let mut board = OrderBoard::new();
        place_dine_in(&mut board, 1);
        let last = place_dine_in(&mut board, 2);
        let snapshot = board.snapshot();

        let mut restored = OrderBoard::new();
        restored.restore(snapshot);
        assert_eq!(restored.live_count(), 2);
        assert_eq!(restored.get(last).unwrap().table_number, Some(2));

        let next = place_dine_in(&mut restored, 3);
        assert!(next.0 > last.0);
    }

    #[test]
    fn placement_validates_items_and_destination() {
        let mut board = OrderBoard::new();

        let err = board
            .place(&dine_in_draft(5), vec![], OrderStatus::Pending, t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));

        let mut zero_qty = lines();
        zero_qty[0].quantity = 0;
        let err = board
            .place(&dine_in_draft(5), zero_qty, OrderStatus::Pending, t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));

        let mut no_table = dine_in_draft(5);
        no_table.table_number = None;
        let err = board
            .place(&no_table, lines(), OrderStatus::Pending, t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));

        let mut no_address = delivery_draft();
        no_address.delivery_address = None;
        let err = board
            .place(&no_address, lines(), OrderStatus::Pending, t0())
            .unwrap_err();
        assert!(matches!(err, LifecycleError::Validation(_)));

        assert_eq!(board.live_count(), 0);
        assert_eq!(board.revision(), 0);
    }
}
