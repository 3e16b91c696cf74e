//! Error types for the order lifecycle manager.

use crate::model::{MenuItemId, OrderId, OrderStatus, RestaurantId, Role};
use thiserror::Error;

/// Errors that can occur while placing or advancing orders.
///
/// Every rejection leaves the board unchanged; the caller is responsible for
/// turning these into user-facing feedback.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    /// The requested order does not exist on the live board.
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    /// The requested change is not an allowed forward edge.
    #[error("Invalid transition: {from} -> {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// The acting role is outside the edge's allowed set.
    #[error("Role {role} may not {operation}")]
    RoleNotAllowed { role: Role, operation: &'static str },

    /// Staff of one restaurant tried to mutate another restaurant's order.
    #[error("Staff of {staff} cannot act on an order of {order}")]
    WrongRestaurant {
        staff: RestaurantId,
        order: RestaurantId,
    },

    /// Accepting requires a positive preparation estimate.
    #[error("Preparation time must be positive, got {0}")]
    InvalidPrepTime(u32),

    /// The order was already settled.
    #[error("Order already paid: {0}")]
    AlreadyPaid(OrderId),

    /// The placement payload is malformed (empty items, missing table, …).
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The owning restaurant is not registered.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(RestaurantId),

    /// The owning restaurant is deactivated and takes no orders.
    #[error("Restaurant is inactive: {0}")]
    RestaurantInactive(RestaurantId),

    /// A referenced item is not on the owning restaurant's menu.
    #[error("Unknown menu item: {0}")]
    UnknownMenuItem(MenuItemId),

    /// A referenced item exists but is currently unavailable.
    #[error("Menu item unavailable: {0}")]
    ItemUnavailable(MenuItemId),

    /// A dependency registry (tenant, menu) could not be reached.
    #[error("Registry error: {0}")]
    Registry(String),

    /// The board actor's channel is closed.
    #[error("Actor communication error: {0}")]
    Channel(String),
}
