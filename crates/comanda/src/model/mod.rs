//! Domain models for the platform: orders, tenants, menus, staff, and the
//! service-call side channel.

pub mod menu;
pub mod order;
pub mod restaurant;
pub mod service;
pub mod staff;

pub use menu::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{
    KitchenColumn, Order, OrderDraft, OrderId, OrderLine, OrderStatus, OrderType, PaymentStatus,
};
pub use restaurant::{
    Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantUpdate,
};
pub use service::{
    ServiceCall, ServiceCallCreate, ServiceCallFilter, ServiceCallId, ServiceCallUpdate,
    ServiceKind,
};
pub use staff::{Role, StaffRef};
