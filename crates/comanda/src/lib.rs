//! # Comanda Platform Library
//!
//! Multi-tenant restaurant order lifecycle: tenant and menu registries, the
//! order board state machine, service calls, payments, and persistence.

pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_board;
pub mod payment;
pub mod persistence;
pub mod restaurant_actor;
pub mod service_actor;
