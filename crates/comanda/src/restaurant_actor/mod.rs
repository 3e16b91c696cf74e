//! # Restaurant Actor
//!
//! The tenant registry behind the platform HQ console. The simplest actor in
//! the system: no dependencies (Context = `()`), no custom actions, plain
//! CRUD plus active-only listings. Order placement consults it for tenant
//! existence, the active flag, and the auto-acknowledge setting.

pub mod entity;
pub mod error;

pub use entity::RestaurantAction;
pub use error::*;

use crate::clients::RestaurantClient;
use crate::model::Restaurant;
use comanda_actor::RegistryActor;

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (RegistryActor<Restaurant>, RestaurantClient) {
    let (actor, generic_client) = RegistryActor::new(buffer_size);
    (actor, RestaurantClient::new(generic_client))
}
