//! # Menu Actor
//!
//! The per-restaurant menu catalog. Demonstrates the context-injection
//! pattern: item creation validates the owning tenant against the Restaurant
//! actor through the `RestaurantClient` supplied to `run()`.
//!
//! ```rust,ignore
//! let (menu_actor, menu_client) = menu_actor::new(32);
//! tokio::spawn(menu_actor.run(restaurant_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use entity::MenuAction;
pub use error::*;

use crate::clients::MenuClient;
use crate::model::MenuItem;
use comanda_actor::RegistryActor;

/// Creates a new MenuItem actor and its client.
pub fn new(buffer_size: usize) -> (RegistryActor<MenuItem>, MenuClient) {
    let (actor, generic_client) = RegistryActor::new(buffer_size);
    (actor, MenuClient::new(generic_client))
}
