//! # Service Call Actor
//!
//! The "call server" / "request bill" side channel, keyed by restaurant and
//! table. Deliberately independent of the order machine: raising or
//! acknowledging a call never touches order state.

pub mod entity;
pub mod error;

pub use entity::ServiceCallAction;
pub use error::*;

use crate::clients::ServiceClient;
use crate::model::ServiceCall;
use comanda_actor::RegistryActor;

/// Creates a new ServiceCall actor and its client.
pub fn new(buffer_size: usize) -> (RegistryActor<ServiceCall>, ServiceClient) {
    let (actor, generic_client) = RegistryActor::new(buffer_size);
    (actor, ServiceClient::new(generic_client))
}
