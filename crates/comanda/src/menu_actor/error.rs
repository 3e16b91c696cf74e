//! Error types for the MenuItem actor.

use thiserror::Error;

/// Errors that can occur during menu catalog operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MenuError {
    /// The requested item was not found.
    #[error("Menu item not found: {0}")]
    NotFound(String),

    /// The owning restaurant is not registered.
    #[error("Unknown restaurant: {0}")]
    UnknownRestaurant(String),

    /// The owning restaurant is deactivated.
    #[error("Restaurant is inactive: {0}")]
    RestaurantInactive(String),

    /// The item data provided is invalid.
    #[error("Menu validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for MenuError {
    fn from(msg: String) -> Self {
        MenuError::ActorCommunication(msg)
    }
}
