//! Error types for the Restaurant actor.

use thiserror::Error;

/// Errors that can occur during tenant operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RestaurantError {
    /// The requested restaurant was not found.
    #[error("Restaurant not found: {0}")]
    NotFound(String),

    /// The tenant data provided is invalid.
    #[error("Restaurant validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for RestaurantError {
    fn from(msg: String) -> Self {
        RestaurantError::ActorCommunication(msg)
    }
}
