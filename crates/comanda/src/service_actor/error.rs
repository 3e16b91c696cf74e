//! Error types for the ServiceCall actor.

use thiserror::Error;

/// Errors that can occur on the service-call side channel.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// The requested call was not found.
    #[error("Service call not found: {0}")]
    NotFound(String),

    /// The call data provided is invalid.
    #[error("Service call validation error: {0}")]
    Validation(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunication(String),
}

impl From<String> for ServiceError {
    fn from(msg: String) -> Self {
        ServiceError::ActorCommunication(msg)
    }
}
