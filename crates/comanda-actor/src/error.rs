//! # Registry Errors
//!
//! Common error types used throughout the registry toolkit. Centralizing the
//! envelope type keeps error handling consistent across all actors and clients.

/// Errors that can occur within the registry machinery itself.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    Entity(Box<dyn std::error::Error + Send + Sync>),
}
