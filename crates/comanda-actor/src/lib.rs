//! # Comanda Actor Toolkit
//!
//! Building blocks for the type-safe actor registries that back the Comanda
//! platform. The crate implements a **Resource-Oriented** pattern on top of
//! the **Actor Model**: each managed resource type (Restaurant, MenuItem,
//! ServiceCall) gets its own actor with completely isolated state, and
//! consumers talk to it through a cheap, cloneable typed client.
//!
//! ## Why ROA + Actor Model?
//!
//! - **Resource orientation** gives a predictable lifecycle (Create, Get,
//!   Select, Update, Delete) and a uniform API surface across resource types.
//! - **The actor model** gives isolated state with no shared memory and no
//!   locks: each actor processes messages sequentially in its own Tokio task,
//!   which eliminates data races by construction.
//! - When resources need to interact (e.g. order placement validating a
//!   tenant), they communicate through clients instead of direct coupling.
//!
//! ## Architecture Overview
//!
//! The toolkit separates concerns into three layers:
//!
//! 1. **Entity Layer** ([`Entity`]) - business logic and domain models
//! 2. **Runtime Layer** ([`RegistryActor`]) - message processing and concurrency
//! 3. **Interface Layer** ([`RegistryClient`]) - type-safe communication
//!
//! Business logic is written once in the entity trait; the toolkit handles
//! the async message passing, error envelopes, and state management.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at construction
//! time. This late binding lets an actor depend on clients that are created
//! after it is instantiated:
//!
//! ```rust,ignore
//! // 1. Create all actors (no dependencies yet)
//! let (restaurant_actor, restaurant_client) = RegistryActor::<Restaurant>::new(32);
//! let (menu_actor, menu_client) = RegistryActor::<MenuItem>::new(32);
//!
//! // 2. Wire dependencies when starting actors
//! tokio::spawn(restaurant_actor.run(()));
//! tokio::spawn(menu_actor.run(MenuContext { restaurants: restaurant_client.clone() }));
//! ```
//!
//! ## Testing
//!
//! The [`mock`] module provides a `MockClient` with a fluent expectation API
//! and raw channel helpers, so logic around a client can be unit tested
//! without spawning any actors.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::RegistryActor;
pub use client::RegistryClient;
pub use client_trait::EntityClient;
pub use entity::Entity;
pub use error::RegistryError;
pub use message::{RegistryRequest, Respond};
