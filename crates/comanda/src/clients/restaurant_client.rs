//! # Restaurant Client
//!
//! High-level API for the tenant registry actor, backing the HQ console
//! operations: register, update settings, deactivate, list.

use crate::model::{Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use comanda_actor::{EntityClient, RegistryClient, RegistryError};
use tracing::{debug, instrument};

/// Client for interacting with the Restaurant actor.
#[derive(Clone)]
pub struct RestaurantClient {
    inner: RegistryClient<Restaurant>,
}

impl RestaurantClient {
    pub fn new(inner: RegistryClient<Restaurant>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &RegistryClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        RestaurantError::ActorCommunication(e.to_string())
    }
}

impl RestaurantClient {
    /// Register a new tenant.
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Update tenant settings (name, active flag, auto-acknowledge).
    #[instrument(skip(self))]
    pub async fn update_settings(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, RestaurantError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Deactivate a tenant; its diners can no longer place orders.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, id: RestaurantId) -> Result<Restaurant, RestaurantError> {
        self.update_settings(
            id,
            RestaurantUpdate {
                name: None,
                active: Some(false),
                auto_acknowledge: None,
            },
        )
        .await
    }

    /// List active tenants for the HQ console.
    #[instrument(skip(self))]
    pub async fn list_active(&self) -> Result<Vec<Restaurant>, RestaurantError> {
        self.select(RestaurantFilter { active_only: true }).await
    }
}
