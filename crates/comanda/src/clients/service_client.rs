//! # Service Client
//!
//! High-level API for the service-call actor: raise, acknowledge, and list
//! open calls for a restaurant's floor staff.

use crate::model::{
    RestaurantId, ServiceCall, ServiceCallCreate, ServiceCallFilter, ServiceCallId,
    ServiceCallUpdate,
};
use crate::service_actor::ServiceError;
use async_trait::async_trait;
use comanda_actor::{EntityClient, RegistryClient, RegistryError};
use tracing::{debug, instrument};

/// Client for interacting with the ServiceCall actor.
#[derive(Clone)]
pub struct ServiceClient {
    inner: RegistryClient<ServiceCall>,
}

impl ServiceClient {
    pub fn new(inner: RegistryClient<ServiceCall>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<ServiceCall> for ServiceClient {
    type Error = ServiceError;

    fn inner(&self) -> &RegistryClient<ServiceCall> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        ServiceError::ActorCommunication(e.to_string())
    }
}

impl ServiceClient {
    /// Raise a "call server" / "request bill" alert from a table.
    #[instrument(skip(self))]
    pub async fn raise(&self, params: ServiceCallCreate) -> Result<ServiceCallId, ServiceError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Staff acknowledges the call, closing it.
    #[instrument(skip(self))]
    pub async fn acknowledge(&self, id: ServiceCallId) -> Result<ServiceCall, ServiceError> {
        debug!("Sending request");
        self.inner
            .update(
                id,
                ServiceCallUpdate {
                    acknowledged: Some(true),
                },
            )
            .await
            .map_err(Self::map_error)
    }

    /// Open calls for the floor staff's alert strip.
    #[instrument(skip(self))]
    pub async fn open_calls(
        &self,
        restaurant: RestaurantId,
    ) -> Result<Vec<ServiceCall>, ServiceError> {
        self.select(ServiceCallFilter {
            restaurant,
            open_only: true,
        })
        .await
    }
}
