//! Entity trait implementation for the ServiceCall side channel.

use crate::model::{
    ServiceCall, ServiceCallCreate, ServiceCallFilter, ServiceCallId, ServiceCallUpdate,
};
use crate::service_actor::ServiceError;
use async_trait::async_trait;
use chrono::Utc;
use comanda_actor::Entity;

/// Service calls have no operations beyond raise + acknowledge + listing.
#[derive(Debug)]
pub enum ServiceCallAction {}

#[async_trait]
impl Entity for ServiceCall {
    type Id = ServiceCallId;
    type Create = ServiceCallCreate;
    type Update = ServiceCallUpdate;
    type Action = ServiceCallAction;
    type ActionResult = ();
    type Filter = ServiceCallFilter;
    type Context = ();
    type Error = ServiceError;

    fn from_create(id: ServiceCallId, params: ServiceCallCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            restaurant: params.restaurant,
            table: params.table,
            kind: params.kind,
            raised_at: Utc::now(),
            acknowledged: false,
        })
    }

    fn matches(&self, filter: &ServiceCallFilter) -> bool {
        self.restaurant == filter.restaurant && (!filter.open_only || !self.acknowledged)
    }

    async fn on_update(
        &mut self,
        update: ServiceCallUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(acknowledged) = update.acknowledged {
            self.acknowledged = acknowledged;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ServiceCallAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}
