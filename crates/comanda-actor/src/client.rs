//! # Generic Registry Client
//!
//! This module defines the generic client for communicating with registry actors.

use crate::entity::Entity;
use crate::error::RegistryError;
use crate::message::RegistryRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe client for interacting with a [`RegistryActor`](crate::RegistryActor).
///
/// The client forwards requests over a Tokio mpsc channel and receives results
/// via oneshot channels. It holds only a sender, so cloning is inexpensive and
/// clones can be shared freely across tasks.
#[derive(Clone)]
pub struct RegistryClient<T: Entity> {
    sender: mpsc::Sender<RegistryRequest<T>>,
}

impl<T: Entity> RegistryClient<T> {
    pub fn new(sender: mpsc::Sender<RegistryRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Create { params, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Get { id, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn select(&self, filter: T::Filter) -> Result<Vec<T>, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Select { filter, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Delete { id, respond_to })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, RegistryError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(RegistryRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| RegistryError::ActorClosed)?;
        response.await.map_err(|_| RegistryError::ActorDropped)?
    }
}
