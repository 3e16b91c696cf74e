//! # Menu Client
//!
//! High-level API for the menu catalog actor: back-office item management
//! plus the diner-facing menu listing.

use crate::menu_actor::MenuError;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate, RestaurantId};
use async_trait::async_trait;
use comanda_actor::{EntityClient, RegistryClient, RegistryError};
use tracing::{debug, instrument};

/// Client for interacting with the MenuItem actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: RegistryClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: RegistryClient<MenuItem>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl EntityClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &RegistryClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: RegistryError) -> Self::Error {
        MenuError::ActorCommunication(e.to_string())
    }
}

impl MenuClient {
    /// Add a dish to a restaurant's menu.
    #[instrument(skip(self))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Back-office price or availability edit.
    #[instrument(skip(self))]
    pub async fn update_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, MenuError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// One restaurant's menu; `available_only` restricts it to what a diner
    /// can currently order.
    #[instrument(skip(self))]
    pub async fn menu_of(
        &self,
        restaurant: RestaurantId,
        available_only: bool,
    ) -> Result<Vec<MenuItem>, MenuError> {
        self.select(MenuFilter {
            restaurant,
            available_only,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_actor::mock::{create_mock_client, expect_create, expect_get};

    #[tokio::test]
    async fn test_add_item_sends_create_payload() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu_client = MenuClient::new(client);

        let add_task = tokio::spawn(async move {
            menu_client
                .add_item(MenuItemCreate {
                    restaurant: RestaurantId(1),
                    name: "Margherita".to_string(),
                    category: "mains".to_string(),
                    price_cents: 1400,
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.name, "Margherita");
        assert_eq!(payload.price_cents, 1400);
        responder.send(Ok(MenuItemId(1))).unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(result.unwrap(), MenuItemId(1));
    }

    #[tokio::test]
    async fn test_get_maps_registry_failure() {
        let (client, mut receiver) = create_mock_client::<MenuItem>(10);
        let menu_client = MenuClient::new(client);

        let get_task = tokio::spawn(async move { menu_client.get(MenuItemId(7)).await });

        let (id, responder) = expect_get(&mut receiver)
            .await
            .expect("Expected Get request");
        assert_eq!(id, MenuItemId(7));
        responder.send(Err(RegistryError::ActorClosed)).unwrap();

        let result = get_task.await.unwrap();
        assert!(matches!(result, Err(MenuError::ActorCommunication(_))));
    }
}
