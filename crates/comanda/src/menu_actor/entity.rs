//! Entity trait implementation for the MenuItem catalog type.
//!
//! Item creation validates the owning tenant through the injected
//! [`RestaurantClient`] in `on_create`, the same late-bound dependency
//! pattern the board actor uses for placement.

use crate::clients::RestaurantClient;
use crate::menu_actor::MenuError;
use crate::model::{MenuFilter, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use comanda_actor::{Entity, EntityClient};

/// Menu items have no operations beyond CRUD + listing.
#[derive(Debug)]
pub enum MenuAction {}

#[async_trait]
impl Entity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = ();
    type Filter = MenuFilter;
    type Context = RestaurantClient;
    type Error = MenuError;

    fn from_create(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(MenuError::Validation("name must not be empty".into()));
        }
        if params.price_cents <= 0 {
            return Err(MenuError::Validation(format!(
                "price must be positive, got {}",
                params.price_cents
            )));
        }
        Ok(Self {
            id,
            restaurant: params.restaurant,
            name: params.name,
            category: params.category,
            price_cents: params.price_cents,
            available: true,
        })
    }

    fn matches(&self, filter: &MenuFilter) -> bool {
        self.restaurant == filter.restaurant && (!filter.available_only || self.available)
    }

    async fn on_create(&mut self, ctx: &RestaurantClient) -> Result<(), Self::Error> {
        let restaurant = ctx
            .get(self.restaurant)
            .await
            .map_err(|e| MenuError::ActorCommunication(e.to_string()))?
            .ok_or_else(|| MenuError::UnknownRestaurant(self.restaurant.to_string()))?;
        if !restaurant.active {
            return Err(MenuError::RestaurantInactive(self.restaurant.to_string()));
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        if let Some(price_cents) = update.price_cents {
            if price_cents <= 0 {
                return Err(MenuError::Validation(format!(
                    "price must be positive, got {price_cents}"
                )));
            }
            self.price_cents = price_cents;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: MenuAction,
        _ctx: &RestaurantClient,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RestaurantId;

    fn create(price_cents: i64) -> MenuItemCreate {
        MenuItemCreate {
            restaurant: RestaurantId(1),
            name: "Margherita".into(),
            category: "mains".into(),
            price_cents,
        }
    }

    #[test]
    fn create_rejects_non_positive_prices() {
        for bad in [0, -100] {
            let err = MenuItem::from_create(MenuItemId(1), create(bad)).unwrap_err();
            assert!(matches!(err, MenuError::Validation(_)));
        }
    }

    #[test]
    fn filter_scopes_by_restaurant_and_availability() {
        let mut item = MenuItem::from_create(MenuItemId(1), create(1400)).unwrap();
        assert!(item.matches(&MenuFilter {
            restaurant: RestaurantId(1),
            available_only: true,
        }));
        assert!(!item.matches(&MenuFilter {
            restaurant: RestaurantId(2),
            available_only: false,
        }));

        item.available = false;
        assert!(!item.matches(&MenuFilter {
            restaurant: RestaurantId(1),
            available_only: true,
        }));
        assert!(item.matches(&MenuFilter {
            restaurant: RestaurantId(1),
            available_only: false,
        }));
    }
}
