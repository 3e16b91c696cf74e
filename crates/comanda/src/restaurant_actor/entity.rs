//! Entity trait implementation for the Restaurant tenant type.

use crate::model::{Restaurant, RestaurantCreate, RestaurantFilter, RestaurantId, RestaurantUpdate};
use crate::restaurant_actor::RestaurantError;
use async_trait::async_trait;
use comanda_actor::Entity;

/// Tenants have no operations beyond CRUD + listing.
#[derive(Debug)]
pub enum RestaurantAction {}

#[async_trait]
impl Entity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = RestaurantAction;
    type ActionResult = ();
    type Filter = RestaurantFilter;
    type Context = ();
    type Error = RestaurantError;

    fn from_create(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(RestaurantError::Validation("name must not be empty".into()));
        }
        Ok(Self {
            id,
            name: params.name,
            active: true,
            auto_acknowledge: params.auto_acknowledge,
        })
    }

    fn matches(&self, filter: &RestaurantFilter) -> bool {
        !filter.active_only || self.active
    }

    async fn on_update(
        &mut self,
        update: RestaurantUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            if name.trim().is_empty() {
                return Err(RestaurantError::Validation("name must not be empty".into()));
            }
            self.name = name;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
        if let Some(auto_acknowledge) = update.auto_acknowledge {
            self.auto_acknowledge = auto_acknowledge;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: RestaurantAction,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_rejects_blank_names() {
        let err = Restaurant::from_create(
            RestaurantId(1),
            RestaurantCreate {
                name: "  ".into(),
                auto_acknowledge: false,
            },
        )
        .unwrap_err();
        assert!(matches!(err, RestaurantError::Validation(_)));
    }

    #[test]
    fn new_tenants_start_active() {
        let restaurant = Restaurant::from_create(
            RestaurantId(1),
            RestaurantCreate {
                name: "Trattoria Cinque".into(),
                auto_acknowledge: true,
            },
        )
        .unwrap();
        assert!(restaurant.active);
        assert!(restaurant.auto_acknowledge);
        assert!(restaurant.matches(&RestaurantFilter { active_only: true }));
    }
}
