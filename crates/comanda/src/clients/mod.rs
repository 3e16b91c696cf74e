//! Typed clients, one per actor. Registry-backed resources get `get`,
//! `select`, and `delete` through [`comanda_actor::EntityClient`]; the board
//! client is bespoke because the order lifecycle is not CRUD.

pub mod menu_client;
pub mod order_client;
pub mod restaurant_client;
pub mod service_client;

pub use menu_client::MenuClient;
pub use order_client::OrderClient;
pub use restaurant_client::RestaurantClient;
pub use service_client::ServiceClient;
