//! # Comanda
//!
//! Multi-tenant restaurant order platform built on message-passing actors.
//!
//! ## Core Components
//!
//! - **[model]**: Pure data structures ([`Restaurant`](model::Restaurant), [`MenuItem`](model::MenuItem), [`Order`](model::Order)).
//! - **[order_board]**: The order lifecycle state machine and its actor.
//! - **[clients]**: Type-safe wrappers that hide the message passing.
//! - **[lifecycle]**: The [`Platform`](lifecycle::Platform) orchestrator with sweeper and autosave schedulers.
//!
//! The entry point below walks one dine-in order end to end: register a
//! tenant, publish a small menu, place, accept, prepare, serve, and pay.

use std::sync::Arc;

use comanda::config::PlatformConfig;
use comanda::lifecycle::Platform;
use comanda::model::{
    MenuItemCreate, OrderDraft, OrderType, RestaurantCreate, Role, ServiceCallCreate, ServiceKind,
    StaffRef,
};
use comanda::payment::PaymentGateway;
use comanda::persistence::JsonFileStore;
use comanda_actor::tracing::setup_tracing;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting comanda platform");

    let config = PlatformConfig::load();
    let store = Arc::new(JsonFileStore::new(&config.snapshot_path));
    let platform = Platform::start(config, store).await;

    // Tenant and menu setup
    let span = tracing::info_span!("tenant_setup");
    let (restaurant, espresso, tiramisu) = async {
        let restaurant = platform
            .restaurant_client
            .register(RestaurantCreate {
                name: "Trattoria Da Bruno".to_string(),
                auto_acknowledge: false,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(%restaurant, "Tenant registered");

        let espresso = platform
            .menu_client
            .add_item(MenuItemCreate {
                restaurant,
                name: "Espresso".to_string(),
                category: "Drinks".to_string(),
                price_cents: 250,
            })
            .await
            .map_err(|e| e.to_string())?;
        let tiramisu = platform
            .menu_client
            .add_item(MenuItemCreate {
                restaurant,
                name: "Tiramisu".to_string(),
                category: "Desserts".to_string(),
                price_cents: 650,
            })
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>((restaurant, espresso, tiramisu))
    }
    .instrument(span)
    .await?;

    // One dine-in order, end to end
    let kitchen = StaffRef::new(restaurant, Role::Kitchen);
    let server = StaffRef::new(restaurant, Role::Server);

    let span = tracing::info_span!("order_lifecycle");
    async {
        let order_id = platform
            .order_client
            .place(OrderDraft {
                restaurant,
                order_type: OrderType::DineIn,
                items: vec![(espresso, 2), (tiramisu, 1)],
                table_number: Some(5),
                delivery_address: None,
            })
            .await
            .map_err(|e| e.to_string())?;
        info!(order = %order_id, "Order placed for table 5");

        platform
            .order_client
            .accept(order_id, kitchen, 15)
            .await
            .map_err(|e| e.to_string())?;
        platform
            .order_client
            .mark_ready(order_id, kitchen)
            .await
            .map_err(|e| e.to_string())?;
        platform
            .order_client
            .mark_served(order_id, server)
            .await
            .map_err(|e| e.to_string())?;

        let board = platform
            .order_client
            .kitchen_board(restaurant)
            .await
            .map_err(|e| e.to_string())?;
        info!(live = board.total(), "Kitchen board after service");

        let gateway = PaymentGateway::new(platform.order_client.clone());
        let receipt = gateway.pay(order_id).await.map_err(|e| e.to_string())?;
        info!(
            order = %receipt.order,
            amount_cents = receipt.amount_cents,
            "Payment settled"
        );

        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // A diner asks for the bill from the table, the server acknowledges
    let call = platform
        .service_client
        .raise(ServiceCallCreate {
            restaurant,
            table: 5,
            kind: ServiceKind::RequestBill,
        })
        .await
        .map_err(|e| e.to_string())?;
    platform
        .service_client
        .acknowledge(call)
        .await
        .map_err(|e| e.to_string())?;
    info!(%call, "Service call handled");

    platform.shutdown().await?;

    info!("Done");
    Ok(())
}
