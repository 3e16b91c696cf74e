//! Board actor tests with mocked registry clients.
//!
//! These exercise the placement path in isolation: the tenant and menu
//! lookups are scripted through `MockClient`, so no registry actors run.

use comanda::clients::{MenuClient, RestaurantClient};
use comanda::model::{
    MenuItem, MenuItemId, OrderDraft, OrderStatus, OrderType, Restaurant, RestaurantId,
};
use comanda::order_board::actor::BoardContext;
use comanda::order_board::error::LifecycleError;
use comanda_actor::mock::MockClient;

fn trattoria(auto_acknowledge: bool, active: bool) -> Restaurant {
    Restaurant {
        id: RestaurantId(1),
        name: "Trattoria Da Bruno".to_string(),
        active,
        auto_acknowledge,
    }
}

fn menu_item(id: u32, name: &str, price_cents: i64, available: bool) -> MenuItem {
    MenuItem {
        id: MenuItemId(id),
        restaurant: RestaurantId(1),
        name: name.to_string(),
        category: "Mains".to_string(),
        price_cents,
        available,
    }
}

#[tokio::test]
async fn place_prices_lines_from_menu_and_enters_pending() {
    let mut restaurants = MockClient::<Restaurant>::new();
    let mut menu = MockClient::<MenuItem>::new();

    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(trattoria(false, true)));
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, "Lasagna", 1000, true)));
    menu.expect_get(MenuItemId(2))
        .return_ok(Some(menu_item(2, "Tiramisu", 650, true)));

    let (actor, client) = comanda::order_board::new(8);
    tokio::spawn(actor.run(BoardContext {
        restaurants: RestaurantClient::new(restaurants.client()),
        menu: MenuClient::new(menu.client()),
    }));

    let id = client
        .place(OrderDraft {
            restaurant: RestaurantId(1),
            order_type: OrderType::DineIn,
            items: vec![(MenuItemId(1), 2), (MenuItemId(2), 1)],
            table_number: Some(5),
            delivery_address: None,
        })
        .await
        .expect("placement should succeed");

    let order = client.get(id).await.unwrap().expect("order should exist");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.total_cents, 2650);
    assert_eq!(order.table_number, Some(5));
    assert_eq!(order.lines.len(), 2);
    assert_eq!(order.lines[0].name, "Lasagna");

    restaurants.verify();
    menu.verify();
}

#[tokio::test]
async fn place_enters_received_when_tenant_auto_acknowledges() {
    let mut restaurants = MockClient::<Restaurant>::new();
    let mut menu = MockClient::<MenuItem>::new();

    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(trattoria(true, true)));
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, "Lasagna", 1000, true)));

    let (actor, client) = comanda::order_board::new(8);
    tokio::spawn(actor.run(BoardContext {
        restaurants: RestaurantClient::new(restaurants.client()),
        menu: MenuClient::new(menu.client()),
    }));

    let id = client
        .place(OrderDraft {
            restaurant: RestaurantId(1),
            order_type: OrderType::Takeaway,
            items: vec![(MenuItemId(1), 1)],
            table_number: None,
            delivery_address: None,
        })
        .await
        .unwrap();

    let order = client.get(id).await.unwrap().unwrap();
    assert_eq!(order.status, OrderStatus::Received);

    restaurants.verify();
    menu.verify();
}

#[tokio::test]
async fn place_rejects_inactive_restaurant() {
    let mut restaurants = MockClient::<Restaurant>::new();
    let menu = MockClient::<MenuItem>::new();

    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(trattoria(false, false)));

    let (actor, client) = comanda::order_board::new(8);
    tokio::spawn(actor.run(BoardContext {
        restaurants: RestaurantClient::new(restaurants.client()),
        menu: MenuClient::new(menu.client()),
    }));

    let result = client
        .place(OrderDraft {
            restaurant: RestaurantId(1),
            order_type: OrderType::Takeaway,
            items: vec![(MenuItemId(1), 1)],
            table_number: None,
            delivery_address: None,
        })
        .await;

    assert!(matches!(
        result,
        Err(LifecycleError::RestaurantInactive(RestaurantId(1)))
    ));
    assert_eq!(client.live_count().await.unwrap(), 0);

    restaurants.verify();
    menu.verify();
}

#[tokio::test]
async fn place_rejects_unavailable_and_foreign_items() {
    let mut restaurants = MockClient::<Restaurant>::new();
    let mut menu = MockClient::<MenuItem>::new();

    // First placement hits an 86'd item.
    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(trattoria(false, true)));
    menu.expect_get(MenuItemId(1))
        .return_ok(Some(menu_item(1, "Lasagna", 1000, false)));

    // Second placement points at another tenant's item.
    restaurants
        .expect_get(RestaurantId(1))
        .return_ok(Some(trattoria(false, true)));
    let mut foreign = menu_item(2, "Pad Thai", 900, true);
    foreign.restaurant = RestaurantId(7);
    menu.expect_get(MenuItemId(2)).return_ok(Some(foreign));

    let (actor, client) = comanda::order_board::new(8);
    tokio::spawn(actor.run(BoardContext {
        restaurants: RestaurantClient::new(restaurants.client()),
        menu: MenuClient::new(menu.client()),
    }));

    let draft = |item: u32| OrderDraft {
        restaurant: RestaurantId(1),
        order_type: OrderType::Takeaway,
        items: vec![(MenuItemId(item), 1)],
        table_number: None,
        delivery_address: None,
    };

    let result = client.place(draft(1)).await;
    assert!(matches!(
        result,
        Err(LifecycleError::ItemUnavailable(MenuItemId(1)))
    ));

    let result = client.place(draft(2)).await;
    assert!(matches!(
        result,
        Err(LifecycleError::UnknownMenuItem(MenuItemId(2)))
    ));

    restaurants.verify();
    menu.verify();
}
