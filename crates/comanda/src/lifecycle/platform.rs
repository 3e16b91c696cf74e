use std::sync::Arc;

use chrono::Utc;
use tracing::{error, info, warn};

use crate::clients::{MenuClient, OrderClient, RestaurantClient, ServiceClient};
use crate::config::PlatformConfig;
use crate::order_board::actor::BoardContext;
use crate::persistence::SnapshotStore;

/// The main runtime orchestrator for the platform.
///
/// `Platform` owns the full actor topology:
/// - restaurant registry (no dependencies)
/// - menu registry (validates against the restaurant registry)
/// - service-call registry (no dependencies)
/// - order board (validates against restaurant and menu registries)
///
/// plus two background schedulers: the stalled-order sweeper and the
/// snapshot autosaver. Clients are cheap clones; hand them to whatever
/// surface needs them.
pub struct Platform {
    pub restaurant_client: RestaurantClient,
    pub menu_client: MenuClient,
    pub service_client: ServiceClient,
    pub order_client: OrderClient,

    store: Arc<dyn SnapshotStore>,
    handles: Vec<tokio::task::JoinHandle<()>>,
    schedulers: Vec<tokio::task::JoinHandle<()>>,
}

impl Platform {
    /// Spawns every actor, restores the last snapshot if the store has one,
    /// and starts the schedulers.
    pub async fn start(config: PlatformConfig, store: Arc<dyn SnapshotStore>) -> Self {
        let capacity = config.channel_capacity;

        // Registries first, board last: the board's context borrows their
        // clients.
        let (restaurant_actor, restaurant_client) = crate::restaurant_actor::new(capacity);
        let (menu_actor, menu_client) = crate::menu_actor::new(capacity);
        let (service_actor, service_client) = crate::service_actor::new(capacity);
        let (board_actor, order_client) = crate::order_board::new(capacity);

        let restaurant_handle = tokio::spawn(restaurant_actor.run(()));
        let menu_handle = tokio::spawn(menu_actor.run(restaurant_client.clone()));
        let service_handle = tokio::spawn(service_actor.run(()));
        let board_handle = tokio::spawn(board_actor.run(BoardContext {
            restaurants: restaurant_client.clone(),
            menu: menu_client.clone(),
        }));

        // Store implementations may block on file I/O; keep that off the
        // async workers.
        let loader = Arc::clone(&store);
        match tokio::task::spawn_blocking(move || loader.load()).await {
            Ok(Ok(Some(snapshot))) => {
                info!(
                    orders = snapshot.orders.len(),
                    archived = snapshot.archived.len(),
                    "Restoring order snapshot"
                );
                if let Err(e) = order_client.restore(snapshot).await {
                    error!("Snapshot restore failed: {e}");
                }
            }
            Ok(Ok(None)) => info!("No snapshot on record, starting empty"),
            Ok(Err(e)) => warn!("Could not read snapshot, starting empty: {e}"),
            Err(e) => warn!("Snapshot load task failed, starting empty: {e}"),
        }

        let sweeper = tokio::spawn(sweep_loop(order_client.clone(), config.sweep_interval));
        let autosaver = tokio::spawn(autosave_loop(
            order_client.clone(),
            Arc::clone(&store),
            config.autosave_interval,
        ));

        Self {
            restaurant_client,
            menu_client,
            service_client,
            order_client,
            store,
            handles: vec![restaurant_handle, menu_handle, service_handle, board_handle],
            schedulers: vec![sweeper, autosaver],
        }
    }

    /// Gracefully shuts down: stops the schedulers, takes a final snapshot,
    /// then closes every actor channel and waits for the tasks to finish.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down platform...");

        // Schedulers go first so the autosaver cannot race the final save.
        for scheduler in self.schedulers {
            scheduler.abort();
        }

        match self.order_client.snapshot().await {
            Ok(snapshot) => {
                let store = Arc::clone(&self.store);
                match tokio::task::spawn_blocking(move || store.save(&snapshot)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!("Final snapshot save failed: {e}"),
                    Err(e) => warn!("Final snapshot save task failed: {e}"),
                }
            }
            Err(e) => warn!("Could not take final snapshot: {e}"),
        }

        // Dropping the clients closes the channels; each actor drains its
        // queue and exits its loop.
        drop(self.order_client);
        drop(self.restaurant_client);
        drop(self.menu_client);
        drop(self.service_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Platform shutdown complete.");
        Ok(())
    }
}

/// Periodically completes orders that sat ready past the stall timeout.
async fn sweep_loop(orders: OrderClient, period: std::time::Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    loop {
        ticker.tick().await;
        match orders.sweep(Utc::now()).await {
            Ok(swept) if !swept.is_empty() => {
                info!(count = swept.len(), "Sweeper auto-completed stalled orders")
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Sweeper stopping, board unavailable: {e}");
                break;
            }
        }
    }
}

/// Periodically persists the board, skipping saves when nothing changed.
async fn autosave_loop(
    orders: OrderClient,
    store: Arc<dyn SnapshotStore>,
    period: std::time::Duration,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let mut last_revision = None;
    loop {
        ticker.tick().await;
        let snapshot = match orders.snapshot().await {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!("Autosaver stopping, board unavailable: {e}");
                break;
            }
        };
        if last_revision == Some(snapshot.revision) {
            continue;
        }
        let revision = snapshot.revision;
        let writer = Arc::clone(&store);
        match tokio::task::spawn_blocking(move || writer.save(&snapshot)).await {
            Ok(Ok(())) => last_revision = Some(revision),
            Ok(Err(e)) => warn!("Autosave failed, keeping in-memory state: {e}"),
            Err(e) => warn!("Autosave task failed: {e}"),
        }
    }
}
