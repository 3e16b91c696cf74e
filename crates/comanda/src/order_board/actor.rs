//! The board actor: server half of the order lifecycle manager.
//!
//! Orders don't fit the generic registry (their operations are lifecycle
//! edges, not CRUD), so the board gets a bespoke request enum and loop in the
//! same sequential-ownership style: one task, one owned [`OrderBoard`], no
//! locks. Placement validates the owning tenant and prices the lines through
//! the context-injected registry clients.

use crate::clients::{MenuClient, RestaurantClient};
use crate::model::{Order, OrderDraft, OrderId, OrderLine, OrderStatus, RestaurantId, StaffRef};
use crate::order_board::board::{BoardSnapshot, OrderBoard};
use crate::order_board::error::LifecycleError;
use crate::order_board::views::{DeliveryBoard, FloorView, KitchenBoard, TrackerView};
use chrono::{DateTime, Utc};
use comanda_actor::EntityClient;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// One-shot reply channel for board operations.
pub type BoardRespond<T> = oneshot::Sender<Result<T, LifecycleError>>;

/// Requests understood by the board actor. Time-dependent reads (`Sweep`,
/// `Track`) carry `now` from the caller so schedulers pass the wall clock and
/// tests pass fabricated instants.
#[derive(Debug)]
pub enum BoardRequest {
    Place {
        draft: OrderDraft,
        respond_to: BoardRespond<OrderId>,
    },
    Get {
        id: OrderId,
        respond_to: BoardRespond<Option<Order>>,
    },
    Accept {
        id: OrderId,
        staff: StaffRef,
        prep_minutes: u32,
        respond_to: BoardRespond<Order>,
    },
    MarkReady {
        id: OrderId,
        staff: StaffRef,
        respond_to: BoardRespond<Order>,
    },
    MarkServed {
        id: OrderId,
        staff: StaffRef,
        respond_to: BoardRespond<Order>,
    },
    StartDelivery {
        id: OrderId,
        staff: StaffRef,
        respond_to: BoardRespond<Order>,
    },
    MarkDelivered {
        id: OrderId,
        staff: StaffRef,
        respond_to: BoardRespond<Order>,
    },
    SettlePayment {
        id: OrderId,
        respond_to: BoardRespond<Order>,
    },
    Sweep {
        now: DateTime<Utc>,
        respond_to: BoardRespond<Vec<OrderId>>,
    },
    KitchenBoard {
        restaurant: RestaurantId,
        respond_to: BoardRespond<KitchenBoard>,
    },
    FloorView {
        restaurant: RestaurantId,
        respond_to: BoardRespond<FloorView>,
    },
    DeliveryBoard {
        restaurant: RestaurantId,
        respond_to: BoardRespond<DeliveryBoard>,
    },
    Track {
        id: OrderId,
        now: DateTime<Utc>,
        respond_to: BoardRespond<TrackerView>,
    },
    ArchiveSettled {
        respond_to: BoardRespond<usize>,
    },
    Snapshot {
        respond_to: BoardRespond<BoardSnapshot>,
    },
    Restore {
        snapshot: BoardSnapshot,
        respond_to: BoardRespond<()>,
    },
    LiveCount {
        respond_to: BoardRespond<usize>,
    },
}

/// Dependencies injected into the board actor's run loop.
#[derive(Clone)]
pub struct BoardContext {
    pub restaurants: RestaurantClient,
    pub menu: MenuClient,
}

/// The board actor. Owns the [`OrderBoard`] and processes requests
/// sequentially until its channel closes.
pub struct BoardActor {
    receiver: mpsc::Receiver<BoardRequest>,
    board: OrderBoard,
}

impl BoardActor {
    pub fn new(receiver: mpsc::Receiver<BoardRequest>) -> Self {
        Self {
            receiver,
            board: OrderBoard::new(),
        }
    }

    pub async fn run(mut self, context: BoardContext) {
        info!("Order board started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                BoardRequest::Place { draft, respond_to } => {
                    debug!(?draft, "Place");
                    let result = self.place(&context, draft).await;
                    if let Err(e) = &result {
                        warn!(error = %e, "Place rejected");
                    }
                    let _ = respond_to.send(result);
                }
                BoardRequest::Get { id, respond_to } => {
                    let order = self.board.get(id).cloned();
                    debug!(%id, found = order.is_some(), "Get");
                    let _ = respond_to.send(Ok(order));
                }
                BoardRequest::Accept {
                    id,
                    staff,
                    prep_minutes,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.accept(id, staff, prep_minutes, Utc::now()));
                }
                BoardRequest::MarkReady {
                    id,
                    staff,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.mark_ready(id, staff));
                }
                BoardRequest::MarkServed {
                    id,
                    staff,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.mark_served(id, staff));
                }
                BoardRequest::StartDelivery {
                    id,
                    staff,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.start_delivery(id, staff));
                }
                BoardRequest::MarkDelivered {
                    id,
                    staff,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.mark_delivered(id, staff));
                }
                BoardRequest::SettlePayment { id, respond_to } => {
                    let _ = respond_to.send(self.board.settle_payment(id));
                }
                BoardRequest::Sweep { now, respond_to } => {
                    let _ = respond_to.send(Ok(self.board.sweep_timeouts(now)));
                }
                BoardRequest::KitchenBoard {
                    restaurant,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.board.kitchen_board(restaurant)));
                }
                BoardRequest::FloorView {
                    restaurant,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.board.floor_view(restaurant)));
                }
                BoardRequest::DeliveryBoard {
                    restaurant,
                    respond_to,
                } => {
                    let _ = respond_to.send(Ok(self.board.delivery_board(restaurant)));
                }
                BoardRequest::Track {
                    id,
                    now,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.board.track(id, now));
                }
                BoardRequest::ArchiveSettled { respond_to } => {
                    let _ = respond_to.send(Ok(self.board.archive_settled()));
                }
                BoardRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.board.snapshot()));
                }
                BoardRequest::Restore {
                    snapshot,
                    respond_to,
                } => {
                    self.board.restore(snapshot);
                    let _ = respond_to.send(Ok(()));
                }
                BoardRequest::LiveCount { respond_to } => {
                    let _ = respond_to.send(Ok(self.board.live_count()));
                }
            }
        }

        info!(live = self.board.live_count(), "Order board shutdown");
    }

    /// Placement: validate the tenant, price every line from its menu, pick
    /// the entry status from the tenant's auto-acknowledge flag, then hand
    /// the priced order to the board.
    async fn place(
        &mut self,
        context: &BoardContext,
        draft: OrderDraft,
    ) -> Result<OrderId, LifecycleError> {
        let restaurant = context
            .restaurants
            .get(draft.restaurant)
            .await
            .map_err(|e| LifecycleError::Registry(e.to_string()))?
            .ok_or(LifecycleError::UnknownRestaurant(draft.restaurant))?;
        if !restaurant.active {
            return Err(LifecycleError::RestaurantInactive(draft.restaurant));
        }

        let mut lines = Vec::with_capacity(draft.items.len());
        for &(item_id, quantity) in &draft.items {
            let item = context
                .menu
                .get(item_id)
                .await
                .map_err(|e| LifecycleError::Registry(e.to_string()))?
                .ok_or(LifecycleError::UnknownMenuItem(item_id))?;
            // An item of another restaurant's menu is unknown here.
            if item.restaurant != draft.restaurant {
                return Err(LifecycleError::UnknownMenuItem(item_id));
            }
            if !item.available {
                return Err(LifecycleError::ItemUnavailable(item_id));
            }
            lines.push(OrderLine {
                item: item_id,
                name: item.name,
                quantity,
                unit_price_cents: item.price_cents,
            });
        }

        let entry = if restaurant.auto_acknowledge {
            OrderStatus::Received
        } else {
            OrderStatus::Pending
        };
        self.board.place(&draft, lines, entry, Utc::now())
    }
}
