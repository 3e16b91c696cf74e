//! # Order Client
//!
//! High-level API for the board actor. The board is not a generic registry,
//! so this client speaks [`BoardRequest`] directly: one method per lifecycle
//! operation, each a thin send-and-await over the actor's channel.

use crate::model::{Order, OrderDraft, OrderId, RestaurantId, StaffRef};
use crate::order_board::actor::{BoardRequest, BoardRespond};
use crate::order_board::board::BoardSnapshot;
use crate::order_board::error::LifecycleError;
use crate::order_board::views::{DeliveryBoard, FloorView, KitchenBoard, TrackerView};
use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the board actor. Cheap to clone; every staff
/// surface (kitchen board, floor view, delivery board, diner app) holds one.
#[derive(Clone)]
pub struct OrderClient {
    sender: mpsc::Sender<BoardRequest>,
}

impl OrderClient {
    pub fn new(sender: mpsc::Sender<BoardRequest>) -> Self {
        Self { sender }
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(BoardRespond<T>) -> BoardRequest,
    ) -> Result<T, LifecycleError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| LifecycleError::Channel("board actor closed".into()))?;
        response
            .await
            .map_err(|_| LifecycleError::Channel("board actor dropped response".into()))?
    }

    /// Diner-side placement. Validation and pricing happen in the actor.
    #[instrument(skip(self, draft))]
    pub async fn place(&self, draft: OrderDraft) -> Result<OrderId, LifecycleError> {
        debug!(?draft, "place called");
        self.request(|respond_to| BoardRequest::Place { draft, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, LifecycleError> {
        self.request(|respond_to| BoardRequest::Get { id, respond_to })
            .await
    }

    /// Kitchen accepts with a preparation estimate in minutes.
    #[instrument(skip(self))]
    pub async fn accept(
        &self,
        id: OrderId,
        staff: StaffRef,
        prep_minutes: u32,
    ) -> Result<Order, LifecycleError> {
        debug!("Sending request");
        self.request(|respond_to| BoardRequest::Accept {
            id,
            staff,
            prep_minutes,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: OrderId, staff: StaffRef) -> Result<Order, LifecycleError> {
        self.request(|respond_to| BoardRequest::MarkReady {
            id,
            staff,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn mark_served(&self, id: OrderId, staff: StaffRef) -> Result<Order, LifecycleError> {
        self.request(|respond_to| BoardRequest::MarkServed {
            id,
            staff,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn start_delivery(
        &self,
        id: OrderId,
        staff: StaffRef,
    ) -> Result<Order, LifecycleError> {
        self.request(|respond_to| BoardRequest::StartDelivery {
            id,
            staff,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn mark_delivered(
        &self,
        id: OrderId,
        staff: StaffRef,
    ) -> Result<Order, LifecycleError> {
        self.request(|respond_to| BoardRequest::MarkDelivered {
            id,
            staff,
            respond_to,
        })
        .await
    }

    /// Payment callback: settles the order and flips the payment axis.
    #[instrument(skip(self))]
    pub async fn settle_payment(&self, id: OrderId) -> Result<Order, LifecycleError> {
        self.request(|respond_to| BoardRequest::SettlePayment { id, respond_to })
            .await
    }

    /// Runs the stalled-order sweep against the supplied clock reading.
    #[instrument(skip(self, now))]
    pub async fn sweep(&self, now: DateTime<Utc>) -> Result<Vec<OrderId>, LifecycleError> {
        self.request(|respond_to| BoardRequest::Sweep { now, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn kitchen_board(
        &self,
        restaurant: RestaurantId,
    ) -> Result<KitchenBoard, LifecycleError> {
        self.request(|respond_to| BoardRequest::KitchenBoard {
            restaurant,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn floor_view(&self, restaurant: RestaurantId) -> Result<FloorView, LifecycleError> {
        self.request(|respond_to| BoardRequest::FloorView {
            restaurant,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self))]
    pub async fn delivery_board(
        &self,
        restaurant: RestaurantId,
    ) -> Result<DeliveryBoard, LifecycleError> {
        self.request(|respond_to| BoardRequest::DeliveryBoard {
            restaurant,
            respond_to,
        })
        .await
    }

    #[instrument(skip(self, now))]
    pub async fn track(
        &self,
        id: OrderId,
        now: DateTime<Utc>,
    ) -> Result<TrackerView, LifecycleError> {
        self.request(|respond_to| BoardRequest::Track {
            id,
            now,
            respond_to,
        })
        .await
    }

    /// Moves settled orders off the live board; returns how many moved.
    #[instrument(skip(self))]
    pub async fn archive_settled(&self) -> Result<usize, LifecycleError> {
        self.request(|respond_to| BoardRequest::ArchiveSettled { respond_to })
            .await
    }

    pub async fn snapshot(&self) -> Result<BoardSnapshot, LifecycleError> {
        self.request(|respond_to| BoardRequest::Snapshot { respond_to })
            .await
    }

    pub async fn restore(&self, snapshot: BoardSnapshot) -> Result<(), LifecycleError> {
        self.request(|respond_to| BoardRequest::Restore {
            snapshot,
            respond_to,
        })
        .await
    }

    pub async fn live_count(&self) -> Result<usize, LifecycleError> {
        self.request(|respond_to| BoardRequest::LiveCount { respond_to })
            .await
    }
}
