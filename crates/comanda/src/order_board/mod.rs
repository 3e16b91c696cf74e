//! # Order Lifecycle Manager
//!
//! The canonical live-order collection and its state machine, served by a
//! bespoke actor.
//!
//! ## Structure
//!
//! - [`board`] - the owned [`OrderBoard`](board::OrderBoard) store: guarded
//!   transitions, timeout sweep, derived views, snapshot/restore
//! - [`actor`] - the sequential request loop and context-injected placement
//!   validation
//! - [`views`] - the derived read models (kitchen board, floor view,
//!   delivery board, diner tracker)
//! - [`error`] - [`LifecycleError`](error::LifecycleError)
//! - [`new()`] - factory producing the actor and its
//!   [`OrderClient`](crate::clients::OrderClient)
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, orders) = order_board::new(32);
//! tokio::spawn(actor.run(BoardContext { restaurants, menu }));
//!
//! let id = orders.place(draft).await?;
//! orders.accept(id, kitchen_staff, 15).await?;
//! ```

pub mod actor;
pub mod board;
pub mod error;
pub mod views;

pub use actor::{BoardActor, BoardContext, BoardRequest};
pub use board::{BoardSnapshot, OrderBoard, STALL_TIMEOUT_SECS};
pub use error::LifecycleError;
pub use views::{DeliveryBoard, FloorView, KitchenBoard, TrackerView};

use crate::clients::OrderClient;
use tokio::sync::mpsc;

/// Creates a new board actor and its client.
pub fn new(buffer_size: usize) -> (BoardActor, OrderClient) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (BoardActor::new(receiver), OrderClient::new(sender))
}
