//! Simulated payment gateway.
//!
//! Charges always succeed here; the interesting part is what settlement does
//! to the order. Settling flips the payment axis and completes the lifecycle
//! in one step through the board actor, so a receipt is only ever issued for
//! an order that actually reached a servable state.

use crate::model::{Order, OrderId, PaymentStatus};
use crate::order_board::error::LifecycleError;
use crate::clients::OrderClient;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, instrument};

#[derive(Debug, Error)]
pub enum PaymentError {
    #[error("Order {0} not found")]
    NotFound(OrderId),
    #[error("Order {0} is already paid")]
    AlreadyPaid(OrderId),
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

/// Proof of settlement, handed back to the diner surface.
#[derive(Debug, Clone)]
pub struct Receipt {
    pub order: OrderId,
    pub amount_cents: i64,
    pub paid_at: DateTime<Utc>,
}

/// Front door for diner payments. Checks the order before charging so a
/// double-tap on "pay" reports `AlreadyPaid` instead of re-settling.
#[derive(Clone)]
pub struct PaymentGateway {
    orders: OrderClient,
}

impl PaymentGateway {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }

    #[instrument(skip(self))]
    pub async fn pay(&self, id: OrderId) -> Result<Receipt, PaymentError> {
        let order = self
            .orders
            .get(id)
            .await?
            .ok_or(PaymentError::NotFound(id))?;
        if order.payment == PaymentStatus::Paid {
            return Err(PaymentError::AlreadyPaid(id));
        }

        // Simulated charge. The board re-checks lifecycle preconditions, so
        // a settle on a not-yet-served order still fails cleanly here.
        let settled: Order = self.orders.settle_payment(id).await?;
        let paid_at = Utc::now();
        info!(order = %id, amount_cents = settled.total_cents, "Payment settled");
        Ok(Receipt {
            order: id,
            amount_cents: settled.total_cents,
            paid_at,
        })
    }
}
