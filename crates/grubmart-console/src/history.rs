//! Completed orders view, read only

use crate::error::Result;
use crate::notify::Notification;
use grubmart_client::ApiClient;
use grubmart_core::types::{Order, OrderStatus};
use tracing::debug;

/// Closed orders (completed or rejected), refreshed by polling
#[derive(Debug, Default)]
pub struct CompletedOrdersView {
    /// Closed orders, in backend order
    pub orders: Vec<Order>,

    /// Whether a refresh is in flight
    pub loading: bool,

    notices: Vec<Notification>,
}

impl CompletedOrdersView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifications emitted so far, newest last
    #[must_use]
    pub fn notices(&self) -> &[Notification] {
        &self.notices
    }

    /// Drain accumulated notifications
    pub fn take_notices(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notices)
    }

    /// Record a refresh failure without touching the order list
    pub fn note_error(&mut self, message: impl Into<String>) {
        self.notices.push(Notification::error(message));
    }

    /// Replace the order list from a fresh fetch, last write wins
    pub fn apply_snapshot(&mut self, orders: Vec<Order>) {
        debug!(count = orders.len(), "completed orders snapshot applied");
        self.orders = orders;
    }

    /// Fetch closed orders and replace the local copy
    ///
    /// # Errors
    ///
    /// Returns the client error that aborted the refresh; the current
    /// orders are kept.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<()> {
        self.loading = true;
        let result = client.completed_orders().await;
        self.loading = false;

        match result {
            Ok(orders) => {
                self.apply_snapshot(orders);
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                Err(error.into())
            }
        }
    }

    /// Outcome badge text for a closed order
    #[must_use]
    pub const fn badge(status: OrderStatus) -> &'static str {
        match status {
            OrderStatus::Completed => "Order Completed",
            OrderStatus::Rejected => "Order Rejected",
            other => other.as_str(),
        }
    }
}
