//! Active orders view with the vendor decision workflow

use crate::error::Result;
use crate::notify::Notification;
use grubmart_client::ApiClient;
use grubmart_core::types::{Order, OrderAction, OrderId, OrderStatus};
use std::collections::HashSet;
use tracing::debug;

/// Orders awaiting vendor action, refreshed by polling
///
/// Accepting an order keeps it in the list with its new status; rejecting
/// or completing removes it, since the backend no longer reports it as
/// active. Each order allows one in-flight update at a time, while updates
/// on different orders may run concurrently.
#[derive(Debug, Default)]
pub struct ActiveOrdersView {
    /// Current active orders, in backend order
    pub orders: Vec<Order>,

    /// Whether a refresh is in flight
    pub loading: bool,

    updating: HashSet<OrderId>,
    notices: Vec<Notification>,
}

impl ActiveOrdersView {
    /// Create an empty view
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an update for the given order is in flight
    #[must_use]
    pub fn is_updating(&self, order_id: &OrderId) -> bool {
        self.updating.contains(order_id)
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
        debug!(count = orders.len(), "active orders snapshot applied");
        self.orders = orders;
    }

    /// Fetch active orders and replace the local copy
    ///
    /// # Errors
    ///
    /// Returns the client error that aborted the refresh; the current
    /// orders are kept.
    pub async fn refresh(&mut self, client: &ApiClient) -> Result<()> {
        self.loading = true;
        let result = client.active_orders().await;
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

    /// Apply a vendor action to an order
    ///
    /// The action must be one the order's current status offers; anything
    /// else is ignored, as is a second action on an order whose update is
    /// still in flight. The list only changes after the backend confirms.
    ///
    /// # Errors
    ///
    /// Returns the client error if the backend rejects the transition.
    pub async fn apply(
        &mut self,
        client: &ApiClient,
        order_id: &OrderId,
        action: OrderAction,
    ) -> Result<()> {
        let Some(order) = self.orders.iter().find(|o| &o.order_id == order_id) else {
            debug!(%order_id, "order not in view, ignoring action");
            return Ok(());
        };

        if !order.available_actions().contains(&action) {
            debug!(%order_id, status = %order.status, "action not available, ignoring");
            return Ok(());
        }

        if !self.updating.insert(order_id.clone()) {
            debug!(%order_id, "update already in flight, ignoring");
            return Ok(());
        }

        let target = action.target_status();
        let result = client.update_order_status(order_id, target).await;
        self.updating.remove(order_id);

        match result {
            Ok(()) => {
                if target == OrderStatus::Accepted {
                    if let Some(order) =
                        self.orders.iter_mut().find(|o| &o.order_id == order_id)
                    {
                        order.status = target;
                    }
                } else {
                    // Rejected and on-the-way orders leave the active set
                    self.orders.retain(|o| &o.order_id != order_id);
                }
                self.notices.push(Notification::success(format!(
                    "Order {order_id} {target}"
                )));
                Ok(())
            }
            Err(error) => {
                self.notices.push(Notification::error(error.to_string()));
                Err(error.into())
            }
        }
    }
}
