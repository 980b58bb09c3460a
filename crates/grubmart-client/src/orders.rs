//! Order endpoints: active and completed listings plus status transitions

use crate::client::ApiClient;
use crate::error::ClientResult;
use grubmart_core::types::{Order, OrderId, OrderStatus, StatusUpdate};

impl ApiClient {
    /// Fetch orders still awaiting vendor action (pending or accepted)
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn active_orders(&self) -> ClientResult<Vec<Order>> {
        let envelope = self.get_envelope("/api/orders/active").await?;
        Self::into_data(envelope)
    }

    /// Fetch closed orders (completed or rejected)
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn completed_orders(&self) -> ClientResult<Vec<Order>> {
        let envelope = self.get_envelope("/api/orders/completed").await?;
        Self::into_data(envelope)
    }

    /// Transition an order to a new status
    ///
    /// The backend owns the transition rules; callers gate which statuses
    /// they offer through [`Order::available_actions`].
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, a non-success HTTP status, or
    /// a `success: false` envelope.
    pub async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> ClientResult<()> {
        let body = StatusUpdate {
            order_id: order_id.clone(),
            status,
        };
        let envelope = self
            .put_envelope::<_, serde_json::Value>("/api/orders/status", &body)
            .await?;
        Self::into_ack(envelope)
    }
}
