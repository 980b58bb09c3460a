//! Background polling for the order views
//!
//! Spawns one task per watched view. Each task fetches on an interval and
//! replaces the view's data under a short-lived lock; results that land
//! after shutdown has been requested are discarded.

use crate::history::CompletedOrdersView;
use crate::orders::ActiveOrdersView;
use grubmart_client::ApiClient;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::interval;
use tracing::{debug, warn};

/// Periodic refresher for the order views
#[derive(Debug)]
pub struct OrderPoller {
    period: Duration,
    shutdown_tx: broadcast::Sender<()>,
    handles: Vec<JoinHandle<()>>,
}

impl OrderPoller {
    /// Create a poller with the given refresh period
    #[must_use]
    pub fn new(period: Duration) -> Self {
        let (shutdown_tx, _) = broadcast::channel(4);
        Self {
            period,
            shutdown_tx,
            handles: Vec::new(),
        }
    }

    /// Start refreshing the active orders view
    ///
    /// The first fetch happens immediately, then once per period.
    pub fn watch_active(&mut self, client: ApiClient, view: Arc<RwLock<ActiveOrdersView>>) {
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let period = self.period;

        self.handles.push(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = ticker.tick() => {
                        match client.active_orders().await {
                            Ok(orders) => {
                                if shutdown_requested(&mut shutdown_rx) {
                                    break;
                                }
                                view.write().apply_snapshot(orders);
                            }
                            Err(error) => {
                                warn!(%error, "active orders refresh failed");
                                view.write().note_error(error.to_string());
                            }
                        }
                    }
                }
            }
            debug!("active orders poller stopped");
        }));
    }

    /// Start refreshing the completed orders view
    pub fn watch_completed(&mut self, client: ApiClient, view: Arc<RwLock<CompletedOrdersView>>) {
        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let period = self.period;

        self.handles.push(tokio::spawn(async move {
            let mut ticker = interval(period);
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => break,
                    _ = ticker.tick() => {
                        match client.completed_orders().await {
                            Ok(orders) => {
                                if shutdown_requested(&mut shutdown_rx) {
                                    break;
                                }
                                view.write().apply_snapshot(orders);
                            }
                            Err(error) => {
                                warn!(%error, "completed orders refresh failed");
                                view.write().note_error(error.to_string());
                            }
                        }
                    }
                }
            }
            debug!("completed orders poller stopped");
        }));
    }

    /// Signal shutdown and wait for all polling tasks to finish
    pub async fn stop(self) {
        let _ = self.shutdown_tx.send(());
        for handle in self.handles {
            let _ = handle.await;
        }
    }
}

/// Check for a shutdown signal that arrived while a fetch was in flight
fn shutdown_requested(rx: &mut broadcast::Receiver<()>) -> bool {
    !matches!(
        rx.try_recv(),
        Err(broadcast::error::TryRecvError::Empty | broadcast::error::TryRecvError::Lagged(_))
    )
}
