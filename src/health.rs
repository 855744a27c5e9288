use crate::api::ApiClient;
use crate::app::{App, ConnectionStatus};
use log::debug;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

/// One probe of the remote service. A failed probe reads as Offline; the
/// client itself never errors, so there is nothing to propagate here.
pub async fn check_connection(app: &Arc<Mutex<App>>, api: &ApiClient) {
    let healthy = api.health_check().await;
    let status = if healthy {
        ConnectionStatus::Online
    } else {
        ConnectionStatus::Offline
    };

    debug!("health check: {:?}", status);

    let mut guard = app.lock().await;
    if guard.connection != status {
        let label = match status {
            ConnectionStatus::Online => "Online",
            ConnectionStatus::Offline => "Offline",
            ConnectionStatus::Unknown => "Unknown",
        };
        guard.logs.add(format!("Connection: {}", label));
    }
    guard.connection = status;
}

/// Spawns the periodic status watcher: one probe immediately, then one per
/// interval. The returned handle is aborted at shutdown so the task's
/// lifetime matches the session.
pub fn watch(app: Arc<Mutex<App>>, api: ApiClient, interval_secs: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        loop {
            interval.tick().await;
            check_connection(&app, &api).await;
        }
    })
}
