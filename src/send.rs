use crate::api::ApiClient;
use crate::app::App;
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Delivers one user message to the API and settles the send.
///
/// The caller has already moved the app into the Sending state via
/// `App::begin_send`; this task performs the network call and hands the
/// outcome to `App::complete_send`, which releases the lock on both arms.
pub async fn deliver(app: Arc<Mutex<App>>, api: ApiClient, text: String) {
    {
        let mut guard = app.lock().await;
        guard.logs.add("Sending message...".to_string());
    }
    info!("dispatching message ({} chars)", text.chars().count());

    let result = api.send_message(&text).await;

    let mut guard = app.lock().await;
    match &result {
        Ok(reply) => {
            info!("reply received ({} chars)", reply.chars().count());
            guard.logs.add("Reply received".to_string());
        }
        Err(e) => {
            error!("send failed: {}", e);
        }
    }
    guard.complete_send(result);
}
