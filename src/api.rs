use crate::errors::{ConfabError, ConfabResult};
use lru::LruCache;
use reqwest::Client;
use serde_json::{json, Value};
use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

const REPLY_CACHE_SIZE: usize = 100;

/// HTTP client for the remote assistant service.
///
/// Wraps exactly two endpoints: `POST /chat` and `GET /health`. Replies are
/// memoized per client so repeated quick queries skip the round trip.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    reply_cache: Arc<Mutex<LruCache<String, String>>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
            reply_cache: Arc::new(Mutex::new(LruCache::new(
                NonZeroUsize::new(REPLY_CACHE_SIZE).unwrap(),
            ))),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends a user message and returns the assistant's reply text.
    pub async fn send_message(&self, text: &str) -> ConfabResult<String> {
        if let Some(cached_reply) = self.reply_cache.lock().unwrap().get(text) {
            return Ok(cached_reply.clone());
        }

        let payload = json!({ "message": text });

        let response = self
            .client
            .post(format!("{}/chat", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ConfabError::api_error(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ConfabError::api_error(format!(
                "API returned error: {} - {}",
                status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| ConfabError::api_error(format!("Failed to parse API response: {}", e)))?;

        if let Some(error) = body["error"].as_object() {
            return Err(ConfabError::api_error(format!(
                "{}: {}",
                error["type"].as_str().unwrap_or("unknown"),
                error["message"].as_str().unwrap_or("no message")
            )));
        }

        let reply = body["reply"]
            .as_str()
            .ok_or_else(|| ConfabError::api_error("Response missing expected reply"))?
            .to_string();

        self.reply_cache
            .lock()
            .unwrap()
            .put(text.to_string(), reply.clone());

        Ok(reply)
    }

    /// Probes the service. Any failure, transport or status, reads as down;
    /// this never errors so the status watcher has nothing to propagate.
    pub async fn health_check(&self) -> bool {
        match self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
