use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use whoreacted::adapters::{SlackTransport, TransportFailure, TransportResponse};

type Outcome = Result<TransportResponse, TransportFailure>;

/// SlackTransport that replays a fixed sequence of outcomes
///
/// Panics when called more often than scripted.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Outcome>>,
    pub requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: String,
    pub query: Vec<(String, String)>,
}

impl RecordedRequest {
    pub fn param(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl ScriptedTransport {
    pub fn new(script: Vec<Outcome>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn methods(&self) -> Vec<String> {
        self.get_requests().into_iter().map(|r| r.method).collect()
    }
}

#[async_trait]
impl SlackTransport for ScriptedTransport {
    async fn get(&self, method: &str, query: &[(&str, &str)]) -> Outcome {
        self.requests.lock().unwrap().push(RecordedRequest {
            method: method.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("Unexpected call to {method}: script exhausted"))
    }
}

// Outcome builders

pub fn ok_json(body: Value) -> Outcome {
    Ok(TransportResponse::new(StatusCode::OK, body.to_string()))
}

pub fn slack_error(code: &str) -> Outcome {
    ok_json(serde_json::json!({"ok": false, "error": code}))
}

pub fn rate_limited(retry_after_secs: u64) -> Outcome {
    Ok(TransportResponse::new(
        StatusCode::TOO_MANY_REQUESTS,
        r#"{"ok":false,"error":"ratelimited"}"#,
    )
    .with_retry_after(Duration::from_secs(retry_after_secs)))
}

pub fn server_error() -> Outcome {
    Ok(TransportResponse::new(
        StatusCode::SERVICE_UNAVAILABLE,
        "upstream unavailable",
    ))
}

pub fn network_failure() -> Outcome {
    Err(TransportFailure("connection reset by peer".to_string()))
}

pub fn reactions_page(reactions: Value, next_cursor: &str) -> Outcome {
    ok_json(serde_json::json!({
        "ok": true,
        "type": "message",
        "message": {
            "type": "message",
            "text": "Team lunch on Friday?",
            "reactions": reactions
        },
        "response_metadata": {"next_cursor": next_cursor}
    }))
}

pub fn user_info(id: &str, display_name: &str, real_name: &str) -> Outcome {
    ok_json(serde_json::json!({
        "ok": true,
        "user": {
            "id": id,
            "name": id.to_lowercase(),
            "profile": {"display_name": display_name, "real_name": real_name}
        }
    }))
}
