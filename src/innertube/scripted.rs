use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;

use crate::common::TransportError;

use super::{context::RequestContext, endpoint::EndpointKind, transport::Transport};

enum Reply {
    Ok(Value),
    Fail(u16),
}

/// In-memory transport replaying canned responses.
///
/// Requests are matched by endpoint kind plus the first routing key found in
/// the body: `continuation`, `browseId`, `query`, `input` or `videoId`.
#[derive(Default)]
pub struct ScriptedTransport {
    replies: Mutex<HashMap<(EndpointKind, String), Reply>>,
    calls: Mutex<Vec<(EndpointKind, Value)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(self, kind: EndpointKind, key: &str, response: Value) -> Self {
        self.replies
            .lock()
            .insert((kind, key.to_string()), Reply::Ok(response));
        self
    }

    pub fn fail(self, kind: EndpointKind, key: &str, status: u16) -> Self {
        self.replies
            .lock()
            .insert((kind, key.to_string()), Reply::Fail(status));
        self
    }

    pub fn calls(&self) -> Vec<(EndpointKind, Value)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, kind: EndpointKind) -> usize {
        self.calls.lock().iter().filter(|(k, _)| *k == kind).count()
    }

    fn key_of(body: &Value) -> String {
        ["continuation", "browseId", "query", "input", "videoId"]
            .iter()
            .find_map(|field| body.get(*field).and_then(Value::as_str))
            .unwrap_or_default()
            .to_string()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn request(
        &self,
        kind: EndpointKind,
        body: Value,
        _ctx: &RequestContext,
    ) -> Result<Value, TransportError> {
        let key = Self::key_of(&body);
        self.calls.lock().push((kind, body));

        match self.replies.lock().get(&(kind, key.clone())) {
            Some(Reply::Ok(v)) => Ok(v.clone()),
            Some(Reply::Fail(status)) => Err(TransportError::HttpStatus {
                status: *status,
                body: format!("scripted failure for {}", key),
            }),
            None => Err(TransportError::HttpStatus {
                status: 404,
                body: format!("no scripted reply for {:?} {}", kind, key),
            }),
        }
    }
}
