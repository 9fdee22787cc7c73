use crate::domain::ports::{Transport, TransportResponse};
use crate::error::{PaytrailError, Result, TransportError};
use async_trait::async_trait;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

/// A request captured by [`StubTransport`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: Value,
}

enum Reply {
    Response(TransportResponse),
    Timeout,
}

/// An in-memory transport replaying canned responses.
///
/// Replies are served in the order they were queued; every request is
/// recorded. Clones share the same queue and log, so a test can keep a handle
/// after boxing one into a client. A poisoned lock panics rather than losing
/// queued replies or recorded requests.
#[derive(Clone, Default)]
pub struct StubTransport {
    replies: Arc<Mutex<VecDeque<Reply>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a response with the given status and body.
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.replies()
            .push_back(Reply::Response(TransportResponse::new(status, body)));
        self
    }

    /// Queues a timeout, reported as a transport error.
    pub fn time_out(self) -> Self {
        self.replies().push_back(Reply::Timeout);
        self
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.request_log().clone()
    }

    fn replies(&self) -> MutexGuard<'_, VecDeque<Reply>> {
        self.replies
            .lock()
            .expect("stub transport reply queue poisoned")
    }

    fn request_log(&self) -> MutexGuard<'_, Vec<RecordedRequest>> {
        self.requests
            .lock()
            .expect("stub transport request log poisoned")
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<TransportResponse> {
        self.request_log().push(RecordedRequest {
            url: url.to_string(),
            body: body.clone(),
        });

        let reply = self.replies().pop_front();
        match reply {
            Some(Reply::Response(response)) => Ok(response),
            Some(Reply::Timeout) => Err(PaytrailError::TransportError(TransportError::Timeout(
                format!("stub timeout for {url}"),
            ))),
            None => Err(PaytrailError::TransportError(TransportError::Other(
                "no stubbed response left".to_string(),
            ))),
        }
    }
}
