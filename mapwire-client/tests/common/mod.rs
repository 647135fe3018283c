//! Shared test support: a recording executor standing in for the network.

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

use std::collections::{BTreeMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use mapwire_client::{
    ApiRequest, ApiResponse, CallOutcome, Client, ClientError, Payload, RequestExecutor,
};
use serde_json::{Value, json};

/// Executor that records every request and answers from a canned queue.
///
/// With an empty queue it answers `200` with an empty JSON object, so tests
/// that only inspect the recorded request need no setup.
pub struct RecordingExecutor {
    requests: Mutex<Vec<ApiRequest>>,
    responses: Mutex<VecDeque<Result<CallOutcome, ClientError>>>,
}

impl RecordingExecutor {
    pub fn new() -> Arc<Self> {
        init_tracing();
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
        })
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_outcome(json_outcome(status, body));
    }

    pub fn push_empty(&self, status: u16) {
        self.push_outcome(CallOutcome {
            response: ApiResponse {
                status,
                headers: BTreeMap::new(),
            },
            body: Payload::Empty,
        });
    }

    pub fn push_outcome(&self, outcome: CallOutcome) {
        self.responses.lock().unwrap().push_back(Ok(outcome));
    }

    pub fn push_error(&self, error: ClientError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl RequestExecutor for RecordingExecutor {
    async fn execute(&self, request: ApiRequest) -> Result<CallOutcome, ClientError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(json_outcome(200, json!({}))))
    }
}

/// A `CallOutcome` carrying a JSON body with a matching content-type header.
pub fn json_outcome(status: u16, body: Value) -> CallOutcome {
    let mut headers = BTreeMap::new();
    headers.insert("content-type".to_string(), "application/json".to_string());
    CallOutcome {
        response: ApiResponse { status, headers },
        body: Payload::Json(body),
    }
}

/// A client with token `abcd` routed through the given executor.
pub fn client_with(executor: &Arc<RecordingExecutor>) -> Client {
    let executor: Arc<dyn RequestExecutor> = executor.clone();
    Client::builder("abcd")
        .executor(executor)
        .build()
        .unwrap()
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("mapwire_client=debug")
        .with_test_writer()
        .try_init();
}
