use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use serde_json::json;

use super::client::JudgeClient;
use super::error::{JudgeError, JudgeResult};
use super::types::JudgeRequest;

type Responder = Box<dyn Fn(&JudgeRequest, usize) -> JudgeResult<String> + Send + Sync>;

/// Scripted judge for tests. Records every request it receives.
pub struct MockJudgeClient {
    responder: Responder,
    calls: AtomicUsize,
    requests: Mutex<Vec<JudgeRequest>>,
}

impl std::fmt::Debug for MockJudgeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockJudgeClient")
            .field("calls", &self.call_count())
            .finish()
    }
}

impl MockJudgeClient {
    /// Answers each call with `f(request, call_index)`.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&JudgeRequest, usize) -> JudgeResult<String> + Send + Sync + 'static,
    {
        Self {
            responder: Box::new(f),
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replays `responses` in order; calls past the end fail with a provider error.
    pub fn with_responses<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let responses: Vec<String> = responses.into_iter().map(Into::into).collect();
        Self::from_fn(move |_, call| {
            responses
                .get(call)
                .cloned()
                .ok_or_else(|| JudgeError::Provider {
                    reason: format!("no scripted response for call {call}"),
                })
        })
    }

    /// Keeps every item with the given score and a brief naming the id.
    pub fn keep_all(score: u8) -> Self {
        Self::from_fn(move |request, _| {
            let rows: Vec<_> = request
                .items
                .iter()
                .map(|item| {
                    json!({
                        "id": item.id,
                        "keep": true,
                        "score": score,
                        "reason": "relevant",
                        "brief": format!("brief for {}", item.id),
                    })
                })
                .collect();
            Ok(serde_json::Value::Array(rows).to_string())
        })
    }

    /// Keeps every item until call `fail_at`, which fails with a provider error.
    pub fn failing_at(fail_at: usize) -> Self {
        let inner = Self::keep_all(90);
        Self::from_fn(move |request, call| {
            if call == fail_at {
                Err(JudgeError::Provider {
                    reason: "simulated outage".to_string(),
                })
            } else {
                (inner.responder)(request, call)
            }
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<JudgeRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl JudgeClient for MockJudgeClient {
    async fn judge(&self, request: &JudgeRequest) -> JudgeResult<String> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        (self.responder)(request, call)
    }
}
