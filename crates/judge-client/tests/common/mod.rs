use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use jisi_code_core::domain::SubmissionToken;
use judge_client::{
    Delay, JudgeTransport, SubmissionCreated, SubmissionPayload, TransportError,
};
use serde_json::{Value, json};

/// One scripted answer to a poll.
#[derive(Debug, Clone)]
pub enum PollReply {
    Raw(Value),
    Error(u16),
}

pub fn pending(id: u32) -> PollReply {
    let description = if id == 1 { "In Queue" } else { "Processing" };
    PollReply::Raw(json!({
        "status": { "id": id, "description": description },
        "stdout": null,
        "time": null,
        "memory": null
    }))
}

pub fn accepted(stdout: &str) -> PollReply {
    PollReply::Raw(accepted_raw(stdout))
}

pub fn accepted_raw(stdout: &str) -> Value {
    json!({
        "status": { "id": 3, "description": "Accepted" },
        "stdout": stdout,
        "stderr": null,
        "compile_output": null,
        "message": null,
        "time": "0.004",
        "memory": 3240,
        "token": "ignored",
        "exit_code": 0
    })
}

pub fn terminal(id: u32, description: &str) -> PollReply {
    PollReply::Raw(json!({
        "status": { "id": id, "description": description },
        "stdout": null,
        "stderr": "Traceback (most recent call last)",
        "compile_output": null,
        "message": "Exited with error status 1",
        "time": "0.010",
        "memory": 3300,
        "exit_code": 1
    }))
}

#[derive(Default)]
struct MockState {
    tokens_by_source: HashMap<String, String>,
    replies: HashMap<String, VecDeque<PollReply>>,
    create_error: Option<u16>,
    omit_token: bool,
    payloads: Vec<SubmissionPayload>,
    fetched: Vec<String>,
}

/// Scripted judge: each source code maps to a token, each token to a
/// queue of poll replies.
#[derive(Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(self, source_code: &str, token: &str, replies: Vec<PollReply>) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            state
                .tokens_by_source
                .insert(source_code.to_string(), token.to_string());
            state.replies.insert(token.to_string(), replies.into());
        }
        self
    }

    pub fn fail_create(self, status: u16) -> Self {
        self.state.lock().unwrap().create_error = Some(status);
        self
    }

    pub fn omit_token(self) -> Self {
        self.state.lock().unwrap().omit_token = true;
        self
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().payloads.len()
    }

    pub fn payloads(&self) -> Vec<SubmissionPayload> {
        self.state.lock().unwrap().payloads.clone()
    }

    pub fn fetch_count(&self) -> usize {
        self.state.lock().unwrap().fetched.len()
    }

    pub fn fetched_tokens(&self) -> Vec<String> {
        self.state.lock().unwrap().fetched.clone()
    }
}

#[async_trait]
impl JudgeTransport for MockTransport {
    async fn create_submission(
        &self,
        payload: &SubmissionPayload,
    ) -> Result<SubmissionCreated, TransportError> {
        let mut state = self.state.lock().unwrap();
        state.payloads.push(payload.clone());

        if let Some(status) = state.create_error {
            return Err(TransportError::Status(status));
        }
        if state.omit_token {
            return Ok(SubmissionCreated { token: None });
        }

        let token = state
            .tokens_by_source
            .get(&payload.source_code)
            .cloned()
            .ok_or(TransportError::Status(404))?;
        Ok(SubmissionCreated { token: Some(token) })
    }

    async fn fetch_submission(&self, token: &SubmissionToken) -> Result<Value, TransportError> {
        let reply = {
            let mut state = self.state.lock().unwrap();
            state.fetched.push(token.as_str().to_string());
            state
                .replies
                .get_mut(token.as_str())
                .and_then(VecDeque::pop_front)
        };
        tokio::task::yield_now().await;

        match reply {
            Some(PollReply::Raw(value)) => Ok(value),
            Some(PollReply::Error(status)) => Err(TransportError::Status(status)),
            None => Err(TransportError::Status(599)),
        }
    }
}

/// Records requested waits instead of sleeping.
#[derive(Clone, Default)]
pub struct RecordingDelay {
    waits: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn waits(&self) -> Vec<Duration> {
        self.waits.lock().unwrap().clone()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn wait(&self, duration: Duration) {
        self.waits.lock().unwrap().push(duration);
        tokio::task::yield_now().await;
    }
}
