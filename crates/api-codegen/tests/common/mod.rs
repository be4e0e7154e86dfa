#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use api_codegen::{CodegenConfig, ConfigSource};
use axum::body::Body;
use axum::http::Request;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// In-memory config that remembers every variable it was asked for.
#[derive(Default, Clone)]
pub struct RecordingEnv {
    vars: HashMap<String, String>,
    reads: Arc<Mutex<Vec<String>>>,
}

impl RecordingEnv {
    pub fn new(vars: &[(&str, &str)]) -> Self {
        Self {
            vars: vars
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            reads: Arc::default(),
        }
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }
}

impl ConfigSource for RecordingEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.reads.lock().unwrap().push(name.to_string());
        self.vars.get(name).cloned()
    }
}

pub fn full_env() -> RecordingEnv {
    RecordingEnv::new(&[
        ("OPENAI_API_KEY_1", "sk-one"),
        ("OPENAI_API_KEY_2", "sk-two"),
        ("OPENAI_API_KEY_3", "sk-three"),
        ("DEFAULT_KEY", "FALLBACK_OPENAI_KEY"),
        ("FALLBACK_OPENAI_KEY", "sk-fallback"),
    ])
}

pub struct TestHarness {
    pub mock_server: MockServer,
}

impl TestHarness {
    pub async fn new() -> Self {
        Self {
            mock_server: MockServer::start().await,
        }
    }

    pub fn config(&self, env: RecordingEnv) -> CodegenConfig {
        CodegenConfig::new(Arc::new(env))
            .with_base_url(self.mock_server.uri())
            .with_timeout(Duration::from_secs(5))
    }

    pub async fn mount_completion(&self, text: &str) {
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(completion_response(text)))
            .mount(&self.mock_server)
            .await;
    }

    pub async fn expect_no_upstream_call(&self) {
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&self.mock_server)
            .await;
    }

    pub async fn received_bodies(&self) -> Vec<serde_json::Value> {
        self.mock_server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

pub fn completion_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "cmpl-test",
        "object": "text_completion",
        "model": "code-davinci-002",
        "choices": [{
            "text": text,
            "index": 0,
            "logprobs": null,
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17}
    })
}

pub fn generate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/generate")
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn response_to_json(response: axum::http::Response<Body>) -> serde_json::Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}
