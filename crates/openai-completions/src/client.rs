use crate::error::Error;
use crate::types::{CompletionRequest, CompletionResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

#[derive(Clone)]
pub struct CompletionsClient {
    http: reqwest::Client,
    base_url: String,
}

impl CompletionsClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// The credential is supplied per call since callers pick one of several keys.
    pub async fn create_completion(
        &self,
        api_key: &str,
        req: &CompletionRequest,
    ) -> Result<CompletionResponse, Error> {
        let resp = self
            .http
            .post(format!("{}/completions", self.base_url))
            .bearer_auth(api_key)
            .json(req)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api { status, body });
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str::<CompletionResponse>(&body)?)
    }

    pub async fn complete_text(
        &self,
        api_key: &str,
        req: &CompletionRequest,
    ) -> Result<String, Error> {
        let resp = self.create_completion(api_key, req).await?;
        resp.first_text()
            .map(|text| text.trim().to_string())
            .ok_or(Error::EmptyChoices)
    }
}
