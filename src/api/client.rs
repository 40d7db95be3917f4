use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::ApiError;

use super::{QuestionsResponse, QuizRequest, RawQuestion, TokenResponse, TriviaApi};

pub const DEFAULT_API_URL: &str = "https://opentdb.com";

/// HTTP client for an Open Trivia DB compatible service.
#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    http: Client,
    base_url: String,
}

impl OpenTdbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl Default for OpenTdbClient {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl TriviaApi for OpenTdbClient {
    async fn request_token(&self) -> Result<String, ApiError> {
        let response: TokenResponse = self
            .get("api_token.php", &[("command", "request".to_string())])
            .await?;
        Ok(response.token)
    }

    async fn fetch_questions(&self, request: &QuizRequest) -> Result<Vec<RawQuestion>, ApiError> {
        let response: QuestionsResponse = self.get("api.php", &request.query()).await?;
        log::debug!(
            "api.php answered with code {} and {} results",
            response.response_code,
            response.results.len()
        );
        Ok(response.results)
    }
}
