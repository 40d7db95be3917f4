//! Payloads returned by the trivia service.
//!
//! Fields the quiz does not use (`category`, `difficulty`, `type`) are ignored.

use serde::Deserialize;

/// Body of `api_token.php?command=request`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Body of `api.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct QuestionsResponse {
    #[serde(default)]
    pub response_code: u32,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// One question as the service sends it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}
