//! Remote trivia service.
//!
//! [`TriviaApi`] is the seam the quiz service talks through; [`OpenTdbClient`]
//! is the HTTP implementation against an Open Trivia DB compatible server.

mod client;
mod request;
mod wire;

use async_trait::async_trait;

use crate::error::ApiError;

pub use client::{OpenTdbClient, DEFAULT_API_URL};
pub use request::{Difficulty, QuestionType, QuizRequest};
pub use wire::{QuestionsResponse, RawQuestion, TokenResponse};

#[async_trait]
pub trait TriviaApi: Send + Sync {
    /// Request a new session token.
    async fn request_token(&self) -> Result<String, ApiError>;

    /// Fetch one batch of questions. An empty batch is not an error here.
    async fn fetch_questions(&self, request: &QuizRequest) -> Result<Vec<RawQuestion>, ApiError>;
}
