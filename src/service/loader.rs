//! Startup prefetch: session token, then a staggered batch of quiz fetches.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::time::sleep;

use crate::api::{QuizRequest, RawQuestion, TriviaApi};
use crate::config::LoaderSettings;
use crate::data::{build_quiz, category_name};
use crate::error::ApiError;

use super::QuizService;

pub(super) async fn initialize(
    service: QuizService,
    api: Arc<dyn TriviaApi>,
    settings: LoaderSettings,
) {
    let token = match api.request_token().await {
        Ok(token) => token,
        Err(e) => {
            log::error!("Failed to fetch session token: {}", e);
            String::new()
        }
    };
    service.set_session_token(token.clone());

    load_quizzes(&service, api.as_ref(), &token, &settings).await;

    log::info!(
        "All quizzes loaded ({} of {})",
        service.quizzes().borrow().len(),
        settings.quiz_count
    );
    service.mark_loaded();
}

/// Fetch `i` waits `i * stagger` before its first request. Fetches run
/// concurrently and append in the order they complete.
async fn load_quizzes(
    service: &QuizService,
    api: &dyn TriviaApi,
    token: &str,
    settings: &LoaderSettings,
) {
    let fetches = (0..settings.quiz_count).map(|index| async move {
        sleep(settings.stagger * index as u32).await;
        fetch_quiz(service, api, index, token, settings).await;
    });

    join_all(fetches).await;
}

async fn fetch_quiz(
    service: &QuizService,
    api: &dyn TriviaApi,
    index: usize,
    token: &str,
    settings: &LoaderSettings,
) {
    let request = QuizRequest::random(
        token,
        settings.question_counts.clone(),
        settings.categories.clone(),
    );
    let category = category_name(request.category);
    let mut retries = 0;

    loop {
        match attempt(api, &request).await {
            Ok(results) => {
                service.append_quiz(build_quiz(index, category, results));
                return;
            }
            Err(e) if retries >= settings.max_retries => {
                log::error!("Max retries reached. Could not load quiz {}: {}", index, e);
                return;
            }
            Err(e) => {
                retries += 1;
                log::warn!(
                    "Quiz {} fetch failed ({}), retry {}/{}",
                    index,
                    e,
                    retries,
                    settings.max_retries
                );
                sleep(settings.retry_delay).await;
            }
        }
    }
}

/// A question needs at least one incorrect answer to be playable. Batches
/// left empty after dropping the rest count as empty results.
async fn attempt(api: &dyn TriviaApi, request: &QuizRequest) -> Result<Vec<RawQuestion>, ApiError> {
    let mut results = api.fetch_questions(request).await?;
    let fetched = results.len();
    results.retain(|raw| !raw.incorrect_answers.is_empty());
    if results.len() < fetched {
        log::warn!(
            "Dropped {} question(s) without incorrect answers",
            fetched - results.len()
        );
    }
    if results.is_empty() {
        return Err(ApiError::EmptyResults);
    }
    Ok(results)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;
    use tokio::time::Instant;

    use super::*;

    #[derive(Clone, Copy)]
    enum Reply {
        Questions,
        Empty,
        Fail,
        SingleAnswer,
        Mixed,
    }

    fn raw_question(incorrect: &[&str]) -> RawQuestion {
        RawQuestion {
            question: "Sample Question".to_string(),
            correct_answer: "Correct Answer".to_string(),
            incorrect_answers: incorrect.iter().map(|s| s.to_string()).collect(),
        }
    }

    struct ScriptedApi {
        token: Option<&'static str>,
        replies: Mutex<VecDeque<Reply>>,
        fallback: Reply,
        calls: Mutex<Vec<(Instant, QuizRequest)>>,
    }

    impl ScriptedApi {
        fn new(token: Option<&'static str>, replies: Vec<Reply>, fallback: Reply) -> Self {
            Self {
                token,
                replies: Mutex::new(replies.into()),
                fallback,
                calls: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> Vec<(Instant, QuizRequest)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl TriviaApi for ScriptedApi {
        async fn request_token(&self) -> Result<String, ApiError> {
            self.token
                .map(str::to_string)
                .ok_or(ApiError::HttpStatus(reqwest::StatusCode::INTERNAL_SERVER_ERROR))
        }

        async fn fetch_questions(
            &self,
            request: &QuizRequest,
        ) -> Result<Vec<RawQuestion>, ApiError> {
            self.calls
                .lock()
                .unwrap()
                .push((Instant::now(), request.clone()));
            let reply = self
                .replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(self.fallback);

            match reply {
                Reply::Questions => Ok(vec![raw_question(&["Wrong Answer 1"])]),
                Reply::Empty => Ok(Vec::new()),
                Reply::SingleAnswer => Ok(vec![raw_question(&[])]),
                Reply::Mixed => Ok(vec![raw_question(&[]), raw_question(&["Wrong Answer 1"])]),
                Reply::Fail => Err(ApiError::HttpStatus(
                    reqwest::StatusCode::SERVICE_UNAVAILABLE,
                )),
            }
        }
    }

    fn settings(quiz_count: usize) -> LoaderSettings {
        LoaderSettings::default().with_quiz_count(quiz_count)
    }

    #[tokio::test(start_paused = true)]
    async fn fetches_are_staggered_one_second_apart() {
        let api = Arc::new(ScriptedApi::new(Some("tok"), Vec::new(), Reply::Questions));
        let start = Instant::now();

        let service = QuizService::new(api.clone(), settings(3));
        service.wait_loaded().await;

        let offsets: Vec<u64> = api
            .calls()
            .iter()
            .map(|(at, _)| (*at - start).as_secs())
            .collect();
        assert_eq!(offsets, vec![0, 1, 2]);

        let ids: Vec<String> = service
            .quizzes()
            .borrow()
            .iter()
            .map(|quiz| quiz.id.clone())
            .collect();
        assert_eq!(ids, vec!["0", "1", "2"]);
        assert!(api.calls().iter().all(|(_, request)| request.token == "tok"));
        assert_eq!(service.session_token(), Some("tok"));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_results_are_retried_three_times_then_dropped() {
        let api = Arc::new(ScriptedApi::new(Some("tok"), Vec::new(), Reply::Empty));
        let start = Instant::now();

        let service = QuizService::new(api.clone(), settings(1));
        service.wait_loaded().await;

        let calls = api.calls();
        let offsets: Vec<u64> = calls.iter().map(|(at, _)| (*at - start).as_secs()).collect();
        assert_eq!(offsets, vec![0, 1, 2, 3]);
        assert!(calls.iter().all(|(_, request)| *request == calls[0].1));
        assert!(service.quizzes().borrow().is_empty());
        assert!(service.is_loaded());
    }

    #[tokio::test(start_paused = true)]
    async fn transient_failure_recovers_on_retry() {
        let api = Arc::new(ScriptedApi::new(
            Some("tok"),
            vec![Reply::Fail, Reply::Empty],
            Reply::Questions,
        ));

        let service = QuizService::new(api.clone(), settings(1));
        service.wait_loaded().await;

        assert_eq!(api.calls().len(), 3);
        let quizzes = service.quizzes().borrow().clone();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].id, "0");
        assert_eq!(quizzes[0].name, category_name(api.calls()[0].1.category));
    }

    #[tokio::test(start_paused = true)]
    async fn questions_without_incorrect_answers_are_dropped() {
        let api = Arc::new(ScriptedApi::new(Some("tok"), vec![Reply::Mixed], Reply::Questions));

        let service = QuizService::new(api.clone(), settings(1));
        service.wait_loaded().await;

        assert_eq!(api.calls().len(), 1);
        let quizzes = service.quizzes().borrow().clone();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].total_questions(), 1);
        assert!(quizzes[0].questions.iter().all(|q| q.answers.len() >= 2));
    }

    #[tokio::test(start_paused = true)]
    async fn batch_of_single_answer_questions_is_retried() {
        let api = Arc::new(ScriptedApi::new(
            Some("tok"),
            vec![Reply::SingleAnswer],
            Reply::Questions,
        ));
        let start = Instant::now();

        let service = QuizService::new(api.clone(), settings(1));
        service.wait_loaded().await;

        let offsets: Vec<u64> = api
            .calls()
            .iter()
            .map(|(at, _)| (*at - start).as_secs())
            .collect();
        assert_eq!(offsets, vec![0, 1]);
        let quizzes = service.quizzes().borrow().clone();
        assert_eq!(quizzes.len(), 1);
        assert_eq!(quizzes[0].questions[0].answers.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn one_abandoned_fetch_does_not_block_the_others() {
        // Fetch 0 runs alone in its first second, so it eats the failures.
        let api = Arc::new(ScriptedApi::new(
            Some("tok"),
            vec![Reply::Fail, Reply::Fail, Reply::Fail, Reply::Fail],
            Reply::Questions,
        ));
        let spread_out = LoaderSettings {
            stagger: Duration::from_secs(10),
            ..settings(3)
        };

        let service = QuizService::new(api.clone(), spread_out);
        service.wait_loaded().await;

        let ids: Vec<String> = service
            .quizzes()
            .borrow()
            .iter()
            .map(|quiz| quiz.id.clone())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[tokio::test(start_paused = true)]
    async fn token_failure_falls_back_to_empty_token() {
        let api = Arc::new(ScriptedApi::new(None, Vec::new(), Reply::Questions));

        let service = QuizService::new(api.clone(), settings(2));
        service.wait_loaded().await;

        assert_eq!(service.session_token(), Some(""));
        assert_eq!(service.quizzes().borrow().len(), 2);
        assert!(api.calls().iter().all(|(_, request)| request.token.is_empty()));
    }
}
