//! Quiz data service.
//!
//! [`QuizService`] owns every piece of quiz state: the session token, the
//! quiz list filled in by the startup loader, and the answer/timer
//! bookkeeping of the session being played. Screens hold a cloned handle and
//! only touch that state through its methods.

mod loader;
mod session;
mod view;

use std::sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError};

use rand::seq::IndexedRandom;
use tokio::sync::watch;
use tokio::time::Instant;

use crate::api::TriviaApi;
use crate::config::LoaderSettings;
use crate::models::{Quiz, QuizResults};

use session::SessionState;

pub use view::QuizView;

struct Inner {
    quizzes: watch::Sender<Vec<Quiz>>,
    total_time: watch::Sender<u64>,
    loaded: watch::Sender<bool>,
    token: OnceLock<String>,
    session: Mutex<SessionState>,
}

/// Cheap-to-clone handle to the shared quiz state.
#[derive(Clone)]
pub struct QuizService {
    inner: Arc<Inner>,
}

impl QuizService {
    /// Create the service and start loading quizzes in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(api: Arc<dyn TriviaApi>, settings: LoaderSettings) -> Self {
        let service = Self::empty();
        tokio::spawn(loader::initialize(service.clone(), api, settings));
        service
    }

    /// A service over a fixed quiz list that never talks to the trivia API.
    pub fn preloaded(quizzes: Vec<Quiz>) -> Self {
        let service = Self::empty();
        service.inner.quizzes.send_replace(quizzes);
        service.inner.loaded.send_replace(true);
        service
    }

    fn empty() -> Self {
        let (quizzes, _) = watch::channel(Vec::new());
        let (total_time, _) = watch::channel(0);
        let (loaded, _) = watch::channel(false);

        Self {
            inner: Arc::new(Inner {
                quizzes,
                total_time,
                loaded,
                token: OnceLock::new(),
                session: Mutex::new(SessionState::default()),
            }),
        }
    }

    fn session(&self) -> MutexGuard<'_, SessionState> {
        self.inner
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    /// The token handed out by the trivia API. Empty if the request failed,
    /// `None` while it is still in flight.
    pub fn session_token(&self) -> Option<&str> {
        self.inner.token.get().map(String::as_str)
    }

    pub fn is_loaded(&self) -> bool {
        *self.inner.loaded.borrow()
    }

    /// Resolves once every startup fetch has either landed or been abandoned.
    pub async fn wait_loaded(&self) {
        let mut loaded = self.inner.loaded.subscribe();
        let _ = loaded.wait_for(|done| *done).await;
    }

    /// Live quiz list.
    pub fn quizzes(&self) -> watch::Receiver<Vec<Quiz>> {
        self.inner.quizzes.subscribe()
    }

    /// Live lookup of one quiz.
    pub fn quiz_by_id(&self, id: &str) -> QuizView<Option<Quiz>> {
        let id = id.to_string();
        QuizView::new(self.quizzes(), move |quizzes| {
            quizzes.iter().find(|quiz| quiz.id == id).cloned()
        })
    }

    /// A random quiz, drawn again each time the view is read.
    pub fn random_quiz(&self) -> QuizView<Option<Quiz>> {
        QuizView::new(self.quizzes(), |quizzes| {
            quizzes.choose(&mut rand::rng()).cloned()
        })
    }

    fn find_quiz(&self, id: &str) -> Option<Quiz> {
        self.inner
            .quizzes
            .borrow()
            .iter()
            .find(|quiz| quiz.id == id)
            .cloned()
    }

    pub(crate) fn set_session_token(&self, token: String) {
        if self.inner.token.set(token).is_err() {
            log::warn!("session token already set, keeping the first one");
        }
    }

    pub(crate) fn append_quiz(&self, quiz: Quiz) {
        log::debug!(
            "quiz {} ({}) ready with {} questions",
            quiz.id,
            quiz.name,
            quiz.questions.len()
        );
        self.inner.quizzes.send_modify(|quizzes| quizzes.push(quiz));
    }

    pub(crate) fn mark_loaded(&self) {
        self.inner.loaded.send_replace(true);
    }

    /// Count the answer as correct iff `selected_answer == correct_answer`
    /// and the quiz has a question at `question_index`. Unknown quizzes are
    /// ignored.
    pub fn save_answer(
        &self,
        quiz_id: &str,
        question_index: usize,
        selected_answer: &str,
        correct_answer: &str,
    ) {
        let known = self
            .inner
            .quizzes
            .borrow()
            .iter()
            .find(|quiz| quiz.id == quiz_id)
            .is_some_and(|quiz| quiz.question(question_index).is_some());
        if !known {
            log::debug!("answer for {}#{} ignored", quiz_id, question_index);
            return;
        }

        self.session()
            .record_answer(quiz_id, question_index, selected_answer == correct_answer);
    }

    pub fn correct_answers(&self) -> u32 {
        self.session().correct_answers()
    }

    /// Whether the answer to a question was recorded as correct.
    pub fn answer(&self, quiz_id: &str, question_index: usize) -> Option<bool> {
        self.session().answer(quiz_id, question_index)
    }

    pub fn start_quiz_timer(&self) {
        self.session().start_timer(Instant::now());
    }

    pub fn end_quiz_timer(&self) {
        self.session().end_timer(Instant::now());
    }

    pub fn set_total_time(&self, seconds: u64) {
        self.inner.total_time.send_replace(seconds);
    }

    /// Live total time as published by [`QuizService::set_total_time`].
    pub fn total_time(&self) -> watch::Receiver<u64> {
        self.inner.total_time.subscribe()
    }

    /// Score the session against `quiz_id`. Unknown ids give zeroed results.
    pub fn quiz_results(&self, quiz_id: &str) -> QuizResults {
        let Some(quiz) = self.find_quiz(quiz_id) else {
            return QuizResults::default();
        };

        let session = self.session();
        QuizResults::compute(
            session.correct_answers(),
            quiz.total_questions(),
            session.total_time(),
        )
    }

    /// Clear answers, score and timers. The quiz list is kept.
    pub fn reset_quiz_data(&self) {
        self.session().reset();
    }
}
