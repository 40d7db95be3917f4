use crate::models::{Question, Quiz};
use crate::router::{Route, Router};
use crate::service::{QuizService, QuizView};

use super::Ticker;

/// Drives one quiz session: one question at a time, answers sent to the
/// service, elapsed seconds counted locally.
///
/// The ticker is released when the view is dropped, whichever way the
/// session ended.
pub struct PlayView {
    service: QuizService,
    quiz_id: String,
    quiz: QuizView<Option<Quiz>>,
    current_question_index: usize,
    selected_answer: Option<String>,
    highlighted: usize,
    ticker: Option<Ticker>,
}

impl PlayView {
    pub fn new(service: QuizService, quiz_id: &str) -> Self {
        let quiz = service.quiz_by_id(quiz_id);
        Self {
            service,
            quiz_id: quiz_id.to_string(),
            quiz,
            current_question_index: 0,
            selected_answer: None,
            highlighted: 0,
            ticker: None,
        }
    }

    /// Start the local second counter and the service's session timer.
    pub fn init(&mut self) {
        self.ticker = Some(Ticker::start());
        self.service.start_quiz_timer();
    }

    pub fn quiz_id(&self) -> &str {
        &self.quiz_id
    }

    pub fn quiz(&self) -> Option<Quiz> {
        self.quiz.current()
    }

    pub fn current_question(&self) -> Option<Question> {
        self.quiz()?.question(self.current_question_index).cloned()
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    /// Seconds counted since [`PlayView::init`].
    pub fn total_time(&self) -> u64 {
        self.ticker.as_ref().map_or(0, Ticker::seconds)
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    pub fn on_answer_select(&mut self, value: &str) {
        if !value.is_empty() {
            self.selected_answer = Some(value.to_string());
        }
    }

    /// Record the selected answer and advance. Finishing the last question
    /// stops the clock and moves to the finish screen.
    pub fn on_next_question(&mut self, router: &mut Router) {
        let Some(selected) = self.selected_answer.clone() else {
            return;
        };
        let Some(quiz) = self.quiz.current() else {
            return;
        };
        let Some(question) = quiz.question(self.current_question_index) else {
            return;
        };

        self.service.save_answer(
            &quiz.id,
            self.current_question_index,
            &selected,
            &question.correct_answer,
        );
        self.selected_answer = None;
        self.highlighted = 0;
        self.current_question_index += 1;

        if self.current_question_index >= quiz.total_questions() {
            self.stop_ticker();
            self.service.end_quiz_timer();
            self.service.set_total_time(self.total_time());
            router.navigate(Route::finish(quiz.id));
        }
    }

    /// Abandon the quiz. Answers already saved stay counted.
    pub fn on_cancel_quiz(&mut self, router: &mut Router) {
        self.stop_ticker();
        router.navigate(Route::Home);
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.as_mut() {
            ticker.stop();
        }
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    pub fn highlight_next(&mut self) {
        let count = self.answer_count();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn highlight_previous(&mut self) {
        let count = self.answer_count();
        if count > 0 {
            self.highlighted = (self.highlighted.min(count - 1) + count - 1) % count;
        }
    }

    /// Select the answer under the cursor.
    pub fn select_highlighted(&mut self) {
        let answer = self
            .current_question()
            .and_then(|question| question.answers.get(self.highlighted).cloned());
        if let Some(answer) = answer {
            self.on_answer_select(&answer);
        }
    }

    fn answer_count(&self) -> usize {
        self.current_question()
            .map_or(0, |question| question.answers.len())
    }
}
