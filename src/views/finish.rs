use crate::models::QuizResults;
use crate::router::{Route, Router};
use crate::service::QuizService;

/// Final score screen.
pub struct FinishView {
    service: QuizService,
    quiz_id: Option<String>,
    score: f64,
    correct_answers: u32,
    total_time: u64,
    correct_answer_percentage: f64,
    average_time_per_question: String,
}

impl FinishView {
    /// Capture the results for `quiz_id` once. Without an id every field
    /// stays zero.
    pub fn new(service: QuizService, quiz_id: Option<&str>) -> Self {
        let results = quiz_id
            .map(|id| service.quiz_results(id))
            .unwrap_or_default();
        let QuizResults {
            score,
            correct_answers,
            total_time,
            correct_answer_percentage,
            ..
        } = results;

        Self {
            service,
            quiz_id: quiz_id.map(str::to_string),
            score,
            correct_answers,
            total_time,
            correct_answer_percentage,
            average_time_per_question: average_time_per_question(correct_answers, total_time),
        }
    }

    pub fn quiz_id(&self) -> Option<&str> {
        self.quiz_id.as_deref()
    }

    pub fn score(&self) -> f64 {
        self.score
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn total_time(&self) -> u64 {
        self.total_time
    }

    pub fn correct_answer_percentage(&self) -> f64 {
        self.correct_answer_percentage
    }

    pub fn average_time_per_question(&self) -> &str {
        &self.average_time_per_question
    }

    /// Go back to the quiz list. Unlike a plain navigation home, this also
    /// resets the service's session so the next round starts from zero
    /// correct answers and no recorded time.
    pub fn on_restart_quiz(&self, router: &mut Router) {
        self.service.reset_quiz_data();
        router.navigate(Route::Home);
    }
}

/// Seconds per correct answer with two decimals, `"0.00"` when none were
/// correct. Halves round up, so 9 s over 8 answers reads `"1.13"`.
pub fn average_time_per_question(correct_answers: u32, total_time: u64) -> String {
    if correct_answers > 0 {
        let average = total_time as f64 / f64::from(correct_answers);
        format!("{:.2}", (average * 100.0).round() / 100.0)
    } else {
        "0.00".to_string()
    }
}
