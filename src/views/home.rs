use tokio::sync::watch;

use crate::models::Quiz;
use crate::router::{Route, Router};
use crate::service::QuizService;

/// Quiz list with "play" and "random" entry points.
pub struct HomeView {
    service: QuizService,
    quizzes: watch::Receiver<Vec<Quiz>>,
    selected: usize,
}

impl HomeView {
    pub fn new(service: QuizService) -> Self {
        let quizzes = service.quizzes();
        Self {
            service,
            quizzes,
            selected: 0,
        }
    }

    pub fn quizzes(&self) -> watch::Ref<'_, Vec<Quiz>> {
        self.quizzes.borrow()
    }

    pub fn is_loading(&self) -> bool {
        !self.service.is_loaded()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        let count = self.quizzes.borrow().len();
        if count > 0 {
            self.selected = (self.selected + 1) % count;
        }
    }

    pub fn select_previous(&mut self) {
        let count = self.quizzes.borrow().len();
        if count > 0 {
            self.selected = (self.selected.min(count - 1) + count - 1) % count;
        }
    }

    pub fn selected_quiz_id(&self) -> Option<String> {
        self.quizzes
            .borrow()
            .get(self.selected)
            .map(|quiz| quiz.id.clone())
    }

    pub fn on_play(&self, quiz_id: &str, router: &mut Router) {
        router.navigate(Route::play(quiz_id));
    }

    /// Jump into a random quiz. Does nothing while the list is empty.
    pub fn on_lucky_click(&self, router: &mut Router) {
        if let Some(quiz) = self.service.random_quiz().current() {
            router.navigate(Route::play(quiz.id));
        }
    }
}
