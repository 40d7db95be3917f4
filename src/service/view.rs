use tokio::sync::watch;

use crate::models::Quiz;

type Projection<T> = Box<dyn Fn(&[Quiz]) -> T + Send + Sync>;

/// Live projection of the quiz list.
///
/// New views see the current list straight away; [`QuizView::changed`]
/// resolves with a fresh projection every time the list grows.
pub struct QuizView<T> {
    rx: watch::Receiver<Vec<Quiz>>,
    project: Projection<T>,
}

impl<T> QuizView<T> {
    pub(crate) fn new<F>(rx: watch::Receiver<Vec<Quiz>>, project: F) -> Self
    where
        F: Fn(&[Quiz]) -> T + Send + Sync + 'static,
    {
        Self {
            rx,
            project: Box::new(project),
        }
    }

    /// Projection of the list as it is now.
    pub fn current(&self) -> T {
        let quizzes = self.rx.borrow();
        (self.project)(quizzes.as_slice())
    }

    /// Wait for the next change. `None` once the service is gone.
    pub async fn changed(&mut self) -> Option<T> {
        self.rx.changed().await.ok()?;
        let quizzes = self.rx.borrow_and_update();
        Some((self.project)(quizzes.as_slice()))
    }
}
