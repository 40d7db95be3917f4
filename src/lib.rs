//! # trivia-quiz
//!
//! A terminal trivia quiz over an Open Trivia DB compatible service.
//!
//! At startup the [`QuizService`] requests a session token and prefetches a
//! batch of quizzes in the background, one fetch per second, retrying the
//! ones that come back empty. The screens (quiz list, play, results) read
//! that state as it arrives.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use trivia_quiz::{LoaderSettings, QuizError, Route, TriviaQuiz, DEFAULT_API_URL};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let quiz = TriviaQuiz::connect(DEFAULT_API_URL, LoaderSettings::default(), Route::Home);
//!     quiz.run().await
//! }
//! ```

mod app;
pub mod api;
pub mod config;
mod data;
mod error;
pub mod models;
pub mod router;
pub mod service;
pub mod terminal;
mod ui;
pub mod views;

use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};

pub use api::{OpenTdbClient, TriviaApi, DEFAULT_API_URL};
pub use app::{App, Screen};
pub use config::LoaderSettings;
pub use data::category_name;
pub use error::{ApiError, QuizError};
pub use models::{Question, Quiz, QuizResults};
pub use router::{Route, Router};
pub use service::QuizService;

/// How long the event loop waits for a key before redrawing.
const FRAME_INTERVAL: Duration = Duration::from_millis(100);

/// A quiz session bound to the terminal.
pub struct TriviaQuiz {
    app: App,
}

impl TriviaQuiz {
    /// Build on an existing service, opening `start` first.
    pub fn new(service: QuizService, start: Route) -> Self {
        Self {
            app: App::new(service, start),
        }
    }

    /// Start loading quizzes from the trivia service at `api_url`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn connect(api_url: &str, settings: LoaderSettings, start: Route) -> Self {
        let api = Arc::new(OpenTdbClient::new(api_url));
        Self::new(QuizService::new(api, settings), start)
    }

    /// Run the quiz in the terminal until the user quits.
    pub async fn run(mut self) -> Result<(), QuizError> {
        let mut term = terminal::TerminalSession::enter()?;
        run_event_loop(&mut term, &mut self.app).await
    }

    pub fn app(&self) -> &App {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

async fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), QuizError> {
    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, app))?;

        if !event::poll(FRAME_INTERVAL)? {
            tokio::task::yield_now().await;
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            handle_input(app, key.code);
            app.sync_screen();
        }
    }

    Ok(())
}

fn handle_input(app: &mut App, key: KeyCode) {
    let App { screen, router, .. } = &mut *app;

    let quit = match screen {
        Screen::Home(view) => handle_home_input(view, router, key),
        Screen::Play(view) => handle_play_input(view, router, key),
        Screen::Finish(view) => handle_finish_input(view, router, key),
    };
    if quit {
        app.should_quit = true;
    }
}

/// Returns true if the app should exit.
fn handle_home_input(view: &mut views::HomeView, router: &mut Router, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => view.select_next(),
        KeyCode::Up | KeyCode::Char('k') => view.select_previous(),
        KeyCode::Enter => {
            if let Some(quiz_id) = view.selected_quiz_id() {
                view.on_play(&quiz_id, router);
            }
        }
        KeyCode::Char('l') | KeyCode::Char('L') => view.on_lucky_click(router),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

fn handle_play_input(view: &mut views::PlayView, router: &mut Router, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => view.highlight_next(),
        KeyCode::Up | KeyCode::Char('k') => view.highlight_previous(),
        KeyCode::Char(' ') => view.select_highlighted(),
        KeyCode::Enter => view.on_next_question(router),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => view.on_cancel_quiz(router),
        _ => {}
    }
    false
}

fn handle_finish_input(view: &mut views::FinishView, router: &mut Router, key: KeyCode) -> bool {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter => view.on_restart_quiz(router),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return true,
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let quiz = Quiz {
            id: "0".to_string(),
            name: "Sports".to_string(),
            questions: vec![Question {
                question: "A marathon is 42.195 km.".to_string(),
                answers: vec!["True".to_string(), "False".to_string()],
                correct_answer: "True".to_string(),
            }],
        };
        App::new(QuizService::preloaded(vec![quiz]), Route::Home)
    }

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            handle_input(app, *key);
            app.sync_screen();
        }
    }

    #[tokio::test]
    async fn full_round_through_the_keyboard() {
        let mut app = app();

        press(
            &mut app,
            &[KeyCode::Enter, KeyCode::Char(' '), KeyCode::Enter],
        );

        match app.screen() {
            Screen::Finish(view) => assert_eq!(view.correct_answers(), 1),
            _ => panic!("expected the finish screen"),
        }

        press(&mut app, &[KeyCode::Char('r')]);
        assert!(matches!(app.screen(), Screen::Home(_)));
        assert_eq!(app.service().correct_answers(), 0);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn enter_without_choosing_stays_on_the_question() {
        let mut app = app();

        press(&mut app, &[KeyCode::Enter, KeyCode::Enter]);

        assert!(matches!(app.screen(), Screen::Play(view) if view.current_question_index() == 0));
    }

    #[tokio::test]
    async fn escape_cancels_then_quits() {
        let mut app = app();

        press(&mut app, &[KeyCode::Char('l'), KeyCode::Esc]);
        assert!(matches!(app.screen(), Screen::Home(_)));
        assert_eq!(app.router().previous(), Some(&Route::play("0")));

        press(&mut app, &[KeyCode::Char('q')]);
        assert!(app.should_quit);
    }
}
