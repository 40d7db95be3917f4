//! Screen controllers.
//!
//! Each view reads quiz state from the [`QuizService`](crate::service::QuizService)
//! handle it was built with and moves between screens through the
//! [`Router`](crate::router::Router).

mod finish;
mod home;
mod play;
mod ticker;

pub use finish::{average_time_per_question, FinishView};
pub use home::HomeView;
pub use play::PlayView;
pub use ticker::Ticker;
