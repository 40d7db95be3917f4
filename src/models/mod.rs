mod quiz;
mod results;

pub use quiz::{Question, Quiz};
pub use results::QuizResults;
