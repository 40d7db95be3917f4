use rand::seq::SliceRandom;

use crate::api::RawQuestion;
use crate::models::{Question, Quiz};

/// Merge the incorrect answers and the correct one into a shuffled list.
pub fn build_question(raw: RawQuestion) -> Question {
    let RawQuestion {
        question,
        correct_answer,
        incorrect_answers,
    } = raw;

    let mut answers = incorrect_answers;
    answers.push(correct_answer.clone());
    answers.shuffle(&mut rand::rng());

    Question {
        question,
        answers,
        correct_answer,
    }
}

/// Quiz for the `index`-th fetch. The id is the index rendered as a string.
pub fn build_quiz(index: usize, category_name: &str, results: Vec<RawQuestion>) -> Quiz {
    Quiz {
        id: index.to_string(),
        name: category_name.to_string(),
        questions: results.into_iter().map(build_question).collect(),
    }
}
