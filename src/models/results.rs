/// Score summary for one finished play session.
///
/// `average_time_per_question` is the raw `total_time / total_questions`;
/// the finish screen derives its own display value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct QuizResults {
    pub score: f64,
    pub correct_answers: u32,
    pub total_time: u64,
    pub average_time_per_question: f64,
    pub correct_answer_percentage: f64,
}

impl QuizResults {
    pub fn compute(correct_answers: u32, total_questions: usize, total_time: u64) -> Self {
        if total_questions == 0 {
            return Self {
                correct_answers,
                total_time,
                ..Self::default()
            };
        }

        let total = total_questions as f64;
        let correct = f64::from(correct_answers);
        let percentage = (correct / total) * 100.0;

        Self {
            score: correct * (100.0 / total),
            correct_answers,
            total_time,
            average_time_per_question: total_time as f64 / total,
            correct_answer_percentage: round_to_hundredths(percentage),
        }
    }
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_correct_question_scores_full_marks() {
        let results = QuizResults::compute(1, 1, 60);
        assert_eq!(results.score, 100.0);
        assert_eq!(results.correct_answer_percentage, 100.0);
        assert_eq!(results.average_time_per_question, 60.0);
        assert_eq!(results.total_time, 60);
    }

    #[test]
    fn percentage_is_rounded_to_two_decimals() {
        let results = QuizResults::compute(2, 3, 30);
        assert_eq!(results.correct_answer_percentage, 66.67);
        assert_eq!(results.average_time_per_question, 10.0);
    }

    #[test]
    fn empty_quiz_yields_zero_score() {
        let results = QuizResults::compute(0, 0, 12);
        assert_eq!(results.score, 0.0);
        assert_eq!(results.correct_answer_percentage, 0.0);
        assert_eq!(results.average_time_per_question, 0.0);
    }
}
