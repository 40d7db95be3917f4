/// A named, ordered set of questions produced by one fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct Quiz {
    pub id: String,
    pub name: String,
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }
}

/// A single question. `correct_answer` is always one of `answers`.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub question: String,
    pub answers: Vec<String>,
    pub correct_answer: String,
}
