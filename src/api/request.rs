use std::fmt;
use std::ops::RangeInclusive;

use rand::seq::IndexedRandom;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    Multiple,
    Boolean,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Multiple, QuestionType::Boolean];

    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Multiple => "multiple",
            QuestionType::Boolean => "boolean",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters of one question batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizRequest {
    pub amount: u32,
    pub category: u32,
    pub difficulty: Difficulty,
    pub kind: QuestionType,
    pub token: String,
}

impl QuizRequest {
    /// Pick amount, category, difficulty and type independently at random.
    pub fn random(
        token: &str,
        amounts: RangeInclusive<u32>,
        categories: RangeInclusive<u32>,
    ) -> Self {
        let mut rng = rand::rng();
        let difficulty = *Difficulty::ALL.choose(&mut rng).unwrap_or(&Difficulty::Easy);
        let kind = *QuestionType::ALL
            .choose(&mut rng)
            .unwrap_or(&QuestionType::Multiple);

        Self {
            amount: rng.random_range(amounts),
            category: rng.random_range(categories),
            difficulty,
            kind,
            token: token.to_string(),
        }
    }

    /// Query pairs in the order the service documents them.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("amount", self.amount.to_string()),
            ("category", self.category.to_string()),
            ("difficulty", self.difficulty.to_string()),
            ("type", self.kind.to_string()),
        ];
        if !self.token.is_empty() {
            pairs.push(("token", self.token.clone()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_request_stays_in_range() {
        for _ in 0..200 {
            let request = QuizRequest::random("tok", 5..=10, 9..=32);
            assert!((5..=10).contains(&request.amount));
            assert!((9..=32).contains(&request.category));
            assert_eq!(request.token, "tok");
        }
    }

    #[test]
    fn query_includes_token_when_present() {
        let request = QuizRequest {
            amount: 5,
            category: 9,
            difficulty: Difficulty::Easy,
            kind: QuestionType::Multiple,
            token: "mockToken".to_string(),
        };

        let query = request.query();
        assert_eq!(
            query,
            vec![
                ("amount", "5".to_string()),
                ("category", "9".to_string()),
                ("difficulty", "easy".to_string()),
                ("type", "multiple".to_string()),
                ("token", "mockToken".to_string()),
            ]
        );
    }

    #[test]
    fn empty_token_is_omitted() {
        let request = QuizRequest {
            amount: 7,
            category: 21,
            difficulty: Difficulty::Hard,
            kind: QuestionType::Boolean,
            token: String::new(),
        };

        assert!(request.query().iter().all(|(key, _)| *key != "token"));
    }
}
