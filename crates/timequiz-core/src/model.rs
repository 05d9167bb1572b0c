//! Core data model types for timequiz.
//!
//! A [`QuestionSet`] is built once at startup, never modified, and handed
//! to the runner for the length of one session.

use serde::Serialize;

use crate::normalize::normalize;

/// A single prompt and the answer that scores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// Text shown to the user, kept verbatim.
    pub prompt: String,
    /// Expected answer, stored normalized.
    pub answer: String,
}

impl Question {
    /// Create a question, normalizing the expected answer.
    pub fn new(prompt: impl Into<String>, answer: &str) -> Self {
        Self {
            prompt: prompt.into(),
            answer: normalize(answer),
        }
    }
}

/// An ordered collection of questions. Presentation order is load order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuestionSet {
    questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    /// Build a set from `(prompt, answer)` pairs.
    pub fn from_pairs<I, P, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (P, A)>,
        P: Into<String>,
        A: AsRef<str>,
    {
        Self {
            questions: pairs
                .into_iter()
                .map(|(prompt, answer)| Question::new(prompt, answer.as_ref()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.questions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_answer_is_normalized() {
        let q = Question::new("Capital of France?", "  Paris ");
        assert_eq!(q.prompt, "Capital of France?");
        assert_eq!(q.answer, "paris");
    }

    #[test]
    fn prompt_is_kept_verbatim() {
        let q = Question::new("  5 + 5 ", "10");
        assert_eq!(q.prompt, "  5 + 5 ");
    }

    #[test]
    fn from_pairs_preserves_order() {
        let set = QuestionSet::from_pairs([("2+2", "4"), ("3+3", "6"), ("1+1", "2")]);
        assert_eq!(set.len(), 3);
        let prompts: Vec<&str> = set.iter().map(|q| q.prompt.as_str()).collect();
        assert_eq!(prompts, ["2+2", "3+3", "1+1"]);
        assert_eq!(set.get(1).map(|q| q.answer.as_str()), Some("6"));
        assert!(set.get(3).is_none());
    }

    #[test]
    fn set_serializes_in_load_order() {
        let set = QuestionSet::from_pairs([("Capital of France?", " Paris"), ("2+2", "4")]);
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "questions": [
                    { "prompt": "Capital of France?", "answer": "paris" },
                    { "prompt": "2+2", "answer": "4" }
                ]
            })
        );
    }

    #[test]
    fn empty_set() {
        let set = QuestionSet::default();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
