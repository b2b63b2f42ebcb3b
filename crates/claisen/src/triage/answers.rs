use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::questions::{catalog, find_question};

/// Errors raised while recording answers against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("unknown question '{0}'")]
    UnknownQuestion(String),
    #[error("invalid answer for '{question}': {value:?} (expected {expected})")]
    InvalidAnswer {
        question: String,
        value: String,
        expected: String,
    },
    #[error("question '{question}' is not asked for the answers given so far")]
    NotApplicable { question: String },
}

/// A single recorded answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Integer(i64),
    Text(String),
    Choices(BTreeSet<String>),
}

impl AnswerValue {
    pub fn choices<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        AnswerValue::Choices(items.into_iter().map(Into::into).collect())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Exact string comparison used by visibility predicates.
    pub fn matches_literal(&self, expected: &str) -> bool {
        match self {
            AnswerValue::Text(text) => text == expected,
            AnswerValue::Integer(number) => number.to_string() == expected,
            AnswerValue::Choices(_) => false,
        }
    }

    /// Single-choice equality or multi-choice membership.
    pub fn includes(&self, option: &str) -> bool {
        match self {
            AnswerValue::Text(text) => text == option,
            AnswerValue::Choices(choices) => choices.contains(option),
            AnswerValue::Integer(_) => false,
        }
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Integer(number) => write!(f, "{number}"),
            AnswerValue::Text(text) => f.write_str(text),
            AnswerValue::Choices(choices) => {
                let joined: Vec<&str> = choices.iter().map(String::as_str).collect();
                f.write_str(&joined.join("; "))
            }
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Text(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Text(value)
    }
}

impl From<i64> for AnswerValue {
    fn from(value: i64) -> Self {
        AnswerValue::Integer(value)
    }
}

/// Respondent answers keyed by question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    answers: BTreeMap<String, AnswerValue>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a whole pre-supplied bundle in catalog order. Stops at the first offending
    /// entry; an answer to a question hidden by earlier answers is rejected.
    pub fn from_bundle(mut bundle: BTreeMap<String, AnswerValue>) -> Result<Self, AnswerError> {
        if let Some(unknown) = bundle.keys().find(|id| find_question(id).is_none()) {
            return Err(AnswerError::UnknownQuestion(unknown.clone()));
        }

        let mut answers = Self::new();
        for question in catalog() {
            let Some(value) = bundle.remove(question.id) else {
                continue;
            };
            if !question.is_applicable(&answers) {
                return Err(AnswerError::NotApplicable {
                    question: question.id.to_string(),
                });
            }
            answers.record(question.id, value)?;
        }
        Ok(answers)
    }

    /// Validate `value` against the catalog entry for `id` and store it.
    ///
    /// The set is left untouched when validation fails.
    pub fn record(&mut self, id: &str, value: AnswerValue) -> Result<(), AnswerError> {
        let question =
            find_question(id).ok_or_else(|| AnswerError::UnknownQuestion(id.to_string()))?;
        let value = question.validate(value)?;
        self.answers.insert(question.id.to_string(), value);
        Ok(())
    }

    /// Store without validation, for replaying journal entries and building fixtures.
    pub fn insert_unchecked(&mut self, id: impl Into<String>, value: impl Into<AnswerValue>) {
        self.answers.insert(id.into(), value.into());
    }

    pub fn get(&self, id: &str) -> Option<&AnswerValue> {
        self.answers.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.get(id).and_then(AnswerValue::as_text)
    }

    /// True when the recorded answer for `id` is `option` (or contains it, for sets).
    pub fn is(&self, id: &str, option: &str) -> bool {
        self.get(id).is_some_and(|value| value.includes(option))
    }

    /// True when the single-choice answer for `id` is one of `options`.
    pub fn is_any(&self, id: &str, options: &[&str]) -> bool {
        self.text(id)
            .is_some_and(|text| options.iter().any(|option| *option == text))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AnswerValue)> {
        self.answers.iter().map(|(id, value)| (id.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for AnswerSet
where
    K: Into<String>,
    V: Into<AnswerValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut answers = AnswerSet::new();
        for (id, value) in iter {
            answers.insert_unchecked(id, value);
        }
        answers
    }
}
