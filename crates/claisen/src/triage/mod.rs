//! Triage decision engine: question catalog, answer validation, free-text findings,
//! the ordered rule battery and recommendation composition.

pub mod answers;
pub mod checkin;
pub mod engine;
pub mod findings;
pub mod questions;
pub mod recommendation;

#[cfg(test)]
mod tests;

pub use answers::{AnswerError, AnswerSet, AnswerValue};
pub use checkin::{quick_advice, QuickSymptom};
pub use engine::{ProfileDecision, ProfileTier, RuleId, TriageEngine, TriageOutcome};
pub use findings::{extract, Findings, Sentiment, Severity};
pub use questions::{
    catalog, find_question, next_question, questions_for, QuestionKind, QuestionSection,
    QuestionSpec, QuestionnaireMode,
};
pub use recommendation::compose;

/// Assess `answers` together with optional free-text `notes` using the standard battery.
pub fn assign_profile(answers: &AnswerSet, notes: Option<&str>) -> TriageOutcome {
    TriageEngine::new().assess(answers, notes)
}
