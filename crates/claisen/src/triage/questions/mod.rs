//! Question catalog and the two pure operations the collectors rely on:
//! visibility (`is_applicable`) and kind-aware validation (`validate`).

mod catalog;

use std::collections::BTreeSet;

use serde::Serialize;

use super::answers::{AnswerError, AnswerSet, AnswerValue};

/// Input shape expected for a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    FreeText,
    Integer,
    SingleChoice,
    MultiChoice,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionKind::FreeText => "free text",
            QuestionKind::Integer => "whole number",
            QuestionKind::SingleChoice => "single choice",
            QuestionKind::MultiChoice => "multiple choice",
        }
    }

    pub const fn is_choice(self) -> bool {
        matches!(self, QuestionKind::SingleChoice | QuestionKind::MultiChoice)
    }
}

/// Thematic grouping used to split initial and follow-up questionnaires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSection {
    Demographics,
    Symptoms,
    Cardiac,
    AlarmFeatures,
    Lifestyle,
    Medication,
    BowelHistory,
    Respiratory,
    Psychosocial,
    FollowUp,
}

impl QuestionSection {
    pub const fn label(self) -> &'static str {
        match self {
            QuestionSection::Demographics => "Demographics",
            QuestionSection::Symptoms => "Symptom characterisation",
            QuestionSection::Cardiac => "Cardiac elimination",
            QuestionSection::AlarmFeatures => "Alarm features",
            QuestionSection::Lifestyle => "Lifestyle & diet",
            QuestionSection::Medication => "Medication history",
            QuestionSection::BowelHistory => "Bowel & GI history",
            QuestionSection::Respiratory => "Respiratory / ENT",
            QuestionSection::Psychosocial => "Psychosocial & stress",
            QuestionSection::FollowUp => "Follow-up",
        }
    }
}

/// Static definition of a single question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuestionSpec {
    pub id: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub section: QuestionSection,
    pub options: &'static [&'static str],
    /// Every `(question_id, value)` pair must match a recorded answer for the question to be asked.
    pub ask_if: &'static [(&'static str, &'static str)],
}

impl QuestionSpec {
    pub const fn new(
        id: &'static str,
        prompt: &'static str,
        kind: QuestionKind,
        section: QuestionSection,
        options: &'static [&'static str],
    ) -> Self {
        Self {
            id,
            prompt,
            kind,
            section,
            options,
            ask_if: &[],
        }
    }

    pub const fn ask_if(mut self, predicate: &'static [(&'static str, &'static str)]) -> Self {
        self.ask_if = predicate;
        self
    }

    /// True when the question has no predicate or every predicate pair matches exactly.
    pub fn is_applicable(&self, answers: &AnswerSet) -> bool {
        self.ask_if.iter().all(|(key, required)| {
            answers
                .get(key)
                .is_some_and(|value| value.matches_literal(required))
        })
    }

    pub fn has_option(&self, candidate: &str) -> bool {
        self.options.iter().any(|option| *option == candidate)
    }

    /// Check a candidate value against the question kind and option set.
    ///
    /// Choice options are compared byte for byte: casing, punctuation, en-dashes and curly
    /// apostrophes are part of an option's identity.
    pub fn validate(&self, value: AnswerValue) -> Result<AnswerValue, AnswerError> {
        match (self.kind, value) {
            (QuestionKind::FreeText, AnswerValue::Text(text)) => Ok(AnswerValue::Text(text)),
            (QuestionKind::FreeText, AnswerValue::Integer(number)) => {
                Ok(AnswerValue::Text(number.to_string()))
            }
            (QuestionKind::Integer, AnswerValue::Integer(number)) => Ok(AnswerValue::Integer(number)),
            (QuestionKind::Integer, AnswerValue::Text(text)) => match text.trim().parse::<i64>() {
                Ok(number) => Ok(AnswerValue::Integer(number)),
                Err(_) => Err(self.invalid(text, "a whole number")),
            },
            (QuestionKind::SingleChoice, AnswerValue::Text(text)) => {
                if self.has_option(&text) {
                    Ok(AnswerValue::Text(text))
                } else {
                    Err(self.invalid(text, "one of the listed options"))
                }
            }
            (QuestionKind::MultiChoice, AnswerValue::Text(text)) => {
                self.validate(AnswerValue::Choices(BTreeSet::from([text])))
            }
            (QuestionKind::MultiChoice, AnswerValue::Choices(choices)) => {
                match choices.iter().find(|choice| !self.has_option(choice)) {
                    Some(unknown) => Err(self.invalid(unknown.clone(), "only listed options")),
                    None => Ok(AnswerValue::Choices(choices)),
                }
            }
            (_, other) => Err(self.invalid(other.to_string(), self.kind.label())),
        }
    }

    fn invalid(&self, value: String, expected: &str) -> AnswerError {
        AnswerError::InvalidAnswer {
            question: self.id.to_string(),
            value,
            expected: expected.to_string(),
        }
    }
}

/// Which part of the catalog a session walks through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionnaireMode {
    #[default]
    Initial,
    FollowUp,
}

impl QuestionnaireMode {
    pub fn includes(self, section: QuestionSection) -> bool {
        match self {
            QuestionnaireMode::Initial => section != QuestionSection::FollowUp,
            QuestionnaireMode::FollowUp => section == QuestionSection::FollowUp,
        }
    }
}

/// Full catalog in asking order.
pub fn catalog() -> &'static [QuestionSpec] {
    catalog::CATALOG
}

pub fn find_question(id: &str) -> Option<&'static QuestionSpec> {
    catalog::CATALOG.iter().find(|question| question.id == id)
}

/// Questions belonging to `mode`, in asking order, before visibility is applied.
pub fn questions_for(mode: QuestionnaireMode) -> impl Iterator<Item = &'static QuestionSpec> {
    catalog::CATALOG
        .iter()
        .filter(move |question| mode.includes(question.section))
}

/// The next question in `mode` that is unanswered and currently visible.
pub fn next_question(mode: QuestionnaireMode, answers: &AnswerSet) -> Option<&'static QuestionSpec> {
    questions_for(mode)
        .find(|question| answers.get(question.id).is_none() && question.is_applicable(answers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn question(id: &str) -> &'static QuestionSpec {
        find_question(id).expect("question in catalog")
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut seen = HashSet::new();
        for question in catalog() {
            assert!(seen.insert(question.id), "duplicate id {}", question.id);
        }
    }

    #[test]
    fn visibility_predicates_only_reference_earlier_questions() {
        let mut earlier = HashSet::new();
        for question in catalog() {
            for (key, _) in question.ask_if {
                assert!(
                    earlier.contains(key),
                    "{} depends on {key} which is not asked before it",
                    question.id
                );
            }
            earlier.insert(question.id);
        }
    }

    #[test]
    fn choice_questions_carry_options() {
        for question in catalog() {
            assert_eq!(
                question.kind.is_choice(),
                !question.options.is_empty(),
                "{} options do not match its kind",
                question.id
            );
        }
    }

    #[test]
    fn pregnancy_question_follows_gender_answer() {
        let pregnant = question("demographics_pregnant");
        let mut answers = AnswerSet::new();
        assert!(!pregnant.is_applicable(&answers));

        answers.insert_unchecked("demographics_gender", "Male");
        assert!(!pregnant.is_applicable(&answers));

        answers.insert_unchecked("demographics_gender", "Female");
        assert!(pregnant.is_applicable(&answers));

        answers.insert_unchecked("demographics_gender", "female");
        assert!(!pregnant.is_applicable(&answers));
    }

    #[test]
    fn unconditional_questions_are_always_applicable() {
        assert!(question("symptom_type").is_applicable(&AnswerSet::new()));
    }

    #[test]
    fn integer_questions_require_whole_numbers() {
        let age = question("demographics_age");
        assert_eq!(
            age.validate(AnswerValue::from(" 42 ")).expect("parses"),
            AnswerValue::Integer(42)
        );
        for raw in ["forty", "42.5", ""] {
            match age.validate(AnswerValue::from(raw)) {
                Err(AnswerError::InvalidAnswer { question, value, .. }) => {
                    assert_eq!(question, "demographics_age");
                    assert_eq!(value, raw);
                }
                other => panic!("expected invalid answer for {raw:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn single_choice_matches_options_exactly() {
        let free_period = question("symptom_free_period");
        assert!(free_period
            .validate(AnswerValue::from("Can’t recall being symptom-free"))
            .is_ok());
        assert!(free_period
            .validate(AnswerValue::from("Can't recall being symptom-free"))
            .is_err());

        let intensity = question("symptom_intensity");
        assert!(intensity.validate(AnswerValue::from("1–3: Mild")).is_ok());
        assert!(intensity.validate(AnswerValue::from("1-3: Mild")).is_err());
        assert!(intensity.validate(AnswerValue::from("1–3: mild")).is_err());
    }

    #[test]
    fn multi_choice_accepts_subsets_only() {
        let meds = question("meds_reflux");
        let valid = AnswerValue::choices([
            "NSAIDs (e.g. ibuprofen, naproxen, diclofenac)",
            "SSRIs (e.g. sertraline, fluoxetine)",
        ]);
        assert_eq!(meds.validate(valid.clone()).expect("subset accepted"), valid);

        let invalid = AnswerValue::choices(["SSRIs (e.g. sertraline, fluoxetine)", "Aspirin"]);
        match meds.validate(invalid) {
            Err(AnswerError::InvalidAnswer { value, .. }) => assert_eq!(value, "Aspirin"),
            other => panic!("expected invalid answer, got {other:?}"),
        }

        let single = meds
            .validate(AnswerValue::from("None of the above"))
            .expect("single option promoted to a set");
        assert_eq!(single, AnswerValue::choices(["None of the above"]));
    }

    #[test]
    fn sets_are_rejected_for_single_choice_questions() {
        let result = question("symptom_type").validate(AnswerValue::choices(["Burning sensation"]));
        assert!(matches!(result, Err(AnswerError::InvalidAnswer { .. })));
    }

    #[test]
    fn modes_partition_the_catalog() {
        let initial = questions_for(QuestionnaireMode::Initial).count();
        let follow_up = questions_for(QuestionnaireMode::FollowUp).count();
        assert_eq!(initial + follow_up, catalog().len());
        assert!(questions_for(QuestionnaireMode::FollowUp)
            .any(|question| question.id == "followup_alarm_features"));
    }

    #[test]
    fn next_question_skips_answered_and_hidden_questions() {
        let mut answers = AnswerSet::new();
        answers.insert_unchecked("demographics_name", "Sam");
        answers.insert_unchecked("demographics_age", AnswerValue::Integer(30));
        answers.insert_unchecked("demographics_gender", "Male");

        let next = next_question(QuestionnaireMode::Initial, &answers).expect("more questions");
        assert_eq!(next.id, "symptom_type");
    }
}
