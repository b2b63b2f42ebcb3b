//! Keyword and phrase extraction over free-text symptom notes.
//!
//! Severity and sentiment are ordered check lists: the first group that matches decides
//! the class, wherever in the text the match occurs. Severity stems accept adverb and
//! comparative endings ("severely", "mildly"); sentiment terms match whole words only.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Terms reported as symptom mentions when they occur anywhere in the notes.
const SYMPTOM_TERMS: &[&str] = &[
    "heartburn",
    "bloating",
    "gas",
    "reflux",
    "indigestion",
    "nausea",
    "vomiting",
    "burping",
    "belching",
    "hiccups",
    "regurgitation",
    "chest pain",
    "sore throat",
    "cough",
    "hoarseness",
    "sour taste",
    "bitter taste",
    "difficulty swallowing",
    "stomach pain",
    "cramps",
    "constipation",
    "diarrhoea",
    "diarrhea",
];

const TRIGGER_TERMS: &[&str] = &[
    "night",
    "lying down",
    "after eating",
    "spicy",
    "fatty",
    "stress",
    "anxiety",
    "exercise",
    "alcohol",
    "caffeine",
];

const TIMING_TERMS: &[&str] = &["night", "morning", "after meals", "bedtime", "daily", "weekly"];

/// Self-described intensity of the notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
    #[default]
    Unknown,
}

impl Severity {
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Emotional register of the notes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Urgent,
    Stable,
    #[default]
    Unknown,
}

impl Sentiment {
    pub const fn label(self) -> &'static str {
        match self {
            Sentiment::Urgent => "urgent",
            Sentiment::Stable => "stable",
            Sentiment::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured signals derived from one piece of free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Findings {
    pub symptoms: BTreeSet<String>,
    pub severity: Severity,
    pub triggers: BTreeSet<String>,
    pub timing: BTreeSet<String>,
    pub sentiment: Sentiment,
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
            && self.triggers.is_empty()
            && self.timing.is_empty()
            && self.severity == Severity::Unknown
            && self.sentiment == Sentiment::Unknown
    }

    pub fn has_trigger(&self, tag: &str) -> bool {
        self.triggers.contains(tag)
    }

    /// Night-time mentioned either as a trigger or as timing.
    pub fn mentions_night(&self) -> bool {
        self.has_trigger("night") || self.timing.contains("night")
    }

    /// Psychological triggers picked up from the notes, in vocabulary order.
    pub fn stress_triggers(&self) -> Vec<&str> {
        ["stress", "anxiety"]
            .into_iter()
            .filter(|tag| self.has_trigger(tag))
            .collect()
    }
}

static SEVERITY_GROUPS: LazyLock<[(Severity, Regex); 3]> = LazyLock::new(|| {
    [
        (
            Severity::Severe,
            Regex::new(
                r"(?i)\b(?:severe\w*|unbearabl\w*|can[’']t sleep|awful\w*|worst|disabling|excruciating\w*|agony|terribl\w*)\b",
            )
            .expect("Invalid regex: severe terms"),
        ),
        (
            Severity::Mild,
            Regex::new(r"(?i)\b(?:mild\w*|slight\w*|minor|a little|a bit|manageable|tolerable)\b")
                .expect("Invalid regex: mild terms"),
        ),
        (
            Severity::Moderate,
            Regex::new(r"(?i)\b(?:moderate\w*|uncomfortabl\w*|bothersome|annoying|noticeabl\w*)\b")
                .expect("Invalid regex: moderate terms"),
        ),
    ]
});

static SENTIMENT_GROUPS: LazyLock<[(Sentiment, Regex); 2]> = LazyLock::new(|| {
    [
        (
            Sentiment::Urgent,
            Regex::new(
                r"(?i)\b(?:can[’']t cope|hopeless|urgent|worried|scared|afraid|emergency|desperate|panicking)\b",
            )
            .expect("Invalid regex: urgent phrases"),
        ),
        (
            Sentiment::Stable,
            Regex::new(
                r"(?i)\b(?:stable|fine|okay|ok|better|improving|improved|under control|settled)\b",
            )
            .expect("Invalid regex: stable phrases"),
        ),
    ]
});

/// Extract findings from optional notes. Total over every input; absent or blank text
/// yields the empty record.
pub fn extract(text: Option<&str>) -> Findings {
    let Some(text) = text.filter(|text| !text.trim().is_empty()) else {
        return Findings::default();
    };
    let lowered = text.to_lowercase();

    Findings {
        symptoms: vocabulary_hits(&lowered, SYMPTOM_TERMS),
        severity: first_matching(SEVERITY_GROUPS.as_slice(), text).unwrap_or_default(),
        triggers: vocabulary_hits(&lowered, TRIGGER_TERMS),
        timing: vocabulary_hits(&lowered, TIMING_TERMS),
        sentiment: first_matching(SENTIMENT_GROUPS.as_slice(), text).unwrap_or_default(),
    }
}

fn vocabulary_hits(lowered: &str, vocabulary: &[&str]) -> BTreeSet<String> {
    vocabulary
        .iter()
        .filter(|term| lowered.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

fn first_matching<T: Copy>(groups: &[(T, Regex)], text: &str) -> Option<T> {
    groups
        .iter()
        .find(|(_, pattern)| pattern.is_match(text))
        .map(|(class, _)| *class)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn absent_and_blank_text_yield_empty_findings() {
        for input in [None, Some(""), Some("   \n")] {
            let findings = extract(input);
            assert!(findings.is_empty(), "expected empty findings for {input:?}");
            assert_eq!(findings.severity, Severity::Unknown);
            assert_eq!(findings.sentiment, Sentiment::Unknown);
        }
    }

    #[test]
    fn awful_night_notes_are_severe_and_nocturnal() {
        let findings = extract(Some("I feel awful at night and can't sleep"));
        assert_eq!(findings.severity, Severity::Severe);
        assert!(findings.triggers.contains("night"));
        assert!(findings.timing.contains("night"));
        assert!(findings.mentions_night());
    }

    #[test]
    fn severe_group_wins_over_mild_regardless_of_position() {
        let findings = extract(Some("Mostly mild during the day but severe after dinner"));
        assert_eq!(findings.severity, Severity::Severe);

        let findings = extract(Some("It was the WORST week, now it is mild"));
        assert_eq!(findings.severity, Severity::Severe);
    }

    #[test]
    fn mild_group_is_checked_before_moderate() {
        let findings = extract(Some("uncomfortable but only a little"));
        assert_eq!(findings.severity, Severity::Mild);
        assert_eq!(extract(Some("Quite bothersome")).severity, Severity::Moderate);
        assert_eq!(extract(Some("it hurts")).severity, Severity::Unknown);
    }

    #[test]
    fn severity_stems_accept_inflected_forms() {
        let findings = extract(Some("Severely bloated at night"));
        assert_eq!(findings.severity, Severity::Severe);
        assert!(findings.mentions_night());

        assert_eq!(extract(Some("pain is mildly annoying")).severity, Severity::Mild);
        assert_eq!(extract(Some("terribly sore")).severity, Severity::Severe);
        assert_eq!(extract(Some("moderately painful")).severity, Severity::Moderate);
    }

    #[test]
    fn sentiment_terms_only_match_whole_words() {
        assert_eq!(extract(Some("I took an antacid")).sentiment, Sentiment::Unknown);
        assert_eq!(extract(Some("Feeling fine today")).sentiment, Sentiment::Stable);
    }

    #[test]
    fn curly_apostrophes_are_recognised() {
        assert_eq!(extract(Some("I can’t sleep")).severity, Severity::Severe);
        assert_eq!(extract(Some("I can’t cope anymore")).sentiment, Sentiment::Urgent);
    }

    #[test]
    fn urgent_sentiment_wins_over_stable() {
        let findings = extract(Some("Feeling better but still worried about it"));
        assert_eq!(findings.sentiment, Sentiment::Urgent);
        assert_eq!(extract(Some("Things are stable")).sentiment, Sentiment::Stable);
        assert_eq!(extract(Some("burning")).sentiment, Sentiment::Unknown);
    }

    #[test]
    fn symptom_mentions_are_deduplicated_and_case_insensitive() {
        let findings = extract(Some("Heartburn, more HEARTBURN and bloating after eating"));
        assert_eq!(findings.symptoms, set(&["bloating", "heartburn"]));
        assert_eq!(findings.triggers, set(&["after eating"]));
    }

    #[test]
    fn trigger_and_timing_vocabularies_are_independent() {
        let findings = extract(Some(
            "Worse with stress and coffee caffeine every morning, daily after meals at bedtime",
        ));
        assert_eq!(findings.triggers, set(&["caffeine", "stress"]));
        assert_eq!(
            findings.timing,
            set(&["after meals", "bedtime", "daily", "morning"])
        );
        assert_eq!(findings.stress_triggers(), vec!["stress"]);
    }

    #[test]
    fn extraction_never_fails_on_odd_input() {
        let findings = extract(Some("🔥🔥 ??? \u{0} ;;; 1234"));
        assert!(findings.symptoms.is_empty());
        assert_eq!(findings.severity, Severity::Unknown);
    }
}
