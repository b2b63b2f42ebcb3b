use super::super::answers::{AnswerSet, AnswerValue};
use super::super::findings::{Findings, Sentiment, Severity};
use super::policy::{ProfileTier, RuleId};

/// Everything a rule may look at.
pub(crate) struct RuleInput<'a> {
    pub answers: &'a AnswerSet,
    pub findings: &'a Findings,
}

/// Result of testing one rule. `MatchNaming` fills the `{detail}` slot of the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Verdict {
    NoMatch,
    Match,
    MatchNaming(&'static str),
}

impl From<bool> for Verdict {
    fn from(matched: bool) -> Self {
        if matched {
            Verdict::Match
        } else {
            Verdict::NoMatch
        }
    }
}

/// One entry of the ordered battery.
pub(crate) struct Rule {
    pub id: RuleId,
    pub tier: ProfileTier,
    pub reason: &'static str,
    pub matcher: fn(&RuleInput<'_>) -> Verdict,
}

/// Alarm questions in the order they are checked, with the name used in the reason.
pub(crate) const ALARM_INDICATORS: &[(&str, &str)] = &[
    ("weight_change", "weight change"),
    ("vomiting_blood", "vomiting blood"),
    ("dysphagia", "dysphagia"),
    ("odynophagia", "odynophagia"),
    ("family_gi_cancer", "family gi cancer"),
    ("symptom_change", "symptom change"),
    ("immunocompromised", "immunocompromised"),
    ("anaemia", "anaemia"),
    ("persistent_nausea", "persistent nausea"),
    ("followup_alarm_features", "followup alarm features"),
];

const AFFIRMATIVE_PREFIXES: &[&str] = &["Yes", "Lost", "Gained"];

const NEGATIVE_ANSWERS: &[&str] = &[
    "No",
    "No pain swallowing",
    "No family history",
    "No change",
    "No or unknown",
];

const NO_REFLUX_MEDICATION: &str = "None of the above";

/// The battery, highest priority first. Order is significant: evaluation stops at the
/// first match.
pub(crate) static BATTERY: &[Rule] = &[
    Rule {
        id: RuleId::UrgentSentiment,
        tier: ProfileTier::Urgent,
        reason: "Urgent concern expressed in notes: escalate for prompt clinical review.",
        matcher: urgent_sentiment,
    },
    Rule {
        id: RuleId::AlarmFeature,
        tier: ProfileTier::Urgent,
        reason: "Alarm feature detected: {detail}",
        matcher: alarm_feature,
    },
    Rule {
        id: RuleId::SevereNocturnalNotes,
        tier: ProfileTier::Nocturnal,
        reason: "Severe night-time symptoms described in notes: nocturnal reflux pattern.",
        matcher: severe_nocturnal_notes,
    },
    Rule {
        id: RuleId::MildInfrequent,
        tier: ProfileTier::Mild,
        reason: "Mild, infrequent symptoms, good response to antacids, no red flags, healthy lifestyle.",
        matcher: mild_infrequent,
    },
    Rule {
        id: RuleId::ModerateClassic,
        tier: ProfileTier::Moderate,
        reason: "Moderate, classic reflux symptoms, daily or near-daily, large meals, no recent PPI use.",
        matcher: moderate_classic,
    },
    Rule {
        id: RuleId::NocturnalPositional,
        tier: ProfileTier::Nocturnal,
        reason: "Nocturnal or positional reflux: lying-down symptoms, choking at night, suboptimal sleep posture.",
        matcher: nocturnal_positional,
    },
    Rule {
        id: RuleId::RefractoryFunctional,
        tier: ProfileTier::Refractory,
        reason: "Persistent severe symptoms despite PPI use or with medication triggers, no symptom-free period.",
        matcher: refractory_functional,
    },
    Rule {
        id: RuleId::LifestyleNocturnal,
        tier: ProfileTier::Nocturnal,
        reason: "Nocturnal reflux with high-risk lifestyle triggers (large meals, late eating, daily alcohol and tobacco).",
        matcher: lifestyle_nocturnal,
    },
    Rule {
        id: RuleId::ModerateLifestyle,
        tier: ProfileTier::Moderate,
        reason: "Moderate symptoms with some lifestyle risk factors.",
        matcher: moderate_lifestyle,
    },
];

fn urgent_sentiment(input: &RuleInput<'_>) -> Verdict {
    (input.findings.sentiment == Sentiment::Urgent).into()
}

fn alarm_feature(input: &RuleInput<'_>) -> Verdict {
    ALARM_INDICATORS
        .iter()
        .find(|(id, _)| input.answers.text(id).is_some_and(is_alarming))
        .map_or(Verdict::NoMatch, |(_, label)| Verdict::MatchNaming(*label))
}

/// Non-empty, affirmative, and not one of the negative literals.
pub(crate) fn is_alarming(answer: &str) -> bool {
    !answer.is_empty()
        && AFFIRMATIVE_PREFIXES
            .iter()
            .any(|prefix| answer.starts_with(prefix))
        && !NEGATIVE_ANSWERS.contains(&answer)
}

fn severe_nocturnal_notes(input: &RuleInput<'_>) -> Verdict {
    (input.findings.severity == Severity::Severe && input.findings.mentions_night()).into()
}

fn mild_infrequent(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is_any(
        "symptom_type",
        &["Burning sensation", "Fullness or bloating", "No discomfort"],
    ) && a.is_any("symptom_intensity", &["1–3: Mild", "4–6: Moderate"])
        && a.is_any(
            "symptom_frequency",
            &["Less than once a week", "1–2 times per week"],
        )
        && a.is_any("symptom_duration", &["Less than 10 minutes", "10–30 minutes"])
        && a.is_any(
            "relief_attempts",
            &["Antacids (Tums, Maalox) worked", "Eating bland food"],
        )
        && a.is_any(
            "symptom_free_period",
            &["Within the past month", "1–3 months ago"],
        )
        && a.text("meal_portion_size").is_some_and(|size| size != "Large")
        && a.is_any(
            "meal_bedtime_interval",
            &[">3 hours before bed", "2–3 hours before bed"],
        )
        && a.is_any("alcohol_use", &["Never", "Socially, <1x/week"])
        && a.is_any(
            "tobacco_use",
            &["Never", "Former smoker (quit >6 months ago)"],
        ))
    .into()
}

fn moderate_classic(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is_any(
        "symptom_type",
        &["Burning sensation", "Sour or bitter taste in the mouth"],
    ) && a.is_any("symptom_intensity", &["4–6: Moderate", "7–8: Severe"])
        && a.is_any("symptom_frequency", &["3–5 times per week", "Daily"])
        && a.is_any(
            "symptom_postprandial",
            &["Immediately (<10 min)", "10–30 minutes", "30–60 minutes"],
        )
        && a.is_any(
            "sour_taste",
            &["Often (more than 3 days/week)", "Daily, especially in the morning"],
        )
        && a.is("recent_ppi", "No")
        && a.is("meal_portion_size", "Large"))
    .into()
}

fn nocturnal_positional(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is_any(
        "symptom_type",
        &["Burning sensation", "Sour or bitter taste in the mouth"],
    ) && a.is_any(
        "symptom_lying_down",
        &["Yes, shortly after lying down", "Yes, I wake up at night with symptoms"],
    ) && a
        .text("night_choking")
        .is_some_and(|answer| answer.starts_with("Yes"))
        && a.is_any("sleep_position", &["Flat on back", "On right side"]))
    .into()
}

fn refractory_functional(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is_any(
        "symptom_type",
        &["Burning sensation", "Pressure or tightness"],
    ) && a.is_any("symptom_intensity", &["7–8: Severe", "9–10: Disabling"])
        && a.is_any(
            "relief_attempts",
            &[
                "Nothing provides consistent relief",
                "Proton pump inhibitors (omeprazole) worked",
                "Not tried anything",
            ],
        )
        && a.is("symptom_free_period", "Can’t recall being symptom-free")
        && (a.is("recent_ppi", "Yes")
            || a.get("meds_reflux").is_some_and(lists_reflux_medication)))
    .into()
}

/// At least one selection other than the "none" option.
fn lists_reflux_medication(value: &AnswerValue) -> bool {
    match value {
        AnswerValue::Text(text) => text != NO_REFLUX_MEDICATION,
        AnswerValue::Choices(choices) => choices.iter().any(|choice| choice != NO_REFLUX_MEDICATION),
        AnswerValue::Integer(_) => false,
    }
}

fn lifestyle_nocturnal(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is("meal_portion_size", "Large")
        && a.is("meal_bedtime_interval", "<1 hour before bed")
        && a.is("alcohol_use", "Daily")
        && a.is("tobacco_use", "Yes, daily"))
    .into()
}

fn moderate_lifestyle(input: &RuleInput<'_>) -> Verdict {
    let a = input.answers;
    (a.is_any("symptom_intensity", &["4–6: Moderate", "7–8: Severe"])
        && a.is_any("symptom_frequency", &["3–5 times per week", "Daily"])
        && (a.is("meal_portion_size", "Large") || a.is("alcohol_use", "2–3 times/week")))
    .into()
}
