use crate::triage::answers::{AnswerSet, AnswerValue};
use crate::triage::engine::TriageEngine;

pub(super) fn engine() -> TriageEngine {
    TriageEngine::new()
}

fn answers(pairs: &[(&str, &str)]) -> AnswerSet {
    pairs.iter().copied().collect()
}

/// Mild, infrequent burning with a healthy lifestyle.
pub(super) fn mild_answers() -> AnswerSet {
    answers(&[
        ("symptom_type", "Burning sensation"),
        ("symptom_intensity", "1–3: Mild"),
        ("symptom_frequency", "Less than once a week"),
        ("symptom_duration", "Less than 10 minutes"),
        ("relief_attempts", "Antacids (Tums, Maalox) worked"),
        ("symptom_free_period", "Within the past month"),
        ("meal_portion_size", "Small"),
        ("meal_bedtime_interval", ">3 hours before bed"),
        ("alcohol_use", "Never"),
        ("tobacco_use", "Never"),
    ])
}

/// Daily classic reflux with large meals and no recent PPI.
pub(super) fn moderate_classic_answers() -> AnswerSet {
    answers(&[
        ("symptom_type", "Sour or bitter taste in the mouth"),
        ("symptom_intensity", "4–6: Moderate"),
        ("symptom_frequency", "Daily"),
        ("symptom_postprandial", "10–30 minutes"),
        ("sour_taste", "Daily, especially in the morning"),
        ("recent_ppi", "No"),
        ("meal_portion_size", "Large"),
    ])
}

/// Lying-down reflux with night choking and a flat sleeping posture.
pub(super) fn nocturnal_answers() -> AnswerSet {
    answers(&[
        ("symptom_type", "Burning sensation"),
        ("symptom_lying_down", "Yes, I wake up at night with symptoms"),
        ("night_choking", "Yes, frequently (weekly or more)"),
        ("sleep_position", "Flat on back"),
    ])
}

/// Disabling symptoms that never clear, with NSAID use.
pub(super) fn refractory_answers() -> AnswerSet {
    let mut set = answers(&[
        ("symptom_type", "Pressure or tightness"),
        ("symptom_intensity", "9–10: Disabling"),
        ("relief_attempts", "Nothing provides consistent relief"),
        ("symptom_free_period", "Can’t recall being symptom-free"),
        ("recent_ppi", "No"),
    ]);
    set.insert_unchecked(
        "meds_reflux",
        AnswerValue::choices(["NSAIDs (e.g. ibuprofen, naproxen, diclofenac)"]),
    );
    set
}

/// Large late meals with daily alcohol and tobacco, nothing else answered.
pub(super) fn lifestyle_nocturnal_answers() -> AnswerSet {
    answers(&[
        ("meal_portion_size", "Large"),
        ("meal_bedtime_interval", "<1 hour before bed"),
        ("alcohol_use", "Daily"),
        ("tobacco_use", "Yes, daily"),
    ])
}

/// Moderate frequent symptoms with regular drinking.
pub(super) fn moderate_lifestyle_answers() -> AnswerSet {
    answers(&[
        ("symptom_intensity", "7–8: Severe"),
        ("symptom_frequency", "3–5 times per week"),
        ("alcohol_use", "2–3 times/week"),
    ])
}

pub(super) fn merge(mut base: AnswerSet, extra: &AnswerSet) -> AnswerSet {
    for (id, value) in extra.iter() {
        base.insert_unchecked(id, value.clone());
    }
    base
}
