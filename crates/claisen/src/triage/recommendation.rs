use super::answers::AnswerSet;
use super::engine::{ProfileDecision, ProfileTier};
use super::findings::Findings;

const NSAID_OPTION: &str = "NSAIDs (e.g. ibuprofen, naproxen, diclofenac)";

pub(crate) const fn base_guidance(tier: ProfileTier) -> &'static str {
    match tier {
        ProfileTier::Urgent => {
            "Urgent referral: do not start or continue self-treatment. Arrange a same-day \
             GP or urgent care review, and call emergency services if you vomit blood, pass \
             black stools or cannot swallow."
        }
        ProfileTier::Mild => {
            "Lifestyle measures only: smaller meals, last meal at least 3 hours before bed, \
             limit trigger foods, alcohol and tobacco, and use an antacid on demand. Review \
             in 4 weeks."
        }
        ProfileTier::Moderate => {
            "Time-boxed acid suppression: omeprazole 20 mg once daily, 30-60 minutes before \
             breakfast, for 4 weeks alongside lifestyle measures. Reassess at 4 weeks and \
             step down if symptoms settle."
        }
        ProfileTier::Nocturnal => {
            "Dual therapy for night-time reflux: omeprazole 20 mg before breakfast plus \
             famotidine 20 mg at bedtime for 4 weeks. Raise the head of the bed, sleep on \
             your left side and avoid eating within 3 hours of bedtime."
        }
        ProfileTier::Refractory => {
            "Specialist referral: discontinue self-directed PPI therapy and book a \
             gastroenterology review. Endoscopy or H. pylori testing may be needed to \
             explain persistent symptoms."
        }
    }
}

/// Build the user-facing recommendation for a decision.
///
/// Sub-notes follow the base guidance one per line, in the order their conditions are
/// checked below. Notes derived from free text only appear on the default path.
pub fn compose(decision: &ProfileDecision, answers: &AnswerSet, findings: &Findings) -> String {
    let mut lines = vec![base_guidance(decision.tier).to_string()];

    if answers
        .text("stress_worsen")
        .is_some_and(|answer| answer.starts_with("Yes"))
    {
        lines.push(
            "Stress note: your symptoms worsen with stress; relaxation techniques or talking \
             therapy may help alongside treatment."
                .to_string(),
        );
    }

    if answers.is("meds_reflux", NSAID_OPTION) {
        lines.push(
            "Medication note: NSAIDs can worsen reflux; ask a pharmacist or GP about \
             alternatives such as paracetamol."
                .to_string(),
        );
    }

    if answers.is("caffeine_intake", ">3 cups/day") {
        lines.push(
            "Medication note: more than 3 caffeinated drinks a day can aggravate reflux and \
             interact with acid suppression; cut back gradually."
                .to_string(),
        );
    }

    if answers.is("demographics_pregnant", "Yes") {
        lines.push(
            "Pregnancy note: check every medicine with a pharmacist or midwife before use."
                .to_string(),
        );
    }

    if decision.is_default() {
        let stress = findings.stress_triggers();
        if !stress.is_empty() {
            lines.push(format!(
                "Your notes mention {}: stress management may ease symptoms.",
                stress.join(" and ")
            ));
        }

        if !findings.symptoms.is_empty() {
            let symptoms: Vec<&str> = findings.symptoms.iter().map(String::as_str).collect();
            lines.push(format!("Symptoms mentioned in your notes: {}.", symptoms.join(", ")));
        }
    }

    lines.join("\n")
}
