mod policy;
mod rules;

pub use policy::{ProfileDecision, ProfileTier, RuleId};

pub(crate) use rules::{Rule, RuleInput};
#[cfg(test)]
pub(crate) use rules::{is_alarming, Verdict, ALARM_INDICATORS};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::answers::AnswerSet;
use super::findings::{self, Findings};
use super::recommendation;

/// Stateless evaluator that runs the ordered rule battery over an answer set.
pub struct TriageEngine {
    battery: &'static [Rule],
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageEngine {
    pub fn new() -> Self {
        Self {
            battery: rules::BATTERY,
        }
    }

    #[cfg(test)]
    pub(crate) fn with_battery(battery: &'static [Rule]) -> Self {
        Self { battery }
    }

    /// Resolve the profile for `answers`. Absent findings behave like empty notes.
    pub fn assign_profile(
        &self,
        answers: &AnswerSet,
        findings: Option<&Findings>,
    ) -> ProfileDecision {
        let empty = Findings::default();
        let input = RuleInput {
            answers,
            findings: findings.unwrap_or(&empty),
        };
        policy::first_match(self.battery, &input)
    }

    /// Extract findings from `notes`, resolve the profile and compose the recommendation.
    pub fn assess(&self, answers: &AnswerSet, notes: Option<&str>) -> TriageOutcome {
        let findings = findings::extract(notes);
        let decision = self.assign_profile(answers, Some(&findings));
        let recommendation = recommendation::compose(&decision, answers, &findings);

        info!(
            profile = decision.tier.number(),
            rule = decision.rule.label(),
            answers = answers.len(),
            "triage assessment complete"
        );

        TriageOutcome {
            decision,
            recommendation,
            findings,
        }
    }
}

/// Decision plus the composed guidance and the findings that informed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageOutcome {
    pub decision: ProfileDecision,
    pub recommendation: String,
    pub findings: Findings,
}
