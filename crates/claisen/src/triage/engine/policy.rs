use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rules::{Rule, RuleInput, Verdict};

/// Clinical dosing profile, ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ProfileTier {
    Mild = 1,
    Moderate = 2,
    Nocturnal = 3,
    Refractory = 4,
    Urgent = 5,
}

impl ProfileTier {
    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            ProfileTier::Mild => "mild / infrequent",
            ProfileTier::Moderate => "moderate",
            ProfileTier::Nocturnal => "nocturnal / positional",
            ProfileTier::Refractory => "refractory / functional",
            ProfileTier::Urgent => "urgent referral",
        }
    }
}

impl fmt::Display for ProfileTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Profile {} ({})", self.number(), self.label())
    }
}

impl From<ProfileTier> for u8 {
    fn from(tier: ProfileTier) -> Self {
        tier.number()
    }
}

impl TryFrom<u8> for ProfileTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ProfileTier::Mild),
            2 => Ok(ProfileTier::Moderate),
            3 => Ok(ProfileTier::Nocturnal),
            4 => Ok(ProfileTier::Refractory),
            5 => Ok(ProfileTier::Urgent),
            other => Err(format!("profile tier must be between 1 and 5, found {other}")),
        }
    }
}

/// Identifies which entry of the battery produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    UrgentSentiment,
    AlarmFeature,
    SevereNocturnalNotes,
    MildInfrequent,
    ModerateClassic,
    NocturnalPositional,
    RefractoryFunctional,
    LifestyleNocturnal,
    ModerateLifestyle,
    Default,
}

impl RuleId {
    pub const fn label(self) -> &'static str {
        match self {
            RuleId::UrgentSentiment => "urgent sentiment override",
            RuleId::AlarmFeature => "alarm feature override",
            RuleId::SevereNocturnalNotes => "severe nocturnal notes",
            RuleId::MildInfrequent => "mild infrequent pattern",
            RuleId::ModerateClassic => "moderate classic pattern",
            RuleId::NocturnalPositional => "nocturnal positional pattern",
            RuleId::RefractoryFunctional => "refractory functional pattern",
            RuleId::LifestyleNocturnal => "high-risk lifestyle nocturnal pattern",
            RuleId::ModerateLifestyle => "moderate lifestyle-risk pattern",
            RuleId::Default => "default",
        }
    }
}

pub(crate) const DEFAULT_REASON: &str =
    "Default: moderate symptoms without a specific pattern; no rule matched.";

/// Outcome of a single evaluation of the battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDecision {
    pub tier: ProfileTier,
    pub rule: RuleId,
    pub reason: String,
}

impl ProfileDecision {
    pub(crate) fn fallback() -> Self {
        Self {
            tier: ProfileTier::Moderate,
            rule: RuleId::Default,
            reason: DEFAULT_REASON.to_string(),
        }
    }

    pub fn is_default(&self) -> bool {
        self.rule == RuleId::Default
    }

    pub fn summary(&self) -> String {
        format!("{}: {}", self.tier, self.reason)
    }
}

/// Walk the battery in order and return the first rule that fires.
pub(crate) fn first_match(battery: &[Rule], input: &RuleInput<'_>) -> ProfileDecision {
    for rule in battery {
        let reason = match (rule.matcher)(input) {
            Verdict::NoMatch => continue,
            Verdict::Match => rule.reason.to_string(),
            Verdict::MatchNaming(detail) => rule.reason.replace("{detail}", detail),
        };

        debug!(rule = rule.id.label(), tier = rule.tier.number(), "triage rule matched");
        return ProfileDecision {
            tier: rule.tier,
            rule: rule.id,
            reason,
        };
    }

    debug!("no triage rule matched, using default profile");
    ProfileDecision::fallback()
}
