//! Local append-only journal of assessments and daily check-ins.
//!
//! The engine never touches the journal; callers persist the outcome after evaluating.

mod export;
mod store;

pub use export::write_csv;
pub use store::JournalStore;

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::triage::{
    AnswerSet, ProfileDecision, ProfileTier, QuickSymptom, RuleId, TriageEngine, TriageOutcome,
};

#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("failed to access journal at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("journal at {path} is not valid JSON: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("symptoms already checked in for {0}")]
    AlreadyCheckedIn(NaiveDate),
    #[error("failed to write CSV export: {0}")]
    Export(#[from] csv::Error),
}

/// Persisted record of one full assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub date: NaiveDate,
    pub recorded_at: DateTime<Utc>,
    pub answers: AnswerSet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub profile: ProfileTier,
    pub rule: RuleId,
    pub reason: String,
    pub recommendation: String,
    #[serde(default)]
    pub followup: bool,
}

impl AssessmentRecord {
    /// `date` is the respondent's calendar date; `recorded_at` is the instant in UTC.
    pub fn from_outcome(
        date: NaiveDate,
        recorded_at: DateTime<Utc>,
        answers: AnswerSet,
        notes: Option<String>,
        outcome: &TriageOutcome,
        followup: bool,
    ) -> Self {
        Self {
            date,
            recorded_at,
            answers,
            notes,
            profile: outcome.decision.tier,
            rule: outcome.decision.rule,
            reason: outcome.decision.reason.clone(),
            recommendation: outcome.recommendation.clone(),
            followup,
        }
    }
}

/// Persisted record of a daily quick check-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckinRecord {
    pub date: NaiveDate,
    pub symptoms: Vec<QuickSymptom>,
    pub advice: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Journal {
    #[serde(default)]
    pub assessments: Vec<AssessmentRecord>,
    #[serde(default)]
    pub checkins: Vec<CheckinRecord>,
}

impl Journal {
    pub fn checkin_for(&self, date: NaiveDate) -> Option<&CheckinRecord> {
        self.checkins.iter().find(|checkin| checkin.date == date)
    }

    /// Most recent assessments first, at most `limit` of them.
    pub fn recent_assessments(&self, limit: usize) -> impl Iterator<Item = &AssessmentRecord> {
        self.assessments.iter().rev().take(limit)
    }
}

/// A stored assessment whose profile differs under the current battery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetriageChange {
    pub index: usize,
    pub date: NaiveDate,
    pub previous: ProfileTier,
    pub current: ProfileDecision,
}

/// Re-evaluate every stored assessment and report the ones whose tier changed.
pub fn retriage(engine: &TriageEngine, journal: &Journal) -> Vec<RetriageChange> {
    journal
        .assessments
        .iter()
        .enumerate()
        .filter_map(|(index, record)| {
            let outcome = engine.assess(&record.answers, record.notes.as_deref());
            (outcome.decision.tier != record.profile).then(|| RetriageChange {
                index,
                date: record.date,
                previous: record.profile,
                current: outcome.decision,
            })
        })
        .collect()
}
