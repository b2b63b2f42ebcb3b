use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::{AssessmentRecord, CheckinRecord, Journal, JournalError};

/// File-backed journal living at a single JSON path.
#[derive(Debug, Clone)]
pub struct JournalStore {
    path: PathBuf,
}

impl JournalStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the journal. A missing file is an empty journal.
    pub fn load(&self) -> Result<Journal, JournalError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Journal::default()),
            Err(source) => return Err(self.io_error(source)),
        };
        serde_json::from_str(&raw).map_err(|source| JournalError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, journal: &Journal) -> Result<(), JournalError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| self.io_error(source))?;
        }
        let raw = serde_json::to_string_pretty(journal).map_err(|source| JournalError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, raw).map_err(|source| self.io_error(source))?;
        debug!(
            path = %self.path.display(),
            assessments = journal.assessments.len(),
            checkins = journal.checkins.len(),
            "journal saved"
        );
        Ok(())
    }

    pub fn append_assessment(&self, record: AssessmentRecord) -> Result<Journal, JournalError> {
        let mut journal = self.load()?;
        journal.assessments.push(record);
        self.save(&journal)?;
        Ok(journal)
    }

    /// Store a check-in, refusing a second one for the same date.
    pub fn record_checkin(&self, record: CheckinRecord) -> Result<Journal, JournalError> {
        let mut journal = self.load()?;
        if journal.checkin_for(record.date).is_some() {
            return Err(JournalError::AlreadyCheckedIn(record.date));
        }
        journal.checkins.push(record);
        self.save(&journal)?;
        Ok(journal)
    }

    fn io_error(&self, source: std::io::Error) -> JournalError {
        JournalError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{quick_advice, AnswerSet, QuickSymptom, TriageEngine};
    use chrono::{NaiveDate, TimeZone, Utc};
    use tempfile::tempdir;

    fn store_in(dir: &Path) -> JournalStore {
        JournalStore::new(dir.join("nested").join("journal.json"))
    }

    fn checkin(day: u32, symptoms: Vec<QuickSymptom>) -> CheckinRecord {
        CheckinRecord {
            date: NaiveDate::from_ymd_opt(2025, 6, day).expect("valid date"),
            advice: quick_advice(&symptoms).to_string(),
            symptoms,
        }
    }

    #[test]
    fn missing_file_loads_as_empty_journal() {
        let dir = tempdir().expect("tempdir");
        let journal = store_in(dir.path()).load().expect("loads");
        assert_eq!(journal, Journal::default());
    }

    #[test]
    fn appended_assessments_survive_a_reload() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(dir.path());
        let answers: AnswerSet = [("symptom_frequency", "Daily")].into_iter().collect();
        let outcome = TriageEngine::new().assess(&answers, Some("burning at night"));
        let recorded_at = Utc
            .with_ymd_and_hms(2025, 6, 1, 22, 15, 0)
            .single()
            .expect("valid timestamp");

        let record = AssessmentRecord::from_outcome(
            recorded_at.date_naive(),
            recorded_at,
            answers,
            Some("burning at night".into()),
            &outcome,
            false,
        );
        store.append_assessment(record.clone()).expect("appends");
        store.append_assessment(record.clone()).expect("appends");

        let journal = store.load().expect("reloads");
        assert_eq!(journal.assessments, vec![record.clone(), record]);
    }

    #[test]
    fn second_checkin_on_the_same_day_is_rejected() {
        let dir = tempdir().expect("tempdir");
        let store = store_in(dir.path());

        store
            .record_checkin(checkin(3, vec![QuickSymptom::Gas]))
            .expect("first check-in");
        match store.record_checkin(checkin(3, vec![QuickSymptom::Heartburn])) {
            Err(JournalError::AlreadyCheckedIn(date)) => {
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 3).expect("valid date"));
            }
            other => panic!("expected duplicate check-in error, got {other:?}"),
        }

        let journal = store
            .record_checkin(checkin(4, Vec::new()))
            .expect("next day is accepted");
        assert_eq!(journal.checkins.len(), 2);
        assert_eq!(journal.checkins[0].symptoms, vec![QuickSymptom::Gas]);
    }

    #[test]
    fn corrupt_file_is_reported_with_its_path() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("journal.json");
        fs::write(&path, "{ not json").expect("writes");

        match JournalStore::new(&path).load() {
            Err(JournalError::Corrupt { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected corrupt journal error, got {other:?}"),
        }
    }
}
