use std::io::Write;

use chrono::NaiveDate;
use serde::Serialize;

use super::{AssessmentRecord, JournalError};

#[derive(Serialize)]
struct ExportRow<'a> {
    date: NaiveDate,
    followup: bool,
    profile: u8,
    reason: &'a str,
    notes: &'a str,
}

impl<'a> From<&'a AssessmentRecord> for ExportRow<'a> {
    fn from(record: &'a AssessmentRecord) -> Self {
        Self {
            date: record.date,
            followup: record.followup,
            profile: record.profile.number(),
            reason: &record.reason,
            notes: record.notes.as_deref().unwrap_or_default(),
        }
    }
}

/// Write one CSV row per assessment, in journal order, with a header line.
pub fn write_csv<W: Write>(records: &[AssessmentRecord], writer: W) -> Result<(), JournalError> {
    let mut csv_writer = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        csv_writer.serialize(ExportRow::from(record))?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::triage::{AnswerSet, TriageEngine};
    use chrono::{TimeZone, Utc};

    #[test]
    fn rows_carry_profile_number_and_quoted_notes() {
        let engine = TriageEngine::new();
        let answers = AnswerSet::new();
        let outcome = engine.assess(&answers, Some("bloating, mostly"));
        let recorded_at = Utc
            .with_ymd_and_hms(2025, 2, 9, 8, 0, 0)
            .single()
            .expect("valid timestamp");
        let record = AssessmentRecord::from_outcome(
            recorded_at.date_naive(),
            recorded_at,
            answers,
            Some("bloating, mostly".into()),
            &outcome,
            true,
        );

        let mut buffer = Vec::new();
        write_csv(&[record], &mut buffer).expect("writes csv");
        let output = String::from_utf8(buffer).expect("utf8");
        let mut lines = output.lines();

        assert_eq!(lines.next(), Some("date,followup,profile,reason,notes"));
        let row = lines.next().expect("one data row");
        assert!(row.starts_with("2025-02-09,true,2,"), "{row}");
        assert!(row.ends_with("\"bloating, mostly\""), "{row}");
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn empty_journal_exports_nothing() {
        let mut buffer = Vec::new();
        write_csv(&[], &mut buffer).expect("writes csv");
        assert!(buffer.is_empty());
    }
}
