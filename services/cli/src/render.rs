use std::io::{self, Write};

use claisen::journal::{Journal, RetriageChange};
use claisen::triage::{Findings, QuestionSpec, TriageOutcome};

pub fn outcome<W: Write>(out: &mut W, outcome: &TriageOutcome) -> io::Result<()> {
    writeln!(out, "\n{}", outcome.decision.tier)?;
    writeln!(out, "Reason: {}", outcome.decision.reason)?;
    writeln!(out, "\nRecommendation")?;
    for line in outcome.recommendation.lines() {
        writeln!(out, "- {line}")?;
    }
    if !outcome.findings.is_empty() {
        writeln!(out)?;
        findings(out, &outcome.findings)?;
    }
    Ok(())
}

pub fn findings<W: Write>(out: &mut W, findings: &Findings) -> io::Result<()> {
    writeln!(out, "Notes analysis")?;
    writeln!(out, "- symptoms: {}", joined(&findings.symptoms))?;
    writeln!(out, "- severity: {}", findings.severity)?;
    writeln!(out, "- triggers: {}", joined(&findings.triggers))?;
    writeln!(out, "- timing: {}", joined(&findings.timing))?;
    writeln!(out, "- sentiment: {}", findings.sentiment)
}

pub fn questions<'a, W, I>(out: &mut W, questions: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a QuestionSpec>,
{
    let mut current_section = None;
    for question in questions {
        if current_section != Some(question.section) {
            writeln!(out, "\n{}", question.section.label())?;
            current_section = Some(question.section);
        }
        writeln!(
            out,
            "- {} ({}): {}",
            question.id,
            question.kind.label(),
            question.prompt
        )?;
        for option in question.options {
            writeln!(out, "    * {option}")?;
        }
        for (key, required) in question.ask_if {
            writeln!(out, "    asked when {key} = {required}")?;
        }
    }
    Ok(())
}

pub fn history<W: Write>(out: &mut W, journal: &Journal, limit: usize) -> io::Result<()> {
    if journal.assessments.is_empty() {
        writeln!(out, "Assessments: none recorded")?;
    } else {
        writeln!(
            out,
            "Assessments (showing {} of {})",
            limit.min(journal.assessments.len()),
            journal.assessments.len()
        )?;
        for record in journal.recent_assessments(limit) {
            let marker = if record.followup { " [follow-up]" } else { "" };
            writeln!(out, "- {}: {}{}", record.date, record.profile, marker)?;
            writeln!(out, "    {}", record.reason)?;
        }
    }

    if journal.checkins.is_empty() {
        writeln!(out, "\nCheck-ins: none recorded")?;
    } else {
        writeln!(out, "\nCheck-ins")?;
        for checkin in journal.checkins.iter().rev().take(limit) {
            let symptoms: Vec<&str> = checkin.symptoms.iter().map(|symptom| symptom.label()).collect();
            let symptoms = if symptoms.is_empty() {
                "none".to_string()
            } else {
                symptoms.join(", ")
            };
            writeln!(out, "- {}: {}", checkin.date, symptoms)?;
        }
    }
    Ok(())
}

pub fn retriage<W: Write>(out: &mut W, total: usize, changes: &[RetriageChange]) -> io::Result<()> {
    if changes.is_empty() {
        return writeln!(out, "All {total} stored assessments keep their profile.");
    }
    writeln!(out, "{} of {} stored assessments changed profile", changes.len(), total)?;
    for change in changes {
        writeln!(
            out,
            "- #{} ({}): {} -> Profile {}",
            change.index + 1,
            change.date,
            change.previous,
            change.current.tier.number()
        )?;
        writeln!(out, "    {}", change.current.summary())?;
    }
    Ok(())
}

fn joined<'a>(items: impl IntoIterator<Item = &'a String>) -> String {
    let items: Vec<&str> = items.into_iter().map(String::as_str).collect();
    if items.is_empty() {
        "none".to_string()
    } else {
        items.join(", ")
    }
}
