pub mod cli;
pub mod interview;
pub mod render;

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, BufRead, Write};
use std::path::Path;

use chrono::{Local, NaiveDate, Utc};
use clap::Parser;
use claisen::config::AppConfig;
use claisen::error::AppError;
use claisen::journal::{self, AssessmentRecord, CheckinRecord, JournalStore};
use claisen::telemetry;
use claisen::triage::{
    extract, questions_for, quick_advice, AnswerSet, AnswerValue, QuestionnaireMode,
    QuickSymptom, TriageEngine,
};
use tracing::info;

use crate::cli::{AssessArgs, CheckinArgs, Cli, Command};
use crate::interview::Interview;

/// Parse arguments, load configuration and dispatch the subcommand against stdio.
pub fn run() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = AppConfig::load()?;
    if let Some(data_dir) = cli.data_dir {
        config.storage.data_dir = data_dir;
    }
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, data_dir = %config.storage.data_dir.display(), "claisen starting");

    let store = JournalStore::new(config.storage.journal_path());
    let today = Local::now().date_naive();
    let stdin = io::stdin();
    let stdout = io::stdout();
    execute(cli.command, &store, today, &mut stdin.lock(), &mut stdout.lock())
}

/// Run one subcommand. `today` is the user's local calendar date, used to key journal
/// entries. Interactive prompts read from `input`; everything is written to `out`.
pub fn execute<R: BufRead, W: Write>(
    command: Command,
    store: &JournalStore,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Command::Assess(args) => assess(args, store, today, input, out),
        Command::Extract(args) => {
            let findings = extract(Some(&args.notes));
            writeln!(out, "{}", serde_json::to_string_pretty(&findings)?)?;
            Ok(())
        }
        Command::Questions(args) => {
            render::questions(out, questions_for(mode(args.followup)))?;
            Ok(())
        }
        Command::History(args) => {
            let journal = store.load()?;
            render::history(out, &journal, args.limit)?;
            Ok(())
        }
        Command::Export(args) => {
            let journal = store.load()?;
            let file = File::create(&args.output)?;
            journal::write_csv(&journal.assessments, file)?;
            writeln!(
                out,
                "Exported {} assessments to {}",
                journal.assessments.len(),
                args.output.display()
            )?;
            Ok(())
        }
        Command::Retriage => {
            let journal = store.load()?;
            let changes = journal::retriage(&TriageEngine::new(), &journal);
            render::retriage(out, journal.assessments.len(), &changes)?;
            Ok(())
        }
        Command::Checkin(args) => checkin(args, store, today, input, out),
    }
}

fn assess<R: BufRead, W: Write>(
    args: AssessArgs,
    store: &JournalStore,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    let AssessArgs {
        answers: bundle_path,
        notes,
        followup,
        no_save,
        json,
    } = args;

    let (answers, notes) = match bundle_path {
        Some(path) => (load_bundle(&path)?, notes),
        None => {
            let mut interview = Interview::new(input, &mut *out);
            let answers = interview.collect(mode(followup))?;
            let notes = match notes {
                Some(notes) => Some(notes),
                None => interview.notes()?,
            };
            (answers, notes)
        }
    };

    let outcome = TriageEngine::new().assess(&answers, notes.as_deref());

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&outcome)?)?;
    } else {
        render::outcome(out, &outcome)?;
    }

    if !no_save {
        let record =
            AssessmentRecord::from_outcome(today, Utc::now(), answers, notes, &outcome, followup);
        store.append_assessment(record)?;
        if !json {
            writeln!(out, "\nSaved to {}", store.path().display())?;
        }
    }
    Ok(())
}

fn checkin<R: BufRead, W: Write>(
    args: CheckinArgs,
    store: &JournalStore,
    today: NaiveDate,
    input: &mut R,
    out: &mut W,
) -> Result<(), AppError> {
    if store.load()?.checkin_for(today).is_some() {
        writeln!(out, "You've already logged your symptoms today.")?;
        return Ok(());
    }

    let symptoms = match args.symptoms {
        Some(raw) => QuickSymptom::parse_list(&raw),
        None => Interview::new(input, &mut *out).quick_symptoms()?,
    };
    let advice = quick_advice(&symptoms);
    store.record_checkin(CheckinRecord {
        date: today,
        symptoms,
        advice: advice.to_string(),
    })?;
    writeln!(out, "{advice}")?;
    Ok(())
}

/// Read a JSON answer bundle and validate every entry against the catalog.
fn load_bundle(path: &Path) -> Result<AnswerSet, AppError> {
    let raw = fs::read_to_string(path)?;
    let bundle: BTreeMap<String, AnswerValue> = serde_json::from_str(&raw)?;
    Ok(AnswerSet::from_bundle(bundle)?)
}

fn mode(followup: bool) -> QuestionnaireMode {
    if followup {
        QuestionnaireMode::FollowUp
    } else {
        QuestionnaireMode::Initial
    }
}
