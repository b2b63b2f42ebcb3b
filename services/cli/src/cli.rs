use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "claisen",
    about = "Assess reflux and indigestion symptoms and keep a local symptom journal",
    version
)]
pub struct Cli {
    /// Override the configured data directory holding the journal
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a questionnaire (or load an answer bundle) and assign a treatment profile
    Assess(AssessArgs),
    /// Show the signals found in a piece of free text
    Extract(ExtractArgs),
    /// List the questions asked during an assessment
    Questions(QuestionsArgs),
    /// Show recent assessments and check-ins
    History(HistoryArgs),
    /// Export stored assessments as CSV
    Export(ExportArgs),
    /// Re-evaluate stored assessments and report profile changes
    Retriage,
    /// Record today's quick symptom check-in
    Checkin(CheckinArgs),
}

#[derive(Args, Debug, Default)]
pub struct AssessArgs {
    /// JSON object mapping question ids to answers; skips interactive prompting
    #[arg(long)]
    pub answers: Option<PathBuf>,
    /// Free-text description of symptoms
    #[arg(long)]
    pub notes: Option<String>,
    /// Ask the follow-up questions instead of the initial assessment
    #[arg(long)]
    pub followup: bool,
    /// Do not store the result in the journal
    #[arg(long)]
    pub no_save: bool,
    /// Print the outcome as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Text to analyse
    #[arg(long)]
    pub notes: String,
}

#[derive(Args, Debug, Default)]
pub struct QuestionsArgs {
    /// List the follow-up questions
    #[arg(long)]
    pub followup: bool,
}

#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Number of entries to show
    #[arg(long, default_value_t = 10)]
    pub limit: usize,
}

#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Destination CSV file
    #[arg(long)]
    pub output: PathBuf,
}

#[derive(Args, Debug, Default)]
pub struct CheckinArgs {
    /// Comma separated symptoms (bloating, gas, heartburn); prompts when omitted
    #[arg(long)]
    pub symptoms: Option<String>,
}
