mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cardforge::quiz::DifficultyTier;

#[derive(Parser)]
#[command(
    name = "cardforge",
    about = "Turn PDF notes into flashcards, quiz yourself, track progress",
    version
)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum TierArg {
    All,
    /// Levels 1-2
    Easy,
    /// Level 3
    Medium,
    /// Levels 4-5
    Hard,
}

impl From<TierArg> for DifficultyTier {
    fn from(tier: TierArg) -> Self {
        match tier {
            TierArg::All => DifficultyTier::All,
            TierArg::Easy => DifficultyTier::Easy,
            TierArg::Medium => DifficultyTier::Medium,
            TierArg::Hard => DifficultyTier::Hard,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Extract text from a PDF and generate flashcards
    Import {
        /// Path to the PDF file
        pdf: PathBuf,
        /// Number of cards to generate (default from settings)
        #[arg(long)]
        count: Option<usize>,
        /// Print the extracted text before generating
        #[arg(long)]
        show_text: bool,
    },

    /// List stored flashcards
    List {
        /// Filter by keyword (matches prompt and answer)
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one card in full (marks it as read)
    Show {
        /// Card number as printed by `list`
        number: u32,
    },

    /// Delete cards by number; the rest are renumbered
    Delete {
        /// Card numbers as printed by `list`
        #[arg(required = true)]
        numbers: Vec<u32>,
    },

    /// Run an interactive quiz over stored cards
    Quiz {
        /// Difficulty band to draw from
        #[arg(long, default_value = "all")]
        tier: TierArg,
        /// Include cards that are not due yet
        #[arg(long)]
        all: bool,
        /// Maximum number of questions (default from settings)
        #[arg(long)]
        limit: Option<usize>,
        /// Show multiple-choice options for each question
        #[arg(long)]
        choices: bool,
    },

    /// Grade a single answer against a card
    Answer {
        /// Card number as printed by `list`
        number: u32,
        /// Your answer
        answer: String,
    },

    /// Show study statistics
    Stats,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir.as_deref())?;

    match cli.command {
        Command::Import {
            pdf,
            count,
            show_text,
        } => {
            commands::import::run(&app, &pdf, count, show_text, &cli.format)?;
        }
        Command::List { search } => {
            commands::list::run(&app, search.as_deref(), &cli.format)?;
        }
        Command::Show { number } => {
            commands::show::run(&app, number, &cli.format)?;
        }
        Command::Delete { numbers } => {
            commands::delete::run(&app, &numbers, &cli.format)?;
        }
        Command::Quiz {
            tier,
            all,
            limit,
            choices,
        } => {
            commands::quiz::run(&app, tier.into(), all, limit, choices, &cli.format)?;
        }
        Command::Answer { number, answer } => {
            commands::answer::run(&app, number, &answer, &cli.format)?;
        }
        Command::Stats => {
            commands::stats::run(&app, &cli.format)?;
        }
    }

    Ok(())
}
