// Command-line scorer: reads an assessment JSON document from a file or
// stdin and prints the scored result, as text or as the wire response.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use log::debug;
use thiserror::Error;

use cardio_form::{FieldKind, FIELDS};
use cardio_score::{assess, breakdown, Assessment, AssessmentError, AssessmentResult, Contribution};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const READ_FAILURE: i32 = 1;
    pub const INVALID_DOCUMENT: i32 = 2;
}

#[derive(Debug, Parser)]
#[command(
    name = "cardio",
    version,
    about = "Score heart-disease risk questionnaires from the command line",
    long_about = "cardio scores the same JSON documents the questionnaire form submits.\n\n\
        EXAMPLES:\n\
        \n  cardio score answers.json                 Score a saved submission\n\
        \n  cat answers.json | cardio score           Score a submission from stdin\n\
        \n  cardio score --format json answers.json   Emit the wire response\n\
        \n  cardio fields                             List the questionnaire fields"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score an assessment document
    Score(ScoreArgs),
    /// List the questionnaire fields and their accepted values
    Fields,
}

#[derive(Debug, Args)]
struct ScoreArgs {
    /// Input JSON document (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to read input: {0}")]
    Read(#[from] io::Error),
    #[error(transparent)]
    Invalid(#[from] AssessmentError),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl CliError {
    fn exit_code(&self) -> i32 {
        match self {
            CliError::Read(_) => exit_code::READ_FAILURE,
            CliError::Invalid(_) | CliError::Encode(_) => exit_code::INVALID_DOCUMENT,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    match run(&cli.command) {
        Ok(()) => std::process::exit(exit_code::SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(command: &Command) -> Result<(), CliError> {
    match command {
        Command::Score(args) => score_command(args),
        Command::Fields => {
            print_fields();
            Ok(())
        }
    }
}

fn score_command(args: &ScoreArgs) -> Result<(), CliError> {
    let body = read_input(args.input.as_deref())?;
    debug!("scoring a {}-byte document", body.len());
    let assessment = Assessment::from_json_str(&body)?;
    let result = assess(&assessment);
    match args.format {
        Format::Text => print_text(&result, &breakdown(&assessment)),
        Format::Json => {
            let response = cardio_score::RiskResponse::from(result);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn print_text(result: &AssessmentResult, contributions: &[Contribution]) {
    println!("Risk score: {} ({} risk)", result.score, result.risk);
    if contributions.is_empty() {
        println!("No contributing risk factors reported.");
    } else {
        println!("Contributing factors:");
        for contribution in contributions {
            println!("  +{:<2} {}", contribution.points, contribution.factor);
        }
    }
    println!();
    println!("{}", result.message);
}

fn print_fields() {
    for spec in FIELDS {
        match spec.kind {
            FieldKind::Number { placeholder, .. } => {
                println!("{:<18} {} (number, {placeholder})", spec.name, spec.label);
            }
            FieldKind::Choice(choices) => {
                println!("{:<18} {} [{}]", spec.name, spec.label, choices.join(", "));
            }
        }
    }
}
