//! Question Splitter CLI
//!
//! Loads a question list from a text or CSV file, distributes it among the
//! given participants and writes the result as text, HTML or CSV.

use clap::Parser;
use question_splitter::io::{read_participants, write_report};
use question_splitter::utils::{derive_output_path, path_exists};
use question_splitter::{format_question_preview, ExportFormat, Policy, Roster, Session};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

const PREVIEW_LIMIT: usize = 25; // Questions shown by --preview

/// Question splitter - distributes a question list among participants
#[derive(Parser, Debug)]
#[command(name = "question_splitter")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the questions file (.txt with one question per line, or .csv)
    questions: PathBuf,

    /// Comma-separated participant names
    #[arg(short, long, value_delimiter = ',')]
    names: Vec<String>,

    /// File with one participant name per line (alternative to --names)
    #[arg(long, conflicts_with = "names")]
    names_file: Option<PathBuf>,

    /// Distribution policy: even (contiguous blocks) or random
    #[arg(short, long, default_value = "even")]
    policy: String,

    /// Seed for reproducible random distribution
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text, html or csv
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output path (default: <input stem>_results.<extension> next to the input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a preview of the loaded questions before distributing
    #[arg(long, default_value_t = false)]
    preview: bool,
}

fn main() {
    // Initialize logger. Set RUST_LOG environment variable to control log level.
    // Examples: RUST_LOG=info, RUST_LOG=warn, RUST_LOG=question_splitter=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Starting question splitter");

    let args = Args::parse();

    if let Err(e) = run(&args) {
        log::error!("Application error: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let policy = Policy::parse(&args.policy).ok_or_else(|| {
        format!(
            "Unknown policy '{}' (expected one of: {})",
            args.policy,
            Policy::all()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;
    let format = ExportFormat::parse(&args.format).ok_or_else(|| {
        format!(
            "Unknown format '{}' (expected one of: {})",
            args.format,
            ExportFormat::all()
                .iter()
                .map(|f| f.as_str())
                .collect::<Vec<_>>()
                .join(", ")
        )
    })?;

    if !path_exists(&args.questions) {
        return Err(format!("Questions file not found: {}", args.questions.display()).into());
    }

    let participant_names = match &args.names_file {
        Some(path) => read_participants(path)?,
        None => args.names.clone(),
    };
    if participant_names.is_empty() {
        return Err("No participants given; use --names or --names-file".into());
    }

    let mut session = Session::new(Roster::new(participant_names));
    session.load_questions(&args.questions)?;

    if args.preview {
        println!("{}", format_question_preview(session.questions(), PREVIEW_LIMIT));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    session.distribute(policy, &mut rng)?;

    let report = session.report().ok_or("No distribution to export")?;
    let contents = format.render(&report);

    let output_path = match &args.output {
        Some(path) => path.clone(),
        None => derive_output_path(&args.questions, format.extension()),
    };
    write_report(&output_path, &contents)?;

    println!("Results saved to {}", output_path.display());
    Ok(())
}
