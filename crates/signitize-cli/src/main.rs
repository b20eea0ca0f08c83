use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::LevelFilter;
use signitize::{ErrorKind, OutputMode, SignitizeError, SignitizeOptions};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "signitize",
    about = "Reorder PDF pages into signatures for bookbinding",
    version
)]
struct Cli {
    /// Input PDF file
    input: PathBuf,

    /// Number of leaves per signature (at least 2) [default: 4]
    #[arg(short, long)]
    leaves: Option<usize>,

    /// Page numbers marking splits into different books
    #[arg(short = 'p', long, value_delimiter = ',')]
    split_pages: Vec<usize>,

    /// Write a separate PDF for each signature
    #[arg(short = 'f', long, conflicts_with = "single_file")]
    signature_files: bool,

    /// Write every volume into one PDF
    #[arg(long)]
    single_file: bool,

    /// Directory for the generated PDF files [default: current directory]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// JSON options file; command line flags take precedence
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Show statistics only, don't generate PDFs
    #[arg(long)]
    stats_only: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("SIGNITIZE_LOG"))
        .init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let options = build_options(&cli).await?;
    options.validate()?;

    let document = signitize::load_pdf(&options.input_file).await?;

    // Calculate and show statistics
    let plan = signitize::plan_document(&document, &options)?;
    let stats = signitize::calculate_statistics(&plan);
    println!("Signitize Statistics:");
    println!("  Source pages: {}", stats.source_pages);
    println!("  Volumes: {}", stats.volumes);
    println!("  Signatures: {}", stats.signatures);
    println!("  Blank pages added: {}", stats.blank_pages_added);
    println!("  Output pages: {}", stats.output_pages);
    println!("  Sheets: {}", stats.sheets);
    if stats.dropped_pages > 0 {
        log::warn!(
            "{} page(s) left out of odd-length signatures",
            stats.dropped_pages
        );
    }

    if cli.stats_only {
        return Ok(());
    }

    // Creates the output directory once the plan is known to be valid
    let report = signitize::signitize(&document, &options).await?;
    for file in &report.files {
        println!("Signitized → {}", file.display());
    }

    Ok(())
}

/// Start from the config file (if any) and apply command line flags over it
async fn build_options(cli: &Cli) -> Result<SignitizeOptions> {
    let mut options = match &cli.config {
        Some(path) => SignitizeOptions::load(path).await?,
        None => SignitizeOptions::default(),
    };

    options.input_file = cli.input.clone();
    if let Some(leaves) = cli.leaves {
        options.leaves_per_signature = leaves;
    }
    if !cli.split_pages.is_empty() {
        options.split_pages = cli.split_pages.clone();
    }
    if cli.signature_files {
        options.output_mode = OutputMode::PerSignature;
    } else if cli.single_file {
        options.output_mode = OutputMode::Combined;
    }
    if let Some(dir) = &cli.output_dir {
        options.output_dir = dir.clone();
    }

    Ok(options)
}

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<SignitizeError>().map(SignitizeError::kind) {
        Some(ErrorKind::Usage) => 2,
        Some(ErrorKind::InputDocument) => 3,
        Some(ErrorKind::Output) => 4,
        None => 1,
    }
}
