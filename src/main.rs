use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use math_quiz::{Config, MathQuiz, QuizError};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing the lesson JSON files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Open this lesson directly (e.g. "geometry")
    #[arg(short, long)]
    lesson: Option<String>,
}

fn init_logging(config: &Config) -> Result<(), QuizError> {
    // The TUI owns stdout, so logs only go to a file.
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("math_quiz=info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(args: Args) -> Result<(), QuizError> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(log_file) = args.log_file {
        config.log_file = Some(log_file);
    }

    init_logging(&config)?;
    tracing::info!(data_dir = %config.data_dir.display(), "starting math quiz");

    let mut quiz = MathQuiz::new(config);
    if let Some(lesson) = args.lesson {
        quiz.app_mut().navigate(&lesson);
    }
    quiz.run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
