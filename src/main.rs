use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use trivia_quiz::{LoaderSettings, Route, TriviaQuiz, DEFAULT_API_URL};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the trivia service
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Number of quizzes to prefetch
    #[arg(short, long, default_value_t = 10)]
    quizzes: usize,

    /// Screen to open first, e.g. `/play/3`
    #[arg(long, default_value = "/")]
    route: String,

    /// Write logs to this file (filtered by RUST_LOG, default `info`)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(path: &Path) -> std::io::Result<()> {
    let file = File::create(path)?;
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    pretty_env_logger::formatted_builder()
        .parse_filters(&filter)
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = init_logging(path) {
            eprintln!("Failed to open log file {}: {}", path.display(), e);
            std::process::exit(1);
        }
    }
    log::info!("Starting trivia quiz against {}", args.api_url);

    let settings = LoaderSettings::default().with_quiz_count(args.quizzes);
    let quiz = TriviaQuiz::connect(&args.api_url, settings, Route::parse(&args.route));

    if let Err(e) = quiz.run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
