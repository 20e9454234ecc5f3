use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{FeedbackNotifier, QuizConfig, TracingNotifier};
use storage::repository::{QuestionRepository, Storage};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Multiple-choice history quiz.
#[derive(Parser, Debug)]
#[command(name = "quiz", version)]
struct Args {
    /// JSON question bank to use instead of the built-in questions.
    #[arg(long, env = "QUIZ_BANK")]
    bank: Option<PathBuf>,

    /// How long answer feedback stays on screen before moving on.
    #[arg(long, env = "QUIZ_FEEDBACK_MS", default_value_t = 1000)]
    feedback_ms: u64,

    /// Log filter, e.g. `info` or `services=debug`. Falls back to `RUST_LOG`.
    #[arg(long)]
    log: Option<String>,

    /// Print the categories of the question bank and exit.
    #[arg(long)]
    list_categories: bool,
}

struct DesktopApp {
    questions: Arc<dyn QuestionRepository>,
    quiz_config: QuizConfig,
}

impl UiApp for DesktopApp {
    fn questions(&self) -> Arc<dyn QuestionRepository> {
        Arc::clone(&self.questions)
    }

    fn notifier(&self) -> Arc<dyn FeedbackNotifier> {
        Arc::new(TracingNotifier)
    }

    fn quiz_config(&self) -> QuizConfig {
        self.quiz_config
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let quiz_config = QuizConfig::from_millis(args.feedback_ms)?;
    let storage = match &args.bank {
        Some(path) => Storage::from_json_file(path)?,
        None => Storage::builtin()?,
    };

    let categories = storage.questions.categories();
    if args.list_categories {
        for category in &categories {
            let count = storage.questions.questions_for(category).len();
            println!("{category} ({count} questions)");
        }
        return Ok(());
    }

    tracing::info!(
        categories = categories.len(),
        feedback_ms = args.feedback_ms,
        "launching quiz"
    );

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        questions: storage.questions,
        quiz_config,
    });
    let context = build_app_context(&app);

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("History Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn feedback_delay_defaults_to_one_second() {
        let args = Args::try_parse_from(["quiz"]).unwrap();
        assert_eq!(args.feedback_ms, 1000);
        assert!(args.bank.is_none());
        assert!(!args.list_categories);
    }

    #[test]
    fn parses_bank_and_delay() {
        let args =
            Args::try_parse_from(["quiz", "--bank", "bank.json", "--feedback-ms", "250"]).unwrap();
        assert_eq!(args.bank, Some(PathBuf::from("bank.json")));
        assert_eq!(args.feedback_ms, 250);
    }
}
