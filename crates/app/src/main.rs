use std::fmt;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use checklist_core::model::{QuestionId, Score};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{
    AppServices, AssessmentService, Clock, ExportService, ResetOutcome, WriteStatus,
    render_print_report,
};
use storage::repository::Storage;
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const WINDOW_TITLE: &str = "How to Know If You’re in a Cult";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    MissingArgument { name: &'static str },
    InvalidScore { raw: String },
    Input(checklist_core::Error),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::MissingArgument { name } => write!(f, "missing <{name}>"),
            ArgsError::InvalidScore { raw } => write!(f, "invalid score: {raw} (expected 1-5)"),
            ArgsError::Input(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<checklist_core::Error> for ArgsError {
    fn from(err: checklist_core::Error) -> Self {
        ArgsError::Input(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn assessment(&self) -> Arc<AssessmentService> {
        self.services.assessment()
    }

    fn exporter(&self) -> Arc<ExportService> {
        self.services.exporter()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- ui      [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- summary [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- export  [--db <sqlite_url>] [--out <dir>]");
    eprintln!("  cargo run -p app -- print   [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- reset   [--db <sqlite_url>] [--yes]");
    eprintln!("  cargo run -p app -- answer  <category-item> <1-5> [--db <sqlite_url>]");
    eprintln!("  cargo run -p app -- notes   <text> [--db <sqlite_url>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://checklist.sqlite3");
    eprintln!("  --out current directory");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CHECKLIST_DB_URL, CHECKLIST_EXPORT_DIR, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Summary,
    Export,
    Print,
    Reset,
    Answer,
    Notes,
}

impl Command {
    fn from_arg(arg: &str) -> Option<Self> {
        match arg {
            "ui" => Some(Self::Ui),
            "summary" => Some(Self::Summary),
            "export" => Some(Self::Export),
            "print" => Some(Self::Print),
            "reset" => Some(Self::Reset),
            "answer" => Some(Self::Answer),
            "notes" => Some(Self::Notes),
            _ => None,
        }
    }

    fn positional_names(self) -> &'static [&'static str] {
        match self {
            Self::Answer => &["question", "score"],
            Self::Notes => &["text"],
            _ => &[],
        }
    }
}

#[derive(Debug)]
struct Args {
    db_url: String,
    export_dir: PathBuf,
    assume_yes: bool,
    positionals: Vec<String>,
}

impl Args {
    fn parse(cmd: Command, args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut db_url = std::env::var("CHECKLIST_DB_URL")
            .ok()
            .map_or_else(|| normalize_sqlite_url("checklist.sqlite3".into()), normalize_sqlite_url);
        let mut export_dir = std::env::var_os("CHECKLIST_EXPORT_DIR")
            .map_or_else(|| PathBuf::from("."), PathBuf::from);
        let mut assume_yes = false;
        let mut positionals = Vec::new();
        let expected = cmd.positional_names();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--out" if cmd == Command::Export => {
                    export_dir = PathBuf::from(require_value(args, "--out")?);
                }
                "--yes" | "-y" if cmd == Command::Reset => assume_yes = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ if positionals.len() < expected.len() && !arg.starts_with("--") => {
                    positionals.push(arg);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Some(&name) = expected.get(positionals.len()) {
            return Err(ArgsError::MissingArgument { name });
        }

        Ok(Self {
            db_url,
            export_dir,
            assume_yes,
            positionals,
        })
    }

    fn answer(&self) -> Result<(QuestionId, Score), ArgsError> {
        let [id, score] = self.positionals.as_slice() else {
            return Err(ArgsError::MissingArgument { name: "question" });
        };
        let id: QuestionId = id.parse().map_err(checklist_core::Error::from)?;
        let value: u64 = score
            .parse()
            .map_err(|_| ArgsError::InvalidScore { raw: score.clone() })?;
        let score = Score::from_u64(value).map_err(checklist_core::Error::from)?;
        Ok((id, score))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn parse_command(argv: &mut Vec<String>) -> Result<Command, ArgsError> {
    let cmd = match argv.first().map(String::as_str) {
        None => Command::Ui,
        Some(first) if first.starts_with('-') => Command::Ui,
        Some(first) => {
            Command::from_arg(first).ok_or_else(|| ArgsError::UnknownArg(first.to_string()))?
        }
    };
    if argv.first().is_some_and(|first| !first.starts_with('-')) {
        argv.remove(0);
    }
    Ok(cmd)
}

/// Asks on stdin; anything but `y`/`yes` declines.
fn confirm_on_stdin(prompt: &str) -> bool {
    eprint!("{prompt} [y/N] ");
    let _ = std::io::stderr().flush();
    let mut line = String::new();
    if std::io::stdin().lock().read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn report_write(status: &WriteStatus) {
    if let Some(reason) = status.warning() {
        eprintln!("warning: change kept in memory only: {reason}");
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();
    if matches!(argv.first().map(String::as_str), Some("--help" | "-h")) {
        print_usage();
        return Ok(());
    }

    let parsed = parse_command(&mut argv).and_then(|cmd| {
        let mut iter = argv.into_iter();
        Args::parse(cmd, &mut iter).map(|args| (cmd, args))
    });
    let (cmd, args) = parsed.map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&args.db_url)?;
    let storage = Storage::sqlite(&args.db_url).await?;
    info!(db_url = %args.db_url, "storage ready");
    let services =
        AppServices::from_storage(&storage, Clock::default_clock(), args.export_dir.clone()).await;
    let assessment = services.assessment();

    match cmd {
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(WINDOW_TITLE)
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
        }
        Command::Summary => {
            let summary = assessment.summary();
            println!("Answered:    {}/{}", summary.completed, summary.total_questions);
            println!("Total score: {}/{}", summary.total_score, summary.max_score);
            println!("Average:     {:.2}", summary.average);
            println!("Band:        {}", summary.band.label());
            println!("{}", summary.interpretation());
        }
        Command::Export => {
            let path = services.exporter().write(&assessment.export_snapshot())?;
            println!("{}", path.display());
        }
        Command::Print => {
            print!("{}", render_print_report(&assessment.export_snapshot()));
        }
        Command::Reset => {
            let outcome = if args.assume_yes {
                assessment.reset(true).await
            } else {
                assessment.reset(confirm_on_stdin).await
            };
            match outcome {
                ResetOutcome::Declined => println!("Nothing cleared."),
                ResetOutcome::Cleared(status) => {
                    report_write(&status);
                    println!("All answers cleared.");
                }
            }
        }
        Command::Answer => {
            let (id, score) = args.answer()?;
            let status = assessment.set_answer(id, score).await?;
            report_write(&status);
            println!("{id} = {} ({})", score.value(), score.label());
        }
        Command::Notes => {
            let text = args.positionals.concat();
            report_write(&assessment.set_notes(text).await);
            println!("Notes saved.");
        }
    }

    Ok(())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    fn parse(items: &[&str]) -> Result<(Command, Args), ArgsError> {
        let mut argv = argv(items);
        let cmd = parse_command(&mut argv)?;
        let args = Args::parse(cmd, &mut argv.into_iter())?;
        Ok((cmd, args))
    }

    #[test]
    fn no_arguments_launches_ui() {
        let (cmd, args) = parse(&[]).unwrap();
        assert_eq!(cmd, Command::Ui);
        assert!(args.db_url.starts_with("sqlite://"));
    }

    #[test]
    fn flags_without_subcommand_launch_ui() {
        let (cmd, args) = parse(&["--db", "sqlite::memory:"]).unwrap();
        assert_eq!(cmd, Command::Ui);
        assert_eq!(args.db_url, "sqlite::memory:");
    }

    #[test]
    fn export_accepts_out_dir() {
        let (cmd, args) = parse(&["export", "--out", "/tmp/results"]).unwrap();
        assert_eq!(cmd, Command::Export);
        assert_eq!(args.export_dir, PathBuf::from("/tmp/results"));
    }

    #[test]
    fn out_is_rejected_outside_export() {
        assert!(matches!(
            parse(&["summary", "--out", "x"]),
            Err(ArgsError::UnknownArg(arg)) if arg == "--out"
        ));
    }

    #[test]
    fn reset_yes_skips_prompt() {
        let (cmd, args) = parse(&["reset", "--yes"]).unwrap();
        assert_eq!(cmd, Command::Reset);
        assert!(args.assume_yes);
    }

    #[test]
    fn answer_parses_id_and_score() {
        let (cmd, args) = parse(&["answer", "3-2", "4"]).unwrap();
        assert_eq!(cmd, Command::Answer);
        let (id, score) = args.answer().unwrap();
        assert_eq!(id.to_string(), "3-2");
        assert_eq!(score, Score::Agree);
    }

    #[test]
    fn answer_rejects_bad_input() {
        let (_, args) = parse(&["answer", "3-2", "9"]).unwrap();
        assert!(matches!(args.answer(), Err(ArgsError::Input(_))));
        let (_, args) = parse(&["answer", "three", "4"]).unwrap();
        assert!(matches!(args.answer(), Err(ArgsError::Input(_))));
        let (_, args) = parse(&["answer", "3-2", "high"]).unwrap();
        assert!(matches!(args.answer(), Err(ArgsError::InvalidScore { .. })));
    }

    #[test]
    fn answer_requires_both_arguments() {
        assert!(matches!(
            parse(&["answer", "3-2"]),
            Err(ArgsError::MissingArgument { name: "score" })
        ));
    }

    #[test]
    fn unknown_subcommand_is_an_error() {
        assert!(matches!(parse(&["frobnicate"]), Err(ArgsError::UnknownArg(_))));
    }

    #[test]
    fn relative_db_paths_become_absolute() {
        let url = normalize_sqlite_url("sqlite:data/answers.db".into());
        assert!(url.starts_with("sqlite:///"), "{url}");
        assert!(url.ends_with("data/answers.db"));
    }
}
