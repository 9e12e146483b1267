use std::fmt;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::trivia_source::{parse_amount, parse_category};
use services::{ConfigError, OpenTdbSource, QuizLoader, TriviaSourceConfig};
use ui::{App, UiApp, build_app_context};

const DEFAULT_LOG_FILTER: &str = "services=info,ui=info,app=info";

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Invalid { flag: &'static str, source: ConfigError },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Invalid { flag, source } => write!(f, "invalid {flag} value: {source}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    quiz_loader: Arc<QuizLoader>,
}

impl UiApp for DesktopApp {
    fn quiz_loader(&self) -> Arc<QuizLoader> {
        Arc::clone(&self.quiz_loader)
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--amount <n>] [--api-url <url>] [--category <id>]");
    eprintln!("                      [--difficulty <easy|medium|hard>] [--type <multiple|boolean>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --amount 5");
    eprintln!("  --api-url https://opentdb.com/api.php");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  TRIVIA_API_URL, TRIVIA_AMOUNT, TRIVIA_CATEGORY, TRIVIA_DIFFICULTY, TRIVIA_TYPE");
    eprintln!("  RUST_LOG (default: {DEFAULT_LOG_FILTER})");
}

enum Parsed {
    Run(TriviaSourceConfig),
    Help,
}

/// Apply command-line flags on top of `config` (usually read from the environment).
fn parse_args(
    mut config: TriviaSourceConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Parsed, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--amount" => {
                let value = require_value(args, "--amount")?;
                config.amount = parse_amount(&value).map_err(|source| ArgsError::Invalid {
                    flag: "--amount",
                    source,
                })?;
            }
            "--api-url" => {
                let value = require_value(args, "--api-url")?;
                if value.trim().is_empty() {
                    return Err(ArgsError::Invalid {
                        flag: "--api-url",
                        source: ConfigError::EmptyUrl,
                    });
                }
                config.base_url = value;
            }
            "--category" => {
                let value = require_value(args, "--category")?;
                config.category =
                    Some(parse_category(&value).map_err(|source| ArgsError::Invalid {
                        flag: "--category",
                        source,
                    })?);
            }
            "--difficulty" => {
                let value = require_value(args, "--difficulty")?;
                config.difficulty = Some(value.parse().map_err(|source| ArgsError::Invalid {
                    flag: "--difficulty",
                    source,
                })?);
            }
            "--type" => {
                let value = require_value(args, "--type")?;
                config.kind = Some(value.parse().map_err(|source| ArgsError::Invalid {
                    flag: "--type",
                    source,
                })?);
            }
            "--help" | "-h" => return Ok(Parsed::Help),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }

    Ok(Parsed::Run(config))
}

fn init_logging() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_owned());
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let config = match parse_args(TriviaSourceConfig::from_env(), &mut argv).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })? {
        Parsed::Run(config) => config,
        Parsed::Help => {
            print_usage();
            return Ok(());
        }
    };

    init_logging();
    tracing::info!(
        url = %config.base_url,
        amount = config.amount,
        "starting trivia quiz"
    );

    let source = Arc::new(OpenTdbSource::new(config));
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        quiz_loader: Arc::new(QuizLoader::new(source)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Trivia")
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
