use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use dioxus::LaunchBuilder;
#[cfg(feature = "desktop")]
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use portfolio_core::Clock;
use portfolio_core::model::PortfolioContent;
use portfolio_core::viewport::TrackerConfig;
use tracing::Level;
use ui::{App, DocumentScroller, ScrollerRef, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidInterval { raw: String },
    InvalidLogLevel { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidInterval { raw } => {
                write!(f, "invalid --title-interval-ms value: {raw}")
            }
            ArgsError::InvalidLogLevel { raw } => write!(f, "invalid --log-level value: {raw}"),
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

struct PortfolioApp {
    content: Arc<PortfolioContent>,
    tracker_config: TrackerConfig,
}

impl UiApp for PortfolioApp {
    fn content(&self) -> Arc<PortfolioContent> {
        Arc::clone(&self.content)
    }

    fn clock(&self) -> Clock {
        Clock::Default
    }

    fn tracker_config(&self) -> TrackerConfig {
        self.tracker_config
    }

    fn scroller(&self) -> ScrollerRef {
        Arc::new(DocumentScroller)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    content_path: Option<String>,
    title_interval: Duration,
    log_level: Level,
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--content <file.json>] [--title-interval-ms <ms>] [--log-level <level>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in DevPortfolio content");
    eprintln!("  --title-interval-ms 3000");
    eprintln!("  --log-level info");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PORTFOLIO_CONTENT, PORTFOLIO_TITLE_INTERVAL_MS, PORTFOLIO_LOG");
}

fn parse_interval(raw: String) -> Result<Duration, ArgsError> {
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ArgsError::InvalidInterval { raw }),
    }
}

fn parse_level(raw: String) -> Result<Level, ArgsError> {
    raw.trim()
        .parse::<Level>()
        .map_err(|_| ArgsError::InvalidLogLevel { raw })
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Option<Self>, ArgsError> {
        let mut content_path = env("PORTFOLIO_CONTENT").filter(|path| !path.trim().is_empty());
        let mut title_interval = env("PORTFOLIO_TITLE_INTERVAL_MS")
            .map(parse_interval)
            .transpose()?
            .unwrap_or(TrackerConfig::DEFAULT_TITLE_INTERVAL);
        let mut log_level = env("PORTFOLIO_LOG")
            .map(parse_level)
            .transpose()?
            .unwrap_or(Level::INFO);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--content" => content_path = Some(require_value(args, "--content")?),
                "--title-interval-ms" => {
                    title_interval = parse_interval(require_value(args, "--title-interval-ms")?)?;
                }
                "--log-level" => log_level = parse_level(require_value(args, "--log-level")?)?,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self {
            content_path,
            title_interval,
            log_level,
        }))
    }
}

fn load_content(path: Option<&str>) -> Result<PortfolioContent, Box<dyn std::error::Error>> {
    let Some(path) = path else {
        return Ok(PortfolioContent::default());
    };
    let raw = std::fs::read_to_string(path)?;
    let content = PortfolioContent::from_json(&raw).map_err(portfolio_core::Error::from)?;
    tracing::info!(path, projects = content.projects.len(), "loaded portfolio content");
    Ok(content)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = Args::parse(&mut argv, |key| std::env::var(key).ok()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;
    let Some(parsed) = parsed else {
        print_usage();
        return Ok(());
    };

    if let Err(err) = dioxus::logger::init(parsed.log_level) {
        eprintln!("logger already initialised: {err}");
    }

    let content = load_content(parsed.content_path.as_deref())?;
    let app = PortfolioApp {
        tracker_config: TrackerConfig::default().with_title_interval(parsed.title_interval),
        content: Arc::new(content),
    };
    let app: Arc<dyn UiApp> = Arc::new(app);
    let context = build_app_context(&app);

    let builder = LaunchBuilder::new().with_context(context);

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(
        DesktopConfig::new().with_window(
            WindowBuilder::new()
                .with_title(app.content().brand.as_str())
                .with_always_on_top(false),
        ),
    );

    builder.launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
