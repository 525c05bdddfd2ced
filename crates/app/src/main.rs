use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use roadmap_core::PageConfig;
use roadmap_core::model::Roadmap;
use services::{AppServices, Clock, ProgressStore, ThemeService, load_roadmap};
use tracing_subscriber::{EnvFilter, fmt as log_fmt};
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://roadmap.sqlite3";

#[derive(Debug, PartialEq, Eq)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDbUrl { raw: String },
    InvalidContentPath { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
            ArgsError::InvalidContentPath { raw } => write!(f, "invalid --content value: {raw}"),
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
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn config(&self) -> PageConfig {
        self.services.config().clone()
    }

    fn roadmap(&self) -> Arc<Roadmap> {
        self.services.roadmap()
    }

    fn progress(&self) -> Arc<ProgressStore> {
        self.services.progress()
    }

    fn theme(&self) -> Arc<ThemeService> {
        self.services.theme()
    }
}

#[derive(Debug, PartialEq, Eq)]
struct Args {
    db_url: String,
    content: Option<PathBuf>,
}

/// Values picked up from the environment before flags are applied.
#[derive(Debug, Default)]
struct EnvDefaults {
    db_url: Option<String>,
    content: Option<String>,
}

impl EnvDefaults {
    fn from_env() -> Self {
        Self {
            db_url: std::env::var("ROADMAP_DB_URL").ok(),
            content: std::env::var("ROADMAP_CONTENT").ok(),
        }
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [ui] [--db <sqlite_url>] [--content <path>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://roadmap.sqlite3");
    eprintln!("  --content <built-in roadmap>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ROADMAP_DB_URL, ROADMAP_CONTENT, RUST_LOG");
}

impl Args {
    fn parse(
        args: &mut impl Iterator<Item = String>,
        env: EnvDefaults,
    ) -> Result<Option<Self>, ArgsError> {
        let mut db_url = env
            .db_url
            .filter(|value| !value.trim().is_empty())
            .map_or_else(|| DEFAULT_DB_URL.to_string(), normalize_sqlite_url);
        let mut content = env
            .content
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--content" => {
                    let value = require_value(args, "--content")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidContentPath { raw: value });
                    }
                    content = Some(PathBuf::from(value));
                }
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Some(Self { db_url, content }))
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

fn init_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;
    log_fmt().with_env_filter(filter).init();
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv: Vec<String> = std::env::args().skip(1).collect();

    // `ui` is the only subcommand and also the default.
    match argv.first().map(String::as_str) {
        Some("ui") => {
            argv.remove(0);
        }
        Some(first) if !first.starts_with('-') => {
            eprintln!("unknown subcommand: {first}");
            print_usage();
            return Err(ArgsError::UnknownArg(first.to_string()).into());
        }
        _ => {}
    }

    let mut iter = argv.into_iter();
    let Some(parsed) = Args::parse(&mut iter, EnvDefaults::from_env()).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    init_tracing()?;

    let roadmap = load_roadmap(parsed.content.as_deref())?;
    tracing::info!(
        phases = roadmap.phases.len(),
        items = roadmap.trackable_items().len(),
        "roadmap content loaded"
    );

    // Open + migrate SQLite at startup. Keep this in the binary glue so core/services stay pure.
    prepare_sqlite_file(&parsed.db_url)?;
    let services = AppServices::new_sqlite(
        &parsed.db_url,
        Clock::default_clock(),
        roadmap,
        PageConfig::default(),
    )
    .await?;

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Security Career Roadmap")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
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

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
