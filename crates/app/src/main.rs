use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use planner_core::model::SessionState;
use services::{AuthConfig, AuthService, Clock, HttpAuthApi, SessionStore};
use storage::repository::Storage;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

const DEFAULT_DB_URL: &str = "sqlite://planner.sqlite3";

/// EduPlanner desktop client.
#[derive(Parser, Debug)]
#[command(name = "eduplanner", version, about, long_about = None)]
struct Args {
    /// `SQLite` database holding the persisted session
    #[arg(long = "db", env = "PLANNER_DB_URL", default_value = DEFAULT_DB_URL)]
    db_url: String,

    /// Base URL of the authentication API
    #[arg(long, env = "PLANNER_API_BASE_URL", default_value = AuthConfig::DEFAULT_BASE_URL)]
    api_base_url: String,

    /// Request timeout for the authentication API, in seconds
    #[arg(long, env = "PLANNER_API_TIMEOUT_SECS", default_value_t = 15)]
    timeout_secs: u64,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    /// Open the desktop window (default)
    Ui,
    /// Forget the persisted session
    Logout,
    /// Print who is signed in
    Whoami,
}

struct DesktopApp {
    sessions: Arc<SessionStore>,
    auth: Arc<AuthService>,
}

impl UiApp for DesktopApp {
    fn session_store(&self) -> Arc<SessionStore> {
        Arc::clone(&self.sessions)
    }

    fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth)
    }
}

fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == "sqlite::memory:" || trimmed.starts_with("sqlite://") {
        return trimmed.to_string();
    }

    let path = Path::new(trimmed.strip_prefix("sqlite:").unwrap_or(trimmed));
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

/// Make sure the database file and its directory exist before sqlx opens it.
fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid --db value: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid --db value: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }
    Ok(())
}

async fn open_sessions(db_url: &str) -> anyhow::Result<Arc<SessionStore>> {
    prepare_sqlite_file(db_url)?;
    let storage = Storage::sqlite(db_url)
        .await
        .with_context(|| format!("opening {db_url}"))?;
    Ok(Arc::new(SessionStore::new(Clock::system(), storage.sessions)))
}

async fn run(args: Args) -> anyhow::Result<()> {
    let db_url = normalize_sqlite_url(&args.db_url);
    tracing::debug!(db = %db_url, "using database");
    let sessions = open_sessions(&db_url).await?;

    match args.command.unwrap_or(Command::Ui) {
        Command::Ui => {
            let config = AuthConfig::new(&args.api_base_url, Duration::from_secs(args.timeout_secs))
                .context("invalid --api-base-url")?;
            tracing::info!(api = %config.base_url(), "starting desktop client");
            let api = HttpAuthApi::new(config)?;
            let auth = Arc::new(AuthService::new(Arc::new(api), Arc::clone(&sessions)));

            let app: Arc<dyn UiApp> = Arc::new(DesktopApp { sessions, auth });
            let context = build_app_context(&app);

            // Some tao setups default to always-on-top; turn it off explicitly.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("EduPlanner")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
        Command::Logout => {
            sessions.logout().await?;
            println!("Signed out.");
            Ok(())
        }
        Command::Whoami => {
            match sessions.restore().await? {
                SessionState::Authenticated(session) => {
                    println!("{}", session.identity().display_name());
                }
                _ => println!("Not signed in."),
            }
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    // RUST_LOG wins over --verbose.
    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(2)
        }
    }
}
