//! Command-line front end of the back-office client.
//!
//! The session and language persist in the client state database between
//! invocations, so `backoffice login` followed by `backoffice employees`
//! behaves like signing in once and browsing.

use std::time::Duration;

use anyhow::{bail, Context, Result};
use backoffice_client::guard::Access;
use backoffice_client::i18n::Language;
use backoffice_client::routes::Route;
use backoffice_client::session::Avatar;
use backoffice_client::{init_tracing, labels, Backoffice, ClientConfig, DataSource};
use backoffice_shared::constants::APP_NAME;
use backoffice_shared::{LoginRequest, PageQuery};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

const LOGOUT_GRACE: Duration = Duration::from_secs(3);

#[derive(Debug, Parser)]
#[command(name = "backoffice", about = "Back-office client")]
struct Args {
    /// Data source, overrides BACKOFFICE_DATA_SOURCE (`mock` or `live`)
    #[arg(long, value_name = "SOURCE")]
    source: Option<DataSource>,
    /// API base URL, overrides BACKOFFICE_API_BASE_URL
    #[arg(long, value_name = "URL")]
    api: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and remember the session
    Login {
        #[arg(short = 'u', long)]
        username: String,
        #[arg(short = 'p', long)]
        password: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Whoami,
    /// Show the sidebar menu for the signed-in user
    Menu,
    /// Show what opening a page would do
    Open { path: String },
    /// Show the dashboard
    Dashboard,
    /// List employees, optionally filtered by keyword
    Employees { keyword: Option<String> },
    /// Show or switch the UI language (`en`, `zh`, or `toggle`)
    Lang { value: Option<String> },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    info!("Starting {APP_NAME} client v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(source) = args.source {
        config.data_source = source;
    }
    if let Some(api) = args.api {
        config.api_base_url = api.trim_end_matches('/').to_string();
    }
    info!(?config, "Loaded configuration");

    let app = Backoffice::open(config).context("failed to start client")?;
    let t = app.language().translator();

    match args.command {
        Command::Login { username, password } => {
            let user = app
                .session()
                .login(&LoginRequest::new(username, password))
                .await?;
            println!("{} {} ({})", t.t("welcomeBack"), user.username, user.role);
        }
        Command::Logout => {
            if let Some(request) = app.session().logout() {
                if tokio::time::timeout(LOGOUT_GRACE, request).await.is_err() {
                    warn!("backend did not acknowledge logout in time");
                }
            }
            println!("{}", t.t("signOut"));
        }
        Command::Whoami => {
            let identity = app.session().display_identity();
            let avatar = match identity.avatar {
                Avatar::Image(url) => url,
                Avatar::Initial(c) => c.to_string(),
            };
            println!("{} [{}] {}", identity.name, identity.role, avatar);
        }
        Command::Menu => {
            for group in app.menu() {
                println!("{}", group.title);
                for item in group.items {
                    println!("  {:<14} {}", item.route.path(), item.title);
                }
            }
        }
        Command::Open { path } => match app.guard().decide(&path) {
            Access::Render(route) => println!("{}", t.t(route.title_key())),
            Access::RedirectToLogin { from } => {
                println!("-> {} (from {from})", Route::Login.path())
            }
            Access::RedirectToLanding => println!("-> {}", Route::LANDING.path()),
            Access::Wait => println!("..."),
        },
        Command::Dashboard => {
            require_session(&app)?;
            let dashboard = app.dashboard().await;
            if let Some(today) = dashboard.attendance {
                println!(
                    "{}: {} {}",
                    t.t("attendance"),
                    today.check_in_time.as_deref().unwrap_or("-"),
                    today.check_out_time.as_deref().unwrap_or("-"),
                );
            }
            println!("{}", t.t("latestNotices"));
            for notice in dashboard.notices {
                println!("  {}  {}", notice.publish_time, notice.title);
            }
            println!("{}", t.t("contractValueTrends"));
            for stat in dashboard.contract_stats {
                println!("  {:<4} {}", stat.name, stat.value);
            }
        }
        Command::Employees { keyword } => {
            require_session(&app)?;
            let mut query = PageQuery::default();
            if let Some(keyword) = keyword {
                query = query.with_keyword(keyword);
            }
            let page = app.services().employees.list(&query).await?.into_data()?;
            for e in page.records {
                println!(
                    "{:<8} {:<16} {:<12} {}",
                    e.emp_no,
                    e.emp_name,
                    e.position,
                    t.t(labels::employee_status(e.status)),
                );
            }
            println!("{} / {}", t.t("totalEmployees"), page.total);
        }
        Command::Lang { value } => {
            let language = match value.as_deref() {
                None => app.language().language(),
                Some("toggle") => app.language().toggle()?,
                Some(other) => {
                    let Some(language) = Language::parse(other) else {
                        bail!("unknown language {other:?}");
                    };
                    app.language().set_language(language)?;
                    language
                }
            };
            println!("{language}");
        }
    }

    Ok(())
}

fn require_session(app: &Backoffice) -> Result<()> {
    if !app.session().is_authenticated() {
        bail!("not signed in, run `backoffice login` first");
    }
    Ok(())
}
