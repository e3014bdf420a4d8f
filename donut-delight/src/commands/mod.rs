//! Commands for Donut Delight
//!
//! Each command renders one page (or a short status line) as a string.

pub mod list;
pub mod theme;

use crate::cli::Commands;
use crate::config::AppConfig;
use crate::core::{FileSessionStore, SessionStore, theme::load_theme};
use crate::pages::{Route, company, home, layout};
use anyhow::Context;
use donut_client::HttpCatalogSource;
use list::ListAction;

/// Execute a command against the configured catalog host and session
pub async fn execute(command: &Commands, config: &AppConfig) -> anyhow::Result<String> {
    match command {
        Commands::SessionEnd => end_session(config),
        Commands::Theme { theme: choice } => theme::run(&mut open_store(config)?, *choice),
        Commands::Home => render_route(Route::Home, config, &mut open_store(config)?).await,
        Commands::Company => {
            render_route(Route::CompanyInfo, config, &mut open_store(config)?).await
        }
        Commands::Open { path } => {
            let route = Route::resolve(path).with_context(|| format!("No page at {path}"))?;
            render_route(route, config, &mut open_store(config)?).await
        }
        Commands::List => render_list(config, &mut open_store(config)?, ListAction::View).await,
        Commands::Chomp { id } => {
            render_list(config, &mut open_store(config)?, ListAction::Chomp(*id)).await
        }
        Commands::Reset => render_list(config, &mut open_store(config)?, ListAction::Reset).await,
    }
}

fn open_store(config: &AppConfig) -> anyhow::Result<FileSessionStore> {
    FileSessionStore::open(&config.session_dir)
        .with_context(|| format!("Failed to open session in {}", config.session_dir.display()))
}

fn end_session(config: &AppConfig) -> anyhow::Result<String> {
    let ended = FileSessionStore::end_session(&config.session_dir)
        .with_context(|| format!("Failed to end session in {}", config.session_dir.display()))?;
    Ok(if ended {
        "Session ended.".to_string()
    } else {
        "No active session.".to_string()
    })
}

async fn render_route(
    route: Route,
    config: &AppConfig,
    store: &mut FileSessionStore,
) -> anyhow::Result<String> {
    let theme = load_theme(&*store);
    let body = match route {
        Route::Home => home::render(),
        Route::CompanyInfo => company::render(),
        Route::List => return render_list(config, store, ListAction::View).await,
    };
    Ok(layout::render_page(route, theme, &body))
}

async fn render_list<S: SessionStore>(
    config: &AppConfig,
    store: &mut S,
    action: ListAction,
) -> anyhow::Result<String> {
    let theme = load_theme(&*store);
    let source = HttpCatalogSource::from_config(&config.client_config())
        .context("Failed to build catalog client")?;
    let body = list::run(source, &mut *store, &config.retry_policy(), action).await?;
    Ok(layout::render_page(Route::List, theme, &body))
}
