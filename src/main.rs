//! Stargrid - rate a long list of items, loaded a window at a time
//! Built with iced

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod features;
mod i18n;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stargrid=info")),
        )
        .init();

    iced::daemon(app::App::new, app::App::update, app::App::view)
        .title(app::App::title)
        .theme(app::App::theme)
        .subscription(app::App::subscription)
        .antialiasing(true)
        .run()?;

    Ok(())
}
