use std::path::PathBuf;

mod backend_bridge;
mod controller;
mod ui;

use anyhow::{anyhow, Context};
use clap::Parser;
use client_core::config::{load_settings_from, SETTINGS_FILE};
use crossbeam_channel::bounded;
use eframe::egui;
use shared::messages::Locale;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::ProductAdminApp;

#[derive(Parser, Debug)]
#[command(about = "Desktop client for browsing and editing products")]
struct Args {
    /// Product API base URL; overrides the settings file and environment.
    #[arg(long)]
    api_url: Option<String>,
    #[arg(long)]
    locale: Option<Locale>,
    #[arg(long, default_value = SETTINGS_FILE)]
    settings: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings = load_settings_from(&args.settings, |key| std::env::var(key).ok())
        .with_context(|| format!("failed to load settings from '{}'", args.settings.display()))?;
    if let Some(api_url) = &args.api_url {
        settings.set_api_base_url(api_url)?;
    }
    if let Some(locale) = args.locale {
        settings.locale = locale;
    }
    let locale = settings.locale;

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(256);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(2048);
    backend_bridge::runtime::launch(settings, cmd_rx, ui_tx.clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Products")
            .with_inner_size([960.0, 640.0])
            .with_min_inner_size([640.0, 420.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Products",
        options,
        Box::new(move |_cc| Ok(Box::new(ProductAdminApp::new(cmd_tx, ui_rx, ui_tx, locale)))),
    )
    .map_err(|err| anyhow!("desktop gui exited with error: {err}"))
}
