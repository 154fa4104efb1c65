//! Tally - a calculator with history
//!
//! Single-operator arithmetic, memory register, and a history panel you can
//! copy from. Light and dark themes.

mod app;
mod clipboard;

use std::path::PathBuf;

use app::TallyApp;
use clap::Parser;
use eframe::NativeOptions;
use tallycore::{Preferences, ThemeConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "tally", version, about = "A calculator with history")]
struct Cli {
    /// Start with the light theme
    #[arg(long, conflicts_with = "dark")]
    light: bool,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,

    /// Keep at most this many history entries
    #[arg(long, value_name = "N")]
    history_cap: Option<usize>,

    /// Start with the history panel hidden
    #[arg(long)]
    no_history: bool,

    /// Preferences file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Command-line flags win over stored preferences for this session.
    fn apply_overrides(&self, prefs: &mut Preferences) {
        if self.light {
            prefs.dark_mode = false;
        }
        if self.dark {
            prefs.dark_mode = true;
        }
        if self.history_cap.is_some() {
            prefs.history_cap = self.history_cap;
        }
        if self.no_history {
            prefs.show_history = false;
        }
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("tally=info,tallycore=info")),
        )
        .init();

    let cli = Cli::parse();

    let prefs_path = match cli.config.clone() {
        Some(path) => Some(path),
        None => match Preferences::default_path() {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!(error = %e, "preferences will not be saved");
                None
            }
        },
    };
    let mut prefs = prefs_path
        .as_deref()
        .map(Preferences::load_or_default)
        .unwrap_or_default();
    let stored = prefs.clone();
    cli.apply_overrides(&mut prefs);
    tracing::info!(?prefs, path = ?prefs_path, "starting tally");

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 580.0])
            .with_min_inner_size([520.0, 500.0])
            .with_title("tally"),
        ..Default::default()
    };

    eframe::run_native(
        "tally",
        options,
        Box::new(move |cc| {
            ThemeConfig::for_mode(prefs.dark_mode).apply(&cc.egui_ctx);
            Box::new(TallyApp::new(cc, prefs, stored, prefs_path))
        }),
    )
}
