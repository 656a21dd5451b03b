/**
 * egui Native Desktop App - Main Entry Point
 *
 * Loads `.env`, installs the tracing subscriber and runs the Benevits client.
 * `BENEVITS_CONFIG` may point at a TOML file overriding the defaults.
 */
use eframe::egui;
use tracing_subscriber::EnvFilter;

use benevits::egui_app::{theme, views, AppState, Config};
use benevits::shared::config::AppConfig;

const CONFIG_ENV: &str = "BENEVITS_CONFIG";

fn load_config() -> Config {
    let Ok(path) = std::env::var(CONFIG_ENV) else {
        return Config::new();
    };

    match AppConfig::from_toml_file(&path).and_then(Config::with_builder) {
        Ok(config) => {
            tracing::info!("[CONFIG] Loaded {}", path);
            config
        }
        Err(e) => {
            tracing::warn!("[CONFIG] Ignoring {}: {}", path, e);
            Config::new()
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState::new(load_config())?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 820.0])
            .with_min_inner_size([380.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Benevits",
        options,
        Box::new(|cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(BenevitsApp { state }))
        }),
    )?;

    Ok(())
}

/// Main application state
struct BenevitsApp {
    state: AppState,
}

impl eframe::App for BenevitsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_side_menu(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);
        views::render_logout_dialog(ctx, &mut self.state);
        views::render_notice(ctx, &self.state);

        if self.state.is_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        } else {
            ctx.request_repaint_after(std::time::Duration::from_secs(1));
        }
    }
}
