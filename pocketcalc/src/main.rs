//! pocketcalc - a four-function desktop calculator

mod app;

use app::PocketCalcApp;
use eframe::NativeOptions;
use pocketcore::CalcSettings;
use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let settings = CalcSettings::load();
    tracing::info!(
        significant_digits = settings.significant_digits,
        show_preview = settings.show_preview,
        "starting calculator"
    );

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([260.0, 380.0])
            .with_resizable(false)
            .with_title("calculator"),
        ..Default::default()
    };

    eframe::run_native(
        "calculator",
        options,
        Box::new(|cc| Box::new(PocketCalcApp::new(cc, settings))),
    )
}
