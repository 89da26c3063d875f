//! GUI entry point for Route Optimizer

mod app;
mod location_panel;
mod routes_panel;
mod vehicle_panel;

use app::RouteOptimizerApp;
use eframe::egui;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Route Optimizer",
        options,
        Box::new(|cc| Ok(Box::new(RouteOptimizerApp::new(cc)))),
    )
}
