//! Generated route cards

use eframe::egui::{self, Color32, RichText, Ui};
use routeopt_types::{EmissionBand, Route, TrafficLevel};

/// Read-only list of generated route alternatives
pub struct RoutesPanel;

impl RoutesPanel {
    /// Render one card per route; renders nothing before the first run
    pub fn show(ui: &mut Ui, routes: &[Route]) {
        if routes.is_empty() {
            return;
        }

        ui.label(RichText::new("Optimized Routes").strong());
        ui.add_space(8.0);

        for route in routes {
            egui::Frame::new()
                .fill(Color32::from_gray(30))
                .inner_margin(10.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    egui::Grid::new(&route.id)
                        .num_columns(4)
                        .spacing([30.0, 6.0])
                        .show(ui, |ui| {
                            ui.label(RichText::new("Route Details").strong());
                            ui.label(RichText::new("Traffic").strong());
                            ui.label(RichText::new("Weather").strong());
                            ui.label(RichText::new("Emissions").strong());
                            ui.end_row();

                            ui.vertical(|ui| {
                                ui.label(format!("Distance: {:.2} km", route.distance_km));
                                ui.label(format!(
                                    "Time: {:.1} hours",
                                    route.estimated_time_hours
                                ));
                            });
                            ui.label(
                                RichText::new(route.traffic_level.label())
                                    .color(traffic_color(route.traffic_level)),
                            );
                            ui.label(route.weather_condition.label());
                            ui.label(
                                RichText::new(format!("{:.2} CO2 kg", route.emissions_kg))
                                    .color(emission_color(route.emission_band())),
                            );
                            ui.end_row();
                        });
                });
            ui.add_space(8.0);
        }
    }
}

fn traffic_color(level: TrafficLevel) -> Color32 {
    match level {
        TrafficLevel::Low => Color32::LIGHT_GREEN,
        TrafficLevel::Medium => Color32::YELLOW,
        TrafficLevel::High => Color32::LIGHT_RED,
    }
}

fn emission_color(band: EmissionBand) -> Color32 {
    match band {
        EmissionBand::Low => Color32::LIGHT_GREEN,
        EmissionBand::Moderate => Color32::YELLOW,
        EmissionBand::High => Color32::LIGHT_RED,
    }
}
