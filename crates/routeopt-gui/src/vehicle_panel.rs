//! Vehicle selection panel

use eframe::egui::{self, Color32, RichText, Ui};
use routeopt_app::PlannerForm;
use routeopt_types::Vehicle;

/// Fleet selection panel: one selectable card per vehicle
pub struct VehiclePanel;

impl VehiclePanel {
    pub fn new() -> Self {
        Self
    }

    /// Render the fleet cards. Returns true when the selection changed.
    pub fn show(&mut self, ui: &mut Ui, fleet: &[Vehicle], form: &mut PlannerForm) -> bool {
        let mut changed = false;

        ui.label(RichText::new("Select Vehicle").strong());
        ui.add_space(5.0);

        for vehicle in fleet {
            let selected = form
                .selected_vehicle()
                .is_some_and(|v| v.id == vehicle.id);

            let fill = if selected {
                Color32::from_rgb(30, 45, 70)
            } else {
                Color32::from_gray(30)
            };

            let response = egui::Frame::new()
                .fill(fill)
                .inner_margin(10.0)
                .corner_radius(4.0)
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(vehicle.vehicle_type.label()).strong());
                    ui.label(
                        RichText::new(format!(
                            "Capacity: {:.0} kg | Emissions: {} CO2/km",
                            vehicle.capacity_kg, vehicle.emission_rate
                        ))
                        .color(Color32::GRAY)
                        .small(),
                    );
                })
                .response;

            let response = response.interact(egui::Sense::click());
            if response.clicked() && !selected {
                form.select_vehicle(vehicle.clone());
                changed = true;
            }

            ui.add_space(6.0);
        }

        if form.selected_vehicle().is_none() {
            ui.label(RichText::new("Pick a vehicle to enable optimization").color(Color32::YELLOW));
        }

        changed
    }
}
