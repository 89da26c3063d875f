//! Location entry panel
//!
//! Keeps raw edit buffers for the three fields and routes every change
//! through the form's `update_location_field`, so the numeric parse-fallback
//! policy lives in one place.

use eframe::egui::{self, RichText, Ui};
use routeopt_app::{LocationField, LocationSlot, PlannerForm};

/// Start/end location form
pub struct LocationPanel {
    slot: LocationSlot,
    title: &'static str,
    name_input: String,
    lat_input: String,
    lng_input: String,
}

impl LocationPanel {
    pub fn start() -> Self {
        Self::new(LocationSlot::Start, "Start Location")
    }

    pub fn end() -> Self {
        Self::new(LocationSlot::End, "End Location")
    }

    fn new(slot: LocationSlot, title: &'static str) -> Self {
        Self {
            slot,
            title,
            name_input: String::new(),
            lat_input: String::new(),
            lng_input: String::new(),
        }
    }

    /// Render the name/lat/lng fields, pushing edits into the form
    pub fn show(&mut self, ui: &mut Ui, form: &mut PlannerForm) {
        ui.label(RichText::new(self.title).strong());
        ui.add_space(5.0);

        egui::Grid::new(self.title)
            .num_columns(2)
            .spacing([10.0, 6.0])
            .show(ui, |ui| {
                ui.label("Name:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.name_input)
                        .hint_text("Enter location name")
                        .desired_width(160.0),
                );
                if response.changed() {
                    form.update_location_field(self.slot, LocationField::Name, &self.name_input);
                }
                ui.end_row();

                ui.label("Latitude:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.lat_input)
                        .hint_text("Enter latitude")
                        .desired_width(160.0),
                );
                if response.changed() {
                    form.update_location_field(self.slot, LocationField::Lat, &self.lat_input);
                }
                ui.end_row();

                ui.label("Longitude:");
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.lng_input)
                        .hint_text("Enter longitude")
                        .desired_width(160.0),
                );
                if response.changed() {
                    form.update_location_field(self.slot, LocationField::Lng, &self.lng_input);
                }
                ui.end_row();
            });
    }
}
