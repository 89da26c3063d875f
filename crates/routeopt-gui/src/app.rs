//! Main application structure

use eframe::egui;
use routeopt_app::fleet::{default_fleet, find_vehicle};
use routeopt_app::{Config, PlannerForm};
use routeopt_domain::DefaultRandom;
use routeopt_types::Vehicle;

use crate::location_panel::LocationPanel;
use crate::routes_panel::RoutesPanel;
use crate::vehicle_panel::VehiclePanel;

/// Main application state
pub struct RouteOptimizerApp {
    /// Form state: vehicle selection, locations, generated routes
    form: PlannerForm,
    /// Predefined vehicles offered for selection
    fleet: Vec<Vehicle>,
    /// Application configuration
    config: Config,
    /// Random source for route generation; seeded when the config pins a seed
    random: DefaultRandom,
    /// Vehicle selection panel state
    vehicle_panel: VehiclePanel,
    /// Start location form state
    start_panel: LocationPanel,
    /// End location form state
    end_panel: LocationPanel,
}

impl RouteOptimizerApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Configure style for better responsiveness
        let mut style = (*cc.egui_ctx.style()).clone();
        style.interaction.tooltip_delay = 0.5;
        style.animation_time = 0.1;
        cc.egui_ctx.set_style(style);

        // Load configuration
        let config = Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {e}");
            Config::default()
        });

        let random = match config.rng_seed {
            Some(seed) => {
                log::info!("Using pinned RNG seed {seed}");
                DefaultRandom::with_seed(seed)
            }
            None => DefaultRandom::new(),
        };

        let fleet = default_fleet();
        let mut form = PlannerForm::new();

        // Restore the remembered vehicle selection
        if let Some(id) = config.default_vehicle_id.as_deref() {
            if let Some(vehicle) = find_vehicle(&fleet, id) {
                form.select_vehicle(vehicle.clone());
            }
        }

        Self {
            form,
            fleet,
            config,
            random,
            vehicle_panel: VehiclePanel::new(),
            start_panel: LocationPanel::start(),
            end_panel: LocationPanel::end(),
        }
    }

    fn remember_selection(&mut self) {
        let selected_id = self.form.selected_vehicle().map(|v| v.id.clone());
        if self.config.default_vehicle_id != selected_id {
            self.config.default_vehicle_id = selected_id;
            if let Err(e) = self.config.save() {
                log::warn!("Failed to save config: {e}");
            }
        }
    }
}

impl eframe::App for RouteOptimizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Route Optimization System");
                ui.add_space(10.0);

                // Vehicle and location panels side by side
                let mut selection_changed = false;
                ui.columns(3, |columns| {
                    selection_changed =
                        self.vehicle_panel
                            .show(&mut columns[0], &self.fleet, &mut self.form);
                    self.start_panel.show(&mut columns[1], &mut self.form);
                    self.end_panel.show(&mut columns[2], &mut self.form);
                });
                if selection_changed {
                    self.remember_selection();
                }

                ui.add_space(15.0);

                // Optimize trigger; inert while preconditions are unmet
                ui.vertical_centered(|ui| {
                    let can_optimize = self.form.can_optimize();
                    if ui
                        .add_enabled(can_optimize, egui::Button::new("Optimize Route"))
                        .clicked()
                    {
                        self.form.optimize(&self.random);
                        log::info!("Generated {} route alternatives", self.form.routes().len());
                    }
                });

                ui.add_space(15.0);

                RoutesPanel::show(ui, self.form.routes());
            });
        });
    }
}
