//! Planner form state
//!
//! Owns everything the form edits: the selected vehicle, the two custom
//! locations, and the last generated route list. Memory-only; nothing here
//! survives a restart.

use routeopt_domain::{generate_routes, Random};
use routeopt_types::{Location, Route, Vehicle};

/// Which location the form is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationSlot {
    Start,
    End,
}

/// Which field of a location the form is editing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationField {
    Name,
    Lat,
    Lng,
}

/// Form state holder for the route planning page
#[derive(Debug, Clone)]
pub struct PlannerForm {
    selected_vehicle: Option<Vehicle>,
    start: Location,
    end: Location,
    routes: Vec<Route>,
}

impl Default for PlannerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerForm {
    /// Create an empty form: no vehicle, blank locations, no routes
    pub fn new() -> Self {
        Self {
            selected_vehicle: None,
            start: Location::with_id("custom-start"),
            end: Location::with_id("custom-end"),
            routes: Vec::new(),
        }
    }

    pub fn selected_vehicle(&self) -> Option<&Vehicle> {
        self.selected_vehicle.as_ref()
    }

    pub fn location(&self, slot: LocationSlot) -> &Location {
        match slot {
            LocationSlot::Start => &self.start,
            LocationSlot::End => &self.end,
        }
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Replace the selected vehicle. Always succeeds.
    pub fn select_vehicle(&mut self, vehicle: Vehicle) {
        self.selected_vehicle = Some(vehicle);
    }

    /// Apply a raw form edit to one location field.
    ///
    /// `Lat`/`Lng` parse the raw value as a float and silently fall back to
    /// `0.0` when it does not parse; this is the form's fallback policy, not
    /// an error. `Name` stores the raw string unchanged. Fields not named by
    /// `field` keep their values.
    pub fn update_location_field(&mut self, slot: LocationSlot, field: LocationField, raw: &str) {
        let location = match slot {
            LocationSlot::Start => &mut self.start,
            LocationSlot::End => &mut self.end,
        };
        match field {
            LocationField::Name => location.name = raw.to_string(),
            LocationField::Lat => location.lat = raw.parse().unwrap_or(0.0),
            LocationField::Lng => location.lng = raw.parse().unwrap_or(0.0),
        }
    }

    /// Whether the optimize action is currently available: a vehicle is
    /// selected and both location names are non-empty. Coordinates are never
    /// required.
    pub fn can_optimize(&self) -> bool {
        self.selected_vehicle.is_some() && !self.start.name.is_empty() && !self.end.name.is_empty()
    }

    /// Run the route generator and replace the stored route list.
    ///
    /// Silent no-op when [`can_optimize`](Self::can_optimize) is false; no
    /// error is raised and existing routes are kept.
    pub fn optimize(&mut self, random: &impl Random) {
        let Some(vehicle) = self.selected_vehicle.as_ref() else {
            return;
        };
        if !self.can_optimize() {
            return;
        }
        self.routes = generate_routes(&self.start, &self.end, vehicle, random);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::default_fleet;
    use routeopt_domain::DefaultRandom;

    fn form_with_names() -> PlannerForm {
        let mut form = PlannerForm::new();
        form.update_location_field(LocationSlot::Start, LocationField::Name, "Osaka");
        form.update_location_field(LocationSlot::End, LocationField::Name, "Nagoya");
        form
    }

    #[test]
    fn new_form_cannot_optimize() {
        assert!(!PlannerForm::new().can_optimize());
    }

    #[test]
    fn can_optimize_needs_vehicle_and_both_names() {
        let fleet = default_fleet();

        let mut form = form_with_names();
        assert!(!form.can_optimize());

        form.select_vehicle(fleet[0].clone());
        assert!(form.can_optimize());

        form.update_location_field(LocationSlot::End, LocationField::Name, "");
        assert!(!form.can_optimize());
    }

    #[test]
    fn coordinates_are_not_required() {
        let fleet = default_fleet();
        let mut form = form_with_names();
        form.select_vehicle(fleet[1].clone());
        assert_eq!(form.location(LocationSlot::Start).lat, 0.0);
        assert_eq!(form.location(LocationSlot::Start).lng, 0.0);
        assert!(form.can_optimize());
    }

    #[test]
    fn numeric_fields_fall_back_to_zero() {
        let mut form = PlannerForm::new();
        form.update_location_field(LocationSlot::Start, LocationField::Lat, "abc");
        assert_eq!(form.location(LocationSlot::Start).lat, 0.0);

        form.update_location_field(LocationSlot::Start, LocationField::Lat, "35.68");
        assert_eq!(form.location(LocationSlot::Start).lat, 35.68);

        form.update_location_field(LocationSlot::Start, LocationField::Lng, "");
        assert_eq!(form.location(LocationSlot::Start).lng, 0.0);
    }

    #[test]
    fn field_updates_keep_untouched_fields() {
        let mut form = PlannerForm::new();
        form.update_location_field(LocationSlot::End, LocationField::Name, "Kyoto");
        form.update_location_field(LocationSlot::End, LocationField::Lat, "35.0");
        let end = form.location(LocationSlot::End);
        assert_eq!(end.name, "Kyoto");
        assert_eq!(end.lat, 35.0);
        assert_eq!(end.lng, 0.0);
        assert_eq!(end.id, "custom-end");
    }

    #[test]
    fn optimize_is_inert_until_ready() {
        let mut form = form_with_names();
        form.optimize(&DefaultRandom::with_seed(5));
        assert!(form.routes().is_empty());
    }

    #[test]
    fn optimize_replaces_routes_wholesale() {
        let fleet = default_fleet();
        let mut form = form_with_names();
        form.select_vehicle(fleet[0].clone());

        let random = DefaultRandom::with_seed(5);
        form.optimize(&random);
        assert_eq!(form.routes().len(), 3);
        let first_distance = form.routes()[0].distance_km;

        form.optimize(&random);
        assert_eq!(form.routes().len(), 3);
        // a fresh base draw replaces the previous list rather than appending
        assert_ne!(form.routes()[0].distance_km, first_distance);
    }
}
