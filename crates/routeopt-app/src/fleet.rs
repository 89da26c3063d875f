//! Predefined vehicle fleet
//!
//! Reference data only; the form selects from this list, it never edits it.

use routeopt_types::{Vehicle, VehicleType};

/// The vehicles offered in the selection panel
pub fn default_fleet() -> Vec<Vehicle> {
    vec![
        Vehicle {
            id: "v1".to_string(),
            vehicle_type: VehicleType::Truck,
            capacity_kg: 2000.0,
            emission_rate: 2.5,
        },
        Vehicle {
            id: "v2".to_string(),
            vehicle_type: VehicleType::Van,
            capacity_kg: 1000.0,
            emission_rate: 1.8,
        },
    ]
}

/// Look up a fleet vehicle by id
pub fn find_vehicle<'a>(fleet: &'a [Vehicle], id: &str) -> Option<&'a Vehicle> {
    fleet.iter().find(|vehicle| vehicle.id == id)
}
