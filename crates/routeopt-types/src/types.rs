//! Data model for the route planning form

use serde::{Deserialize, Serialize};

/// Vehicle category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Truck,
    Van,
}

impl VehicleType {
    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
        }
    }
}

/// Vehicle reference data. Predefined, not user-editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier (e.g., "v1")
    pub id: String,
    /// Vehicle category
    pub vehicle_type: VehicleType,
    /// Maximum payload (kg)
    pub capacity_kg: f64,
    /// CO2 emitted per km driven (kg)
    pub emission_rate: f64,
}

/// A named point with coordinates. Coordinates are free-form; no range
/// validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    /// Create an empty location with the given identifier
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }
}

/// Traffic density on a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficLevel {
    Low,
    Medium,
    High,
}

impl TrafficLevel {
    /// All variants, in pick order
    pub const ALL: [TrafficLevel; 3] =
        [TrafficLevel::Low, TrafficLevel::Medium, TrafficLevel::High];

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            TrafficLevel::Low => "low",
            TrafficLevel::Medium => "medium",
            TrafficLevel::High => "high",
        }
    }
}

/// Weather along a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Clear,
    Rain,
    Snow,
}

impl WeatherCondition {
    /// All variants, in pick order
    pub const ALL: [WeatherCondition; 3] = [
        WeatherCondition::Clear,
        WeatherCondition::Rain,
        WeatherCondition::Snow,
    ];

    /// Get display label
    pub fn label(&self) -> &'static str {
        match self {
            WeatherCondition::Clear => "clear",
            WeatherCondition::Rain => "rain",
            WeatherCondition::Snow => "snow",
        }
    }
}

/// Emission severity band used for display emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmissionBand {
    Low,
    Moderate,
    High,
}

impl EmissionBand {
    /// Band thresholds: below 100 kg is low, below 200 kg is moderate,
    /// everything above is high.
    pub fn from_emissions(emissions_kg: f64) -> Self {
        if emissions_kg < 100.0 {
            EmissionBand::Low
        } else if emissions_kg < 200.0 {
            EmissionBand::Moderate
        } else {
            EmissionBand::High
        }
    }
}

/// One candidate path between two locations. Created only by the route
/// generator; immutable once created, replaced wholesale on each run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Route {
    /// Slot identifier ("route-0".."route-2"); restarts every generation
    pub id: String,
    pub start: Location,
    pub end: Location,
    pub distance_km: f64,
    pub estimated_time_hours: f64,
    pub traffic_level: TrafficLevel,
    pub weather_condition: WeatherCondition,
    pub emissions_kg: f64,
}

impl Route {
    /// Emission band for this route's emissions value
    pub fn emission_band(&self) -> EmissionBand {
        EmissionBand::from_emissions(self.emissions_kg)
    }
}
