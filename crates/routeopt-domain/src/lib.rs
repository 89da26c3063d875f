//! Domain services for route-optimizer

mod random;
pub mod service;

pub use random::{DefaultRandom, Random};
pub use service::route_generator::{generate_routes, ROUTE_ALTERNATIVES};
