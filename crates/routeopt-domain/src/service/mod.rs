//! Domain service layer

pub mod route_generator;
