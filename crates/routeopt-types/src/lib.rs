//! Core types for route optimization

mod error;
mod types;

pub use error::*;
pub use types::*;
