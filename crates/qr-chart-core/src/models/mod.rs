//! Domain models for the qr-chart system.

mod patient;
mod scan;

pub use patient::*;
pub use scan::*;
