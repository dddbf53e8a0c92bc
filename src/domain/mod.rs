// Domain layer: value types and ports shared by the formatters.

pub mod model;
pub mod ports;
