// Domain layer: size tables, records, preferences and the store port.

pub mod model;
pub mod ports;
