// Domain layer: models and ports. Only serde and the error types, no HTTP.

pub mod model;
pub mod ports;
