// Domain layer: content records, form state and ports (interfaces).

pub mod model;
pub mod ports;
