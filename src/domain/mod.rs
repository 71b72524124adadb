// Domain layer: display models and ports. No dependencies beyond chrono/serde.

pub mod model;
pub mod ports;
