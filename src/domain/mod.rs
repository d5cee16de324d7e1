// Domain layer: booking models and ports. No I/O.

pub mod model;
pub mod ports;
