// Domain layer: the student record and the ports the tracker depends on.

pub mod model;
pub mod ports;
