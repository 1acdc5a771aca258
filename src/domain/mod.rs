// Domain layer: wire models and the service port. No transport code here.

pub mod model;
pub mod ports;
