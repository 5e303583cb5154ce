// Domain layer: campaign bookkeeping types and the ports the registry depends on.

pub mod model;
pub mod ports;
