// Domain layer: call descriptors, shared response shapes and the transport port.

pub mod model;
pub mod ports;
