// Domain layer: resource catalog, payload models, filters and ports.
// No I/O happens here.

pub mod filter;
pub mod model;
pub mod ports;
pub mod resource;
