// Domain layer: core models and ports (interfaces). External dependencies
// limited to serde-adjacent types.

pub mod model;
pub mod ports;
