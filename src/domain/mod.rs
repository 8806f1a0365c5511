//! Domain layer: payment value types, the strategy capability and the
//! backend adapter ports strategies talk to.

pub mod method;
pub mod ports;
pub mod request;
pub mod result;
pub mod strategy;
