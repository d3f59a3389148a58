// Domain layer: value types and ports (interfaces). Nothing here touches an RNG or the terminal.

pub mod model;
pub mod ports;
