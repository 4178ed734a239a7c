// Adapters layer: concrete implementations of the domain ports
// (system clock, in-memory page fixture).

pub mod clock;
pub mod fixture;
