mod controller;
mod counters;
mod engine;

pub use controller::{CountdownController, CountdownState};
pub use counters::{counter_slots, CounterSlot, CounterUpdate};
pub use engine::CountdownEngine;
