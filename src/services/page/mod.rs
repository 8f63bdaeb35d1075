mod controller;
mod runtime;

pub use controller::{PageController, PageSnapshot};
pub use runtime::{CountdownTimer, PageRuntime, SharedPage};
