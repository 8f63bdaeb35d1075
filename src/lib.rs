// Wedding Countdown Library
// Countdown and navigation controller for the invitation page

pub mod error;
pub mod models;
pub mod services;
pub mod utils;

pub use error::{PageError, PageResult};
