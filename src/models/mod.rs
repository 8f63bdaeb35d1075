// Module exports for models

pub mod countdown;
pub mod layout;
pub mod settings;
