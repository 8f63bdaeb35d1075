mod mapper;
mod service;

pub use mapper::{settings_from_toml, settings_to_toml};
pub use service::SettingsService;
