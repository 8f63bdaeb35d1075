// Service module exports

pub mod countdown;
pub mod navigation;
pub mod page;
pub mod render;
pub mod settings;
