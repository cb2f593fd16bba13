pub mod config;
pub mod logging;

pub mod algorithm;
pub mod armor;
pub mod artifact;
pub mod layout;
