//! Core pit wall library (session, dispatcher, data tables, integrations, config).

pub mod config;
pub mod core;
pub mod data;
pub mod gauge;
pub mod integrations;
pub mod logging;
pub mod screen;
pub mod telemetry;
