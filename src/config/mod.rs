//! Configuration loading and management for the Commission Engine.
//!
//! This module loads engine settings and compensation plans, including each
//! plan's renewal multiplier tiers, from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use commission_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/commission").unwrap();
//! println!("Loaded {} plans", config.plans().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{CompensationPlan, EngineConfig, EngineSettings, FiscalCalendar, PlansConfig};
