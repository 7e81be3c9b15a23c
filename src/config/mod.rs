//! Configuration loading and management for the attendance engine.
//!
//! The configuration holds the store registry (an open ID-to-name mapping,
//! currently seeded with the two known stores) and the workday rules.
//!
//! # Example
//!
//! ```no_run
//! use attendance_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/engine.yaml").unwrap();
//! assert_eq!(loader.config().store_name(1), Some("我家"));
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, StoreEntry, WorkdayConfig};
