pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{local_store::LocalStore, memory_store::MemoryStore};
pub use config::AppConfig;
pub use core::calculator::{AgeCalculator, FormInput};
pub use domain::model::{AgeRecord, AgeReport, Locale, Preferences, SizeCategory};
pub use utils::error::{PetAgeError, Result};
