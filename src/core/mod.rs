pub mod batch;
pub mod calculator;
pub mod converter;
pub mod report;

pub use crate::domain::model::{AgeRecord, AgeReport, Preferences, SizeCategory};
pub use crate::domain::ports::PreferenceStore;
pub use crate::utils::error::Result;
