// Application layer: dispatches parsed commands onto the core.

pub mod runner;

pub use runner::{default_command, execute};
