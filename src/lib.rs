pub mod cleaner;
pub mod cli;
pub mod configuration;
pub mod console;
pub mod domain;
pub mod repository;
pub mod resolver;
pub mod startup;
pub mod telemetry;
pub mod utils;

pub use cleaner::{CleanError, CleanReport, TableCleaner};
