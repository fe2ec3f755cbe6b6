mod database;
mod mysql;

pub use database::*;
pub use mysql::*;
