//! Storage layer for Footy

pub mod db;
pub mod models;

pub use db::{default_db_path, Database};
pub use models::*;
