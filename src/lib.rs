pub mod cli;
pub mod config;
pub mod db;
pub mod observability;
pub mod render;

pub use config::Config;
pub use db::{create_pool, migrate};
