pub mod config;
pub mod engine;
pub mod models;
pub mod processor;
pub mod types;
pub mod wire;
