//! Shared infrastructure for Pagesmith services

pub mod config;

pub use config::Config;
