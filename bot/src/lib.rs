pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod handler;
