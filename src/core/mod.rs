// src/core/mod.rs
//! Configuration and outbound service clients

pub mod config_manager;
pub mod email_client;

pub use config_manager::ConfigManager;
pub use email_client::{EmailJsClient, EmailSender};
