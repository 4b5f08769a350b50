pub mod config;
pub mod content;
pub mod data;
pub mod error;
pub mod layout;
pub mod logging;
pub mod models;
pub mod ui;
