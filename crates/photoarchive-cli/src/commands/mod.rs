//! Command handlers, one module per command group.

pub mod config;
pub mod maintenance;
pub mod menu;
pub mod misc;
pub mod photos;
