//! LiftCheck Forklift Pre-Operation Checklist Server
//!
//! A Rust REST API server for mobile pre-operation inspection checklists:
//! badge validation, per-equipment question resolution, checklist submission
//! with fail-notification fan-out, and the admin review surfaces on top.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
