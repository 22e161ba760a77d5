//! Package Delivery Tracker
//!
//! Tracks shipment packages through a lifecycle of delivery statuses, backed
//! by a remote Supabase `packages` table and exposed as a REST API.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::AppState;
use infrastructure::package::{PackageService, SupabaseConfig, SupabasePackageRepository};

/// Create the application state with an explicitly constructed storage gateway
///
/// The Supabase connection parameters are required: a missing URL or key is a
/// fatal startup condition, never a per-request error.
pub fn create_app_state() -> anyhow::Result<AppState> {
    let url = std::env::var("SUPABASE_URL")
        .map_err(|_| anyhow::anyhow!("SUPABASE_URL environment variable is required"))?;
    let key = std::env::var("SUPABASE_KEY")
        .map_err(|_| anyhow::anyhow!("SUPABASE_KEY environment variable is required"))?;

    let repository = Arc::new(SupabasePackageRepository::new(SupabaseConfig { url, key }));
    let package_service = Arc::new(PackageService::new(repository));

    Ok(AppState::new(package_service))
}
