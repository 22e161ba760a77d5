//! API layer - HTTP endpoints over the package service

pub mod health;
pub mod packages;
pub mod router;
pub mod state;
pub mod types;

pub use router::create_router;
pub use state::AppState;
