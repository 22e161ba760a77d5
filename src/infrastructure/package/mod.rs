//! Package infrastructure: service and storage gateway implementations

pub mod in_memory;
pub mod service;
pub mod supabase;

pub use in_memory::InMemoryPackageRepository;
pub use service::{CreatePackageRequest, PackageService, UpdatePackageRequest};
pub use supabase::{SupabaseConfig, SupabasePackageRepository};
