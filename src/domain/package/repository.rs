//! Package repository trait and query types

use async_trait::async_trait;

use super::entity::{NewPackage, Package, PackageChanges, PackageStatus};
use crate::domain::DomainError;

/// Default page size for listing packages
pub const DEFAULT_PAGE_SIZE: i64 = 100;
/// Maximum page size accepted at the API boundary
pub const MAX_PAGE_SIZE: i64 = 500;

/// A page window over the id-descending package listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackagePage {
    pub limit: i64,
    pub offset: i64,
}

impl PackagePage {
    /// Build a page window, clamping `limit` to [1, MAX_PAGE_SIZE] and
    /// `offset` to >= 0
    pub fn clamped(limit: i64, offset: i64) -> Self {
        Self {
            limit: limit.clamp(1, MAX_PAGE_SIZE),
            offset: offset.max(0),
        }
    }
}

impl Default for PackagePage {
    fn default() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// Search criteria for packages
///
/// Supplied filters combine with logical AND. `tracking_number` and `courier`
/// are case-insensitive substring matches; `status` matches exactly.
#[derive(Debug, Clone, Default)]
pub struct PackageFilter {
    pub tracking_number: Option<String>,
    pub courier: Option<String>,
    pub status: Option<PackageStatus>,
}

impl PackageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracking_number(mut self, tracking_number: impl Into<String>) -> Self {
        self.tracking_number = Some(tracking_number.into());
        self
    }

    pub fn with_courier(mut self, courier: impl Into<String>) -> Self {
        self.courier = Some(courier.into());
        self
    }

    pub fn with_status(mut self, status: PackageStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// True when no criterion is set; filtering then behaves as list-all
    pub fn is_empty(&self) -> bool {
        self.tracking_number.is_none() && self.courier.is_none() && self.status.is_none()
    }
}

/// Storage gateway for the remote `packages` table
///
/// A pure adapter: translates each logical operation into one round-trip
/// against the data store, applies no business policy, and reports collaborator
/// failures as `DomainError::Storage`. Results are always ordered by id
/// descending.
#[async_trait]
pub trait PackageRepository: Send + Sync + std::fmt::Debug {
    /// Insert a new record; the store assigns the id
    async fn create(&self, draft: NewPackage) -> Result<Package, DomainError>;

    /// List a page of records, newest (highest id) first
    async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError>;

    /// Fetch a single record by id
    async fn get(&self, id: i64) -> Result<Option<Package>, DomainError>;

    /// Fetch all records matching the filter, newest first
    async fn filter(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError>;

    /// Apply a partial update; `None` when no record has that id
    async fn update(&self, id: i64, changes: &PackageChanges)
        -> Result<Option<Package>, DomainError>;

    /// Delete a record; `false` when no record has that id
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
