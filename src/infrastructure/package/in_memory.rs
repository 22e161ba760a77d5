//! In-memory package repository
//!
//! Mirrors the remote gateway's contract over a process-local map. Backs the
//! service and router tests; the production wiring uses the Supabase gateway.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::package::{
    NewPackage, Package, PackageChanges, PackageFilter, PackagePage, PackageRepository,
};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i64, Package>,
    // Monotonic; ids are never reused, even after deletes
    next_id: i64,
}

/// In-memory implementation of the package repository
#[derive(Debug, Default)]
pub struct InMemoryPackageRepository {
    inner: RwLock<Inner>,
}

impl InMemoryPackageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn matches(package: &Package, filter: &PackageFilter) -> bool {
    if let Some(needle) = &filter.tracking_number {
        if !package
            .tracking_number()
            .to_lowercase()
            .contains(&needle.to_lowercase())
        {
            return false;
        }
    }

    if let Some(needle) = &filter.courier {
        if !package.courier().to_lowercase().contains(&needle.to_lowercase()) {
            return false;
        }
    }

    if let Some(status) = filter.status {
        if package.status() != status {
            return false;
        }
    }

    true
}

#[async_trait]
impl PackageRepository for InMemoryPackageRepository {
    async fn create(&self, draft: NewPackage) -> Result<Package, DomainError> {
        let mut inner = self.inner.write().unwrap();

        inner.next_id += 1;
        let package = Package::from_draft(inner.next_id, draft);
        inner.rows.insert(package.id(), package.clone());

        Ok(package)
    }

    async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError> {
        let inner = self.inner.read().unwrap();

        // BTreeMap iterates ascending by id; reverse for newest-first
        Ok(inner
            .rows
            .values()
            .rev()
            .skip(page.offset.max(0) as usize)
            .take(page.limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Package>, DomainError> {
        let inner = self.inner.read().unwrap();
        Ok(inner.rows.get(&id).cloned())
    }

    async fn filter(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError> {
        let inner = self.inner.read().unwrap();

        Ok(inner
            .rows
            .values()
            .rev()
            .filter(|package| matches(package, filter))
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: i64,
        changes: &PackageChanges,
    ) -> Result<Option<Package>, DomainError> {
        let mut inner = self.inner.write().unwrap();

        Ok(inner.rows.get_mut(&id).map(|package| {
            package.apply(changes);
            package.clone()
        }))
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut inner = self.inner.write().unwrap();
        Ok(inner.rows.remove(&id).is_some())
    }
}
