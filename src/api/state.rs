//! Application state for shared services

use std::sync::Arc;

use crate::domain::package::{Package, PackageFilter, PackagePage, PackageRepository};
use crate::domain::DomainError;
use crate::infrastructure::package::{CreatePackageRequest, PackageService, UpdatePackageRequest};

/// Application state, using dynamic dispatch so handlers stay independent of
/// the concrete storage gateway
#[derive(Clone)]
pub struct AppState {
    pub package_service: Arc<dyn PackageServiceTrait>,
}

impl AppState {
    pub fn new(package_service: Arc<dyn PackageServiceTrait>) -> Self {
        Self { package_service }
    }
}

/// Trait for package service operations
#[async_trait::async_trait]
pub trait PackageServiceTrait: Send + Sync {
    async fn create(&self, request: CreatePackageRequest) -> Result<Package, DomainError>;
    async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError>;
    async fn get(&self, id: i64) -> Result<Package, DomainError>;
    async fn search(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError>;
    async fn update(&self, id: i64, request: UpdatePackageRequest)
        -> Result<Package, DomainError>;
    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

#[async_trait::async_trait]
impl<R: PackageRepository + 'static> PackageServiceTrait for PackageService<R> {
    async fn create(&self, request: CreatePackageRequest) -> Result<Package, DomainError> {
        PackageService::create(self, request).await
    }

    async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError> {
        PackageService::list(self, page).await
    }

    async fn get(&self, id: i64) -> Result<Package, DomainError> {
        PackageService::get(self, id).await
    }

    async fn search(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError> {
        PackageService::search(self, filter).await
    }

    async fn update(
        &self,
        id: i64,
        request: UpdatePackageRequest,
    ) -> Result<Package, DomainError> {
        PackageService::update(self, id, request).await
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        PackageService::delete(self, id).await
    }
}
