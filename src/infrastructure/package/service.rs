//! Package service: validation, duplicate prevention, and default policies

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use crate::domain::package::{
    validate_courier, validate_destination, validate_origin, validate_tracking_number, NewPackage,
    Package, PackageChanges, PackageFilter, PackagePage, PackageRepository, PackageStatus,
};
use crate::domain::DomainError;

/// Request for registering a new package
#[derive(Debug, Clone)]
pub struct CreatePackageRequest {
    pub tracking_number: String,
    pub courier: String,
    /// Defaults to Pending when omitted
    pub status: Option<PackageStatus>,
    pub expected_delivery: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub notes: Option<String>,
}

/// Request for a partial package update
///
/// Only fields that are set change; `notes` can be cleared with an explicit
/// null (`Some(None)`).
#[derive(Debug, Clone, Default)]
pub struct UpdatePackageRequest {
    pub tracking_number: Option<String>,
    pub courier: Option<String>,
    pub status: Option<PackageStatus>,
    pub expected_delivery: Option<NaiveDate>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    pub notes: Option<Option<String>>,
}

/// Package service owning all business rules over the storage gateway
#[derive(Debug)]
pub struct PackageService<R: PackageRepository> {
    repository: Arc<R>,
}

impl<R: PackageRepository> PackageService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Register a new package
    ///
    /// The duplicate check and the insert are two independent storage calls,
    /// not a transaction; concurrent creates with the same tracking number can
    /// race past the check. The check reuses the search semantics: any existing
    /// record whose tracking number contains the candidate (case-insensitive)
    /// blocks creation.
    pub async fn create(&self, request: CreatePackageRequest) -> Result<Package, DomainError> {
        let tracking_number = request.tracking_number.trim().to_string();
        let courier = request.courier.trim().to_string();

        validate_tracking_number(&tracking_number)
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_courier(&courier).map_err(|e| DomainError::validation(e.to_string()))?;
        validate_origin(request.origin.trim())
            .map_err(|e| DomainError::validation(e.to_string()))?;
        validate_destination(request.destination.trim())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let duplicates = self
            .repository
            .filter(&PackageFilter::new().with_tracking_number(&tracking_number))
            .await?;

        if !duplicates.is_empty() {
            return Err(DomainError::duplicate(format!(
                "A package with tracking number matching '{tracking_number}' already exists"
            )));
        }

        let draft = NewPackage {
            tracking_number: tracking_number.clone(),
            courier,
            status: request.status.unwrap_or_default(),
            expected_delivery: request.expected_delivery,
            origin: request.origin,
            destination: request.destination,
            notes: request.notes,
        };

        let package = self.repository.create(draft).await?;
        info!(id = package.id(), tracking_number = %tracking_number, "Package created");

        Ok(package)
    }

    /// List a page of packages, newest first
    pub async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError> {
        self.repository.list(page).await
    }

    /// Get a package by id
    pub async fn get(&self, id: i64) -> Result<Package, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Package {id} not found")))
    }

    /// Search packages; an empty filter behaves as list-all
    pub async fn search(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError> {
        self.repository.filter(filter).await
    }

    /// Apply a partial update to a package
    pub async fn update(
        &self,
        id: i64,
        request: UpdatePackageRequest,
    ) -> Result<Package, DomainError> {
        let tracking_number = match request.tracking_number {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                validate_tracking_number(&trimmed)
                    .map_err(|e| DomainError::validation(e.to_string()))?;
                Some(trimmed)
            }
            None => None,
        };

        let courier = match request.courier {
            Some(raw) => {
                let trimmed = raw.trim().to_string();
                validate_courier(&trimmed).map_err(|e| DomainError::validation(e.to_string()))?;
                Some(trimmed)
            }
            None => None,
        };

        let changes = PackageChanges {
            tracking_number,
            courier,
            status: request.status,
            expected_delivery: request.expected_delivery,
            origin: request.origin,
            destination: request.destination,
            notes: request.notes,
        };

        if changes.is_empty() {
            return Err(DomainError::validation("No updates provided"));
        }

        let updated = self
            .repository
            .update(id, &changes)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Package {id} not found")))?;

        info!(id, "Package updated");
        Ok(updated)
    }

    /// Permanently delete a package
    pub async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(DomainError::not_found(format!("Package {id} not found")));
        }

        info!(id, "Package deleted");
        Ok(())
    }
}
