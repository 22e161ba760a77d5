//! Package domain: entity, validation, and the storage gateway contract

pub mod entity;
pub mod repository;
pub mod validation;

pub use entity::{NewPackage, Package, PackageChanges, PackageStatus, ParsePackageStatusError};
pub use repository::{
    DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PackageFilter, PackagePage, PackageRepository,
};
pub use validation::{
    MAX_COURIER_LENGTH, MAX_TRACKING_NUMBER_LENGTH, PackageValidationError, validate_courier,
    validate_destination, validate_origin, validate_tracking_number,
};
