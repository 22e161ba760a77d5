//! Domain layer - core business types and contracts

pub mod error;
pub mod package;

pub use error::DomainError;
pub use package::{
    NewPackage, Package, PackageChanges, PackageFilter, PackagePage, PackageRepository,
    PackageStatus,
};
