//! Package entity and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Delivery status of a package
///
/// The serde names are the wire labels persisted in the `packages` table and
/// shown in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PackageStatus {
    #[default]
    #[serde(rename = "Pending")]
    Pending,
    #[serde(rename = "In Transit")]
    InTransit,
    #[serde(rename = "Out for Delivery")]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    Delivered,
    #[serde(rename = "Delayed")]
    Delayed,
    #[serde(rename = "Cancelled")]
    Cancelled,
}

impl PackageStatus {
    /// The wire label for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
            Self::Delayed => "Delayed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// All statuses, in lifecycle order
    pub const ALL: [PackageStatus; 6] = [
        Self::Pending,
        Self::InTransit,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Delayed,
        Self::Cancelled,
    ];
}

impl std::fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown status label
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown package status: '{0}'")]
pub struct ParsePackageStatusError(pub String);

impl FromStr for PackageStatus {
    type Err = ParsePackageStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| ParsePackageStatusError(s.to_string()))
    }
}

/// A stored package record
///
/// `id` is assigned by storage on creation and never reused or mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    id: i64,
    tracking_number: String,
    courier: String,
    status: PackageStatus,
    expected_delivery: NaiveDate,
    origin: String,
    destination: String,
    #[serde(default)]
    notes: Option<String>,
}

impl Package {
    /// Materialize a stored record from a draft and its storage-assigned id
    pub fn from_draft(id: i64, draft: NewPackage) -> Self {
        Self {
            id,
            tracking_number: draft.tracking_number,
            courier: draft.courier,
            status: draft.status,
            expected_delivery: draft.expected_delivery,
            origin: draft.origin,
            destination: draft.destination,
            notes: draft.notes,
        }
    }

    // Getters

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn tracking_number(&self) -> &str {
        &self.tracking_number
    }

    pub fn courier(&self) -> &str {
        &self.courier
    }

    pub fn status(&self) -> PackageStatus {
        self.status
    }

    pub fn expected_delivery(&self) -> NaiveDate {
        self.expected_delivery
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Apply a partial update, changing only the fields that are set
    pub fn apply(&mut self, changes: &PackageChanges) {
        if let Some(tracking_number) = &changes.tracking_number {
            self.tracking_number = tracking_number.clone();
        }
        if let Some(courier) = &changes.courier {
            self.courier = courier.clone();
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(expected_delivery) = changes.expected_delivery {
            self.expected_delivery = expected_delivery;
        }
        if let Some(origin) = &changes.origin {
            self.origin = origin.clone();
        }
        if let Some(destination) = &changes.destination {
            self.destination = destination.clone();
        }
        if let Some(notes) = &changes.notes {
            self.notes = notes.clone();
        }
    }
}

/// Validated creation input, ready for one storage insert
#[derive(Debug, Clone, Serialize)]
pub struct NewPackage {
    pub tracking_number: String,
    pub courier: String,
    pub status: PackageStatus,
    pub expected_delivery: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub notes: Option<String>,
}

/// Explicit partial update: one optional slot per mutable field
///
/// Unset fields are left untouched by the update. `notes` is doubly optional
/// so an update can clear it with an explicit null.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PackageChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PackageStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_delivery: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<Option<String>>,
}

impl PackageChanges {
    /// True when no field is set at all
    pub fn is_empty(&self) -> bool {
        self.tracking_number.is_none()
            && self.courier.is_none()
            && self.status.is_none()
            && self.expected_delivery.is_none()
            && self.origin.is_none()
            && self.destination.is_none()
            && self.notes.is_none()
    }
}
