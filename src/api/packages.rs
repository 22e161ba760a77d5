//! Package endpoints

use axum::extract::{Path, Query, State};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json, MessageResponse};
use crate::domain::package::{Package, PackageFilter, PackagePage, PackageStatus};
use crate::infrastructure::package::{CreatePackageRequest, UpdatePackageRequest};

/// Request to register a new package
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePackageApiRequest {
    pub tracking_number: String,
    pub courier: String,
    #[serde(default)]
    pub status: Option<PackageStatus>,
    pub expected_delivery: NaiveDate,
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Request to partially update a package
///
/// `notes` distinguishes "absent" from an explicit null, which clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePackageApiRequest {
    pub tracking_number: Option<String>,
    pub courier: Option<String>,
    pub status: Option<PackageStatus>,
    pub expected_delivery: Option<NaiveDate>,
    pub origin: Option<String>,
    pub destination: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub notes: Option<Option<String>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: serde::Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Package representation returned by the API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageResponse {
    pub id: i64,
    pub tracking_number: String,
    pub courier: String,
    pub status: String,
    pub expected_delivery: String,
    pub origin: String,
    pub destination: String,
    pub notes: Option<String>,
}

impl From<&Package> for PackageResponse {
    fn from(package: &Package) -> Self {
        Self {
            id: package.id(),
            tracking_number: package.tracking_number().to_string(),
            courier: package.courier().to_string(),
            status: package.status().to_string(),
            expected_delivery: package.expected_delivery().to_string(),
            origin: package.origin().to_string(),
            destination: package.destination().to_string(),
            notes: package.notes().map(String::from),
        }
    }
}

fn to_responses(packages: &[Package]) -> Vec<PackageResponse> {
    packages.iter().map(PackageResponse::from).collect()
}

/// Pagination query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQueryParams {
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

impl ListQueryParams {
    /// Clamp to the accepted window at the API boundary
    fn page(&self) -> PackagePage {
        let defaults = PackagePage::default();
        PackagePage::clamped(
            self.limit.unwrap_or(defaults.limit),
            self.offset.unwrap_or(defaults.offset),
        )
    }
}

/// Search query parameters
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQueryParams {
    pub tracking_number: Option<String>,
    pub courier: Option<String>,
    pub status: Option<String>,
}

impl SearchQueryParams {
    fn filter(&self) -> Result<PackageFilter, ApiError> {
        let status = match &self.status {
            Some(raw) => Some(
                raw.parse::<PackageStatus>()
                    .map_err(|e| ApiError::bad_request(e.to_string()))?,
            ),
            None => None,
        };

        Ok(PackageFilter {
            tracking_number: self.tracking_number.clone(),
            courier: self.courier.clone(),
            status,
        })
    }
}

/// GET /packages/
pub async fn list_packages(
    State(state): State<AppState>,
    Query(params): Query<ListQueryParams>,
) -> Result<Json<ApiResponse<Vec<PackageResponse>>>, ApiError> {
    let page = params.page();
    debug!(limit = page.limit, offset = page.offset, "Listing packages");

    let packages = state.package_service.list(&page).await?;

    Ok(Json(ApiResponse::ok(to_responses(&packages))))
}

/// GET /packages/search/
pub async fn search_packages(
    State(state): State<AppState>,
    Query(params): Query<SearchQueryParams>,
) -> Result<Json<ApiResponse<Vec<PackageResponse>>>, ApiError> {
    let filter = params.filter()?;
    debug!(?filter, "Searching packages");

    let packages = state.package_service.search(&filter).await?;

    Ok(Json(ApiResponse::ok(to_responses(&packages))))
}

/// GET /packages/{id}
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<PackageResponse>>, ApiError> {
    debug!(id, "Getting package");

    let package = state.package_service.get(id).await?;

    Ok(Json(ApiResponse::ok(PackageResponse::from(&package))))
}

/// POST /packages/
pub async fn create_package(
    State(state): State<AppState>,
    Json(request): Json<CreatePackageApiRequest>,
) -> Result<Json<ApiResponse<PackageResponse>>, ApiError> {
    debug!(tracking_number = %request.tracking_number, "Creating package");

    let service_request = CreatePackageRequest {
        tracking_number: request.tracking_number,
        courier: request.courier,
        status: request.status,
        expected_delivery: request.expected_delivery,
        origin: request.origin,
        destination: request.destination,
        notes: request.notes,
    };

    let package = state.package_service.create(service_request).await?;

    Ok(Json(ApiResponse::ok(PackageResponse::from(&package))))
}

/// PUT /packages/{id}
pub async fn update_package(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdatePackageApiRequest>,
) -> Result<Json<ApiResponse<PackageResponse>>, ApiError> {
    debug!(id, "Updating package");

    let service_request = UpdatePackageRequest {
        tracking_number: request.tracking_number,
        courier: request.courier,
        status: request.status,
        expected_delivery: request.expected_delivery,
        origin: request.origin,
        destination: request.destination,
        notes: request.notes,
    };

    let package = state.package_service.update(id, service_request).await?;

    Ok(Json(ApiResponse::ok(PackageResponse::from(&package))))
}

/// DELETE /packages/{id}
pub async fn delete_package(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    debug!(id, "Deleting package");

    state.package_service.delete(id).await?;

    Ok(Json(MessageResponse::ok(format!("Package {id} deleted"))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_deserialization() {
        let json = r#"{
            "tracking_number": "ABC123",
            "courier": "DHL",
            "expected_delivery": "2025-12-01",
            "origin": "Berlin",
            "destination": "Madrid"
        }"#;

        let request: CreatePackageApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.tracking_number, "ABC123");
        assert_eq!(request.courier, "DHL");
        assert!(request.status.is_none());
        assert_eq!(
            request.expected_delivery,
            NaiveDate::from_ymd_opt(2025, 12, 1).unwrap()
        );
        assert!(request.notes.is_none());
    }

    #[test]
    fn test_create_request_with_status_label() {
        let json = r#"{
            "tracking_number": "ABC123",
            "courier": "DHL",
            "status": "Out for Delivery",
            "expected_delivery": "2025-12-01",
            "origin": "Berlin",
            "destination": "Madrid",
            "notes": "ring twice"
        }"#;

        let request: CreatePackageApiRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.status, Some(PackageStatus::OutForDelivery));
        assert_eq!(request.notes.as_deref(), Some("ring twice"));
    }

    #[test]
    fn test_create_request_rejects_bad_date() {
        let json = r#"{
            "tracking_number": "ABC123",
            "courier": "DHL",
            "expected_delivery": "01/12/2025",
            "origin": "Berlin",
            "destination": "Madrid"
        }"#;

        assert!(serde_json::from_str::<CreatePackageApiRequest>(json).is_err());
    }

    #[test]
    fn test_update_request_distinguishes_absent_and_null_notes() {
        let absent: UpdatePackageApiRequest = serde_json::from_str(r#"{}"#).unwrap();
        assert!(absent.notes.is_none());

        let null: UpdatePackageApiRequest =
            serde_json::from_str(r#"{"notes": null}"#).unwrap();
        assert_eq!(null.notes, Some(None));

        let set: UpdatePackageApiRequest =
            serde_json::from_str(r#"{"notes": "fragile"}"#).unwrap();
        assert_eq!(set.notes, Some(Some("fragile".to_string())));
    }

    #[test]
    fn test_list_params_clamping() {
        let params = ListQueryParams {
            limit: Some(9999),
            offset: Some(-1),
        };
        let page = params.page();
        assert_eq!(page.limit, 500);
        assert_eq!(page.offset, 0);

        let defaults = ListQueryParams::default().page();
        assert_eq!(defaults.limit, 100);
        assert_eq!(defaults.offset, 0);
    }

    #[test]
    fn test_search_params_parse_status() {
        let params = SearchQueryParams {
            status: Some("In Transit".to_string()),
            ..Default::default()
        };
        let filter = params.filter().unwrap();
        assert_eq!(filter.status, Some(PackageStatus::InTransit));

        let bad = SearchQueryParams {
            status: Some("Lost".to_string()),
            ..Default::default()
        };
        assert!(bad.filter().is_err());
    }

    #[test]
    fn test_package_response_serialization() {
        use crate::domain::package::NewPackage;

        let package = Package::from_draft(
            1,
            NewPackage {
                tracking_number: "ABC123".to_string(),
                courier: "DHL".to_string(),
                status: PackageStatus::InTransit,
                expected_delivery: NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                origin: "Berlin".to_string(),
                destination: "Madrid".to_string(),
                notes: None,
            },
        );

        let response = PackageResponse::from(&package);
        let json = serde_json::to_string(&response).unwrap();

        assert!(json.contains("\"id\":1"));
        assert!(json.contains("\"status\":\"In Transit\""));
        assert!(json.contains("\"expected_delivery\":\"2025-12-01\""));
        assert!(json.contains("\"notes\":null"));
    }
}
