//! Supabase storage gateway for the remote `packages` table
//!
//! A pure adapter over the PostgREST endpoint: each repository operation is a
//! single round-trip, no validation, no business policy. Ordering, substring
//! matching, and pagination are pushed down as PostgREST query parameters.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};

use crate::domain::package::{
    NewPackage, Package, PackageChanges, PackageFilter, PackagePage, PackageRepository,
};
use crate::domain::DomainError;

/// Connection parameters for the Supabase project
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL, e.g. `https://xyzcompany.supabase.co`
    pub url: String,
    /// Service key sent as `apikey` and bearer token
    pub key: String,
}

/// Package repository backed by Supabase (PostgREST)
#[derive(Debug, Clone)]
pub struct SupabasePackageRepository {
    client: reqwest::Client,
    endpoint: String,
    key: String,
}

impl SupabasePackageRepository {
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!("{}/rest/v1/packages", config.url.trim_end_matches('/')),
            key: config.key,
        }
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, DomainError> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::storage(format!("Supabase request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::storage(format!(
                "Supabase responded with {status}: {body}"
            )));
        }

        Ok(response)
    }

    async fn rows(&self, request: RequestBuilder) -> Result<Vec<Package>, DomainError> {
        self.send(request)
            .await?
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to parse Supabase response: {e}")))
    }

    // Postgres LIKE treats `%` and `_` as wildcards and PostgREST maps `*`
    // to `%`; escape them so the needle matches literally, the same way the
    // in-memory repository's `contains` does.
    fn escape_needle(needle: &str) -> String {
        let mut escaped = String::with_capacity(needle.len());
        for c in needle.chars() {
            if matches!(c, '\\' | '%' | '_' | '*') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    fn substring_pattern(needle: &str) -> String {
        format!("ilike.*{}*", Self::escape_needle(needle))
    }
}

#[async_trait]
impl PackageRepository for SupabasePackageRepository {
    async fn create(&self, draft: NewPackage) -> Result<Package, DomainError> {
        let request = self
            .authorized(self.client.post(&self.endpoint))
            .header("Prefer", "return=representation")
            .json(&draft);

        self.rows(request)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DomainError::storage("Insert returned no representation"))
    }

    async fn list(&self, page: &PackagePage) -> Result<Vec<Package>, DomainError> {
        let request = self.authorized(self.client.get(&self.endpoint)).query(&[
            ("select", "*".to_string()),
            ("order", "id.desc".to_string()),
            ("limit", page.limit.to_string()),
            ("offset", page.offset.to_string()),
        ]);

        self.rows(request).await
    }

    async fn get(&self, id: i64) -> Result<Option<Package>, DomainError> {
        let request = self.authorized(self.client.get(&self.endpoint)).query(&[
            ("select", "*".to_string()),
            ("id", format!("eq.{id}")),
            ("limit", "1".to_string()),
        ]);

        Ok(self.rows(request).await?.into_iter().next())
    }

    async fn filter(&self, filter: &PackageFilter) -> Result<Vec<Package>, DomainError> {
        let mut params = vec![
            ("select", "*".to_string()),
            ("order", "id.desc".to_string()),
        ];

        if let Some(needle) = &filter.tracking_number {
            params.push(("tracking_number", Self::substring_pattern(needle)));
        }
        if let Some(needle) = &filter.courier {
            params.push(("courier", Self::substring_pattern(needle)));
        }
        if let Some(status) = filter.status {
            params.push(("status", format!("eq.{status}")));
        }

        let request = self
            .authorized(self.client.get(&self.endpoint))
            .query(&params);

        self.rows(request).await
    }

    async fn update(
        &self,
        id: i64,
        changes: &PackageChanges,
    ) -> Result<Option<Package>, DomainError> {
        let request = self
            .authorized(self.client.patch(&self.endpoint))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation")
            .json(changes);

        // PostgREST answers with the updated rows; an empty array means the
        // row does not exist.
        Ok(self.rows(request).await?.into_iter().next())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let request = self
            .authorized(self.client.delete(&self.endpoint))
            .query(&[("id", format!("eq.{id}"))])
            .header("Prefer", "return=representation");

        let response = self.send(request).await?;

        if response.status() == StatusCode::NO_CONTENT {
            // Without a representation we cannot tell whether a row matched
            return Err(DomainError::storage("Delete returned no representation"));
        }

        let rows: Vec<Package> = response
            .json()
            .await
            .map_err(|e| DomainError::storage(format!("Failed to parse Supabase response: {e}")))?;

        Ok(!rows.is_empty())
    }
}
