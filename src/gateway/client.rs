//! Retry-wrapped client for the upstream employee service.
//!
//! # Responsibilities
//! - Issue upstream round trips (list, get, create, delete) over a shared client
//! - Apply the bounded retry policy around every round trip
//! - Shape the fetched list in memory (filter, max, sort + truncate)
//!
//! # Design Decisions
//! - No record is cached across calls; every operation works on a fresh fetch
//! - The upstream delete endpoint is keyed by name, so delete-by-id resolves
//!   the id to a name first and issues two round trips
//! - Delete confirmations pass through verbatim, including success-shaped
//!   payloads carrying a failure flag

use std::time::Duration;

use reqwest::StatusCode;

use crate::config::{RetryConfig, UpstreamConfig};
use crate::gateway::error::GatewayError;
use crate::model::{DeleteInput, Employee, EmployeeInput, ListEnvelope, SingleEnvelope};
use crate::resilience::{with_retry, RetryPolicy};

/// How many earner names the top-earners operation reports.
const TOP_EARNER_COUNT: usize = 10;

/// Client for the upstream employee store.
///
/// Holds no cross-call state beyond the connection pool, so it can be shared
/// freely between concurrent request handlers.
pub struct EmployeeGateway {
    client: reqwest::Client,
    base_url: String,
    retry: RetryPolicy,
}

impl EmployeeGateway {
    pub fn new(upstream: &UpstreamConfig, retries: &RetryConfig) -> Result<Self, GatewayError> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(upstream.connect_timeout_secs))
            .timeout(Duration::from_secs(upstream.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::ClientInit(e.to_string()))?;

        Ok(Self {
            client,
            base_url: upstream.base_url.trim_end_matches('/').to_string(),
            retry: RetryPolicy::new(retries.max_attempts, Duration::from_millis(retries.delay_ms)),
        })
    }

    /// All current records, in upstream list order.
    pub async fn list_all(&self) -> Result<Vec<Employee>, GatewayError> {
        let envelope = with_retry(&self.retry, GatewayError::is_rate_limited, "list", || {
            self.list_once()
        })
        .await?;
        Ok(envelope.data)
    }

    /// Records whose name contains `query` as a literal substring.
    pub async fn search_by_name(&self, query: &str) -> Result<Vec<Employee>, GatewayError> {
        let employees = self.list_all().await?;
        Ok(filter_by_name(employees, query))
    }

    /// The single record with this id, or `NotFound`.
    pub async fn get_by_id(&self, id: &str) -> Result<Employee, GatewayError> {
        with_retry(&self.retry, GatewayError::is_rate_limited, "get", || {
            self.get_once(id)
        })
        .await
    }

    /// Maximum salary across all current records.
    pub async fn highest_salary(&self) -> Result<i64, GatewayError> {
        let employees = self.list_all().await?;
        max_salary(&employees).ok_or(GatewayError::EmptyDataset)
    }

    /// Up to ten names, sorted by ascending salary then truncated.
    pub async fn top_ten_earner_names(&self) -> Result<Vec<String>, GatewayError> {
        let employees = self.list_all().await?;
        Ok(top_earner_names(employees, TOP_EARNER_COUNT))
    }

    /// Forward a create request upstream. The upstream assigns id and email
    /// and is the sole authority on duplicate names.
    pub async fn create(&self, input: &EmployeeInput) -> Result<Employee, GatewayError> {
        input.validate().map_err(GatewayError::Validation)?;

        with_retry(&self.retry, GatewayError::is_rate_limited, "create", || {
            self.create_once(input)
        })
        .await
    }

    /// Resolve the id to a name, issue the name-keyed delete, and return the
    /// upstream confirmation body verbatim.
    pub async fn delete_by_id(&self, id: &str) -> Result<String, GatewayError> {
        let employee = self.get_by_id(id).await?;

        tracing::info!(id, name = %employee.name, "resolved employee for delete");

        with_retry(&self.retry, GatewayError::is_rate_limited, "delete", || {
            self.delete_once(&employee.name)
        })
        .await
    }

    async fn list_once(&self) -> Result<ListEnvelope, GatewayError> {
        let response = self
            .client
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            return Err(err);
        }

        decode_body(response).await
    }

    async fn get_once(&self, id: &str) -> Result<Employee, GatewayError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, id))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(id.to_string()));
        }
        if let Some(err) = classify_status(status) {
            return Err(err);
        }

        let envelope: SingleEnvelope = decode_body(response).await?;
        envelope
            .data
            .ok_or_else(|| GatewayError::NotFound(id.to_string()))
    }

    async fn create_once(&self, input: &EmployeeInput) -> Result<Employee, GatewayError> {
        let response = self
            .client
            .post(&self.base_url)
            .json(input)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            return Err(err);
        }

        let envelope: SingleEnvelope = decode_body(response).await?;
        envelope
            .data
            .ok_or_else(|| GatewayError::Decode("create response carried no employee".into()))
    }

    async fn delete_once(&self, name: &str) -> Result<String, GatewayError> {
        let response = self
            .client
            .delete(&self.base_url)
            .json(&DeleteInput {
                name: name.to_string(),
            })
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if let Some(err) = classify_status(status) {
            return Err(err);
        }

        // Raw passthrough: the upstream reports "not found" inside a
        // success-shaped payload and that must reach the caller unmodified.
        response.text().await.map_err(transport_error)
    }
}

/// Map a non-success upstream status to the error taxonomy.
fn classify_status(status: StatusCode) -> Option<GatewayError> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Some(GatewayError::RateLimited);
    }
    if !status.is_success() {
        return Some(GatewayError::UpstreamStatus(status.as_u16()));
    }
    None
}

fn transport_error(err: reqwest::Error) -> GatewayError {
    GatewayError::Unavailable(err.to_string())
}

async fn decode_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let body = response.text().await.map_err(transport_error)?;
    serde_json::from_str(&body).map_err(|e| GatewayError::Decode(e.to_string()))
}

/// Linear scan keeping records whose name contains the query; upstream list
/// order is preserved.
fn filter_by_name(employees: Vec<Employee>, query: &str) -> Vec<Employee> {
    employees
        .into_iter()
        .filter(|e| e.name.contains(query))
        .collect()
}

fn max_salary(employees: &[Employee]) -> Option<i64> {
    employees.iter().map(|e| e.salary).max()
}

/// Stable sort by ascending salary, truncate, project to names. Ties keep
/// upstream list order.
fn top_earner_names(mut employees: Vec<Employee>, count: usize) -> Vec<String> {
    employees.sort_by_key(|e| e.salary);
    employees.truncate(count);
    employees.into_iter().map(|e| e.name).collect()
}
