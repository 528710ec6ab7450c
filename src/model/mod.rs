//! Employee data model and upstream wire types.
//!
//! # Design Decisions
//! - Wire field names (`employee_name`, `employee_salary`, ...) are fixed by
//!   the upstream protocol and must be preserved verbatim; Rust field names
//!   stay idiomatic via serde renames
//! - Envelopes decode strictly: a missing `data` or `status` field is a
//!   decode error, unknown fields are ignored
//! - Records are never mutated locally; the upstream service owns the full
//!   lifecycle of every record

use serde::{Deserialize, Serialize};

/// Age bounds enforced by the upstream employee store.
pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 75;

/// A single employee record as stored upstream.
///
/// `id` and `email` are upstream-assigned and immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: String,

    #[serde(rename = "employee_name")]
    pub name: String,

    #[serde(rename = "employee_salary")]
    pub salary: i64,

    #[serde(rename = "employee_age")]
    pub age: u32,

    #[serde(rename = "employee_title")]
    pub title: String,

    #[serde(rename = "employee_email")]
    pub email: String,
}

/// Caller-supplied fields for creating an employee.
///
/// `id` and `email` are absent on purpose; the upstream service assigns them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeInput {
    pub name: String,
    pub salary: i64,
    pub age: u32,
    pub title: String,
}

impl EmployeeInput {
    /// Check field constraints before anything is sent upstream.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name must not be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err("title must not be empty".into());
        }
        if self.salary < 0 {
            return Err(format!("salary must be non-negative, got {}", self.salary));
        }
        if self.age < MIN_AGE || self.age > MAX_AGE {
            return Err(format!(
                "age must be between {} and {}, got {}",
                MIN_AGE, MAX_AGE, self.age
            ));
        }
        Ok(())
    }
}

/// Body of the upstream delete endpoint, which is keyed by name rather than id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteInput {
    pub name: String,
}

/// Upstream envelope for the list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListEnvelope {
    pub data: Vec<Employee>,
    pub status: String,
}

/// Upstream envelope for the get/create endpoints.
///
/// `data` is optional: the upstream occasionally answers success-shaped
/// payloads with no record in them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SingleEnvelope {
    pub data: Option<Employee>,
    pub status: String,
}
