//! Local stand-in for the upstream employee service.
//!
//! Serves the upstream wire protocol (envelopes, `employee_*` field names,
//! name-keyed delete) from an in-memory store, with optional rate-limit
//! simulation to exercise the facade's retry policy.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use clap::Parser;
use uuid::Uuid;

use employee_api::model::{DeleteInput, Employee, EmployeeInput, ListEnvelope, SingleEnvelope};

const STATUS_OK: &str = "Successfully processed request.";

#[derive(Parser)]
#[command(name = "mock-upstream")]
#[command(about = "In-memory mock of the upstream employee service", long_about = None)]
struct Args {
    #[arg(long, default_value = "127.0.0.1:8112")]
    bind: String,

    /// Answer 429 to every Nth request to exercise the facade's retries.
    #[arg(long)]
    rate_limit_every: Option<u64>,
}

struct Store {
    employees: Mutex<Vec<Employee>>,
    hits: AtomicU64,
    rate_limit_every: Option<u64>,
}

impl Store {
    /// True when this hit falls on the simulated throttle boundary.
    fn throttled(&self) -> bool {
        let hit = self.hits.fetch_add(1, Ordering::Relaxed) + 1;
        match self.rate_limit_every {
            Some(n) if n > 0 => hit % n == 0,
            _ => false,
        }
    }
}

type Shared = Arc<Store>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt().init();

    let store = Arc::new(Store {
        employees: Mutex::new(seed_employees()),
        hits: AtomicU64::new(0),
        rate_limit_every: args.rate_limit_every,
    });

    let app = Router::new()
        .route(
            "/api/v1/employee",
            get(list).post(create).delete(delete_by_name),
        )
        .route("/api/v1/employee/{id}", get(get_by_id))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind(&args.bind).await?;
    tracing::info!(address = %listener.local_addr()?, "mock upstream listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn list(State(store): State<Shared>) -> Result<Json<ListEnvelope>, StatusCode> {
    if store.throttled() {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    let employees = store.employees.lock().unwrap().clone();
    Ok(Json(ListEnvelope {
        data: employees,
        status: STATUS_OK.to_string(),
    }))
}

async fn get_by_id(
    State(store): State<Shared>,
    Path(id): Path<String>,
) -> Result<Json<SingleEnvelope>, StatusCode> {
    if store.throttled() {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    let employees = store.employees.lock().unwrap();
    match employees.iter().find(|e| e.id == id) {
        Some(employee) => Ok(Json(SingleEnvelope {
            data: Some(employee.clone()),
            status: STATUS_OK.to_string(),
        })),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn create(
    State(store): State<Shared>,
    Json(input): Json<EmployeeInput>,
) -> Result<Json<SingleEnvelope>, StatusCode> {
    if store.throttled() {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    let employee = Employee {
        id: Uuid::new_v4().to_string(),
        email: format!(
            "{}@company.com",
            input.name.to_lowercase().replace(' ', ".")
        ),
        name: input.name,
        salary: input.salary,
        age: input.age,
        title: input.title,
    };
    store.employees.lock().unwrap().push(employee.clone());
    Ok(Json(SingleEnvelope {
        data: Some(employee),
        status: STATUS_OK.to_string(),
    }))
}

/// The real upstream deletes by name and reports "not found" inside a
/// success-shaped payload; mirror that convention exactly.
async fn delete_by_name(
    State(store): State<Shared>,
    Json(input): Json<DeleteInput>,
) -> Result<Json<serde_json::Value>, StatusCode> {
    if store.throttled() {
        return Err(StatusCode::TOO_MANY_REQUESTS);
    }
    let mut employees = store.employees.lock().unwrap();
    let before = employees.len();
    employees.retain(|e| e.name != input.name);
    let removed = employees.len() < before;

    Ok(Json(serde_json::json!({
        "data": removed,
        "status": STATUS_OK,
    })))
}

fn seed_employees() -> Vec<Employee> {
    let seed = [
        ("Tiger Nixon", 320_800, 61, "Vice Chairman"),
        ("Garrett Winters", 170_750, 63, "Accountant"),
        ("Ashton Cox", 86_000, 66, "Junior Technical Author"),
        ("Cedric Kelly", 433_060, 22, "Senior Javascript Developer"),
        ("Airi Satou", 162_700, 33, "Accountant"),
        ("Brielle Williamson", 372_000, 61, "Integration Specialist"),
    ];

    seed.iter()
        .map(|(name, salary, age, title)| Employee {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            salary: *salary,
            age: *age,
            title: title.to_string(),
            email: format!("{}@company.com", name.to_lowercase().replace(' ', ".")),
        })
        .collect()
}
