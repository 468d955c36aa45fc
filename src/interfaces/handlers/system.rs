use actix_web::{get, web, HttpResponse, Responder};
use humantime::format_duration;
use std::time::Duration;
use sysinfo::System;
use serde::Serialize;

use crate::{constants::START_TIME, AppState};

const MAX_LISTED_COLLECTIONS: usize = 10;
const MAX_ERROR_CHARS: usize = 80;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: Option<String>,
    pub database_name: Option<String>,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl Default for DiagnosticReport {
    fn default() -> Self {
        DiagnosticReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: None,
            database_name: None,
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

fn truncate_chars(message: &str, max: usize) -> String {
    message.chars().take(max).collect()
}

async fn build_diagnostic_report(state: &AppState) -> DiagnosticReport {
    let mut report = DiagnosticReport {
        database_url: Some(if state.database_url_set { "✅ Set" } else { "❌ Not Set" }.to_string()),
        ..DiagnosticReport::default()
    };

    let Some(database_name) = state.store.database_name() else {
        return report;
    };

    report.database = "✅ Available".to_string();
    report.database_name = Some(database_name.to_string());
    report.connection_status = "Connected".to_string();

    match state.store.list_collection_names().await {
        Ok(mut collections) => {
            collections.truncate(MAX_LISTED_COLLECTIONS);
            report.collections = collections;
            report.database = "✅ Connected & Working".to_string();
        }
        Err(e) => {
            report.database = format!(
                "⚠️ Connected but Error: {}",
                truncate_chars(&e.to_string(), MAX_ERROR_CHARS)
            );
        }
    }

    report
}

#[get("/test")]
pub async fn test_database(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(build_diagnostic_report(&state).await)
}

#[derive(Serialize, Clone, Default)]
struct SystemInfo {
    os: String,
    kernel: String,
    hostname: String,
    cpu_count: usize,
    memory_total: String,
}

#[derive(Serialize, Clone, Default)]
struct HealthCheckResponse {
    status: String,
    uptime: String,
    timestamp: String,
    start_at: String,
    database: String,
    version: String,
    memory_usage: String,
    system: SystemInfo,
}

async fn build_health_response(state: &AppState) -> HealthCheckResponse {
    let now_utc = chrono::Utc::now();
    let uptime_duration = now_utc.signed_duration_since(*START_TIME);
    let human_uptime = format_duration(Duration::from_secs(uptime_duration.num_seconds().max(0) as u64));

    let mut sys = System::new_all();
    sys.refresh_all();

    let system_info = SystemInfo {
        os: System::name().unwrap_or_else(|| "Unknown".to_string()),
        kernel: System::kernel_version().unwrap_or_else(|| "Unknown".to_string()),
        hostname: System::host_name().unwrap_or_else(|| "Unknown".to_string()),
        cpu_count: sys.cpus().len(),
        memory_total: format!("{:.2} GB", sys.total_memory() as f64 / 1024.0 / 1024.0 / 1024.0),
    };

    let db_status = if !state.store.is_enabled() {
        "Not configured"
    } else {
        match state.store.ping().await {
            Ok(_) => "OK",
            Err(e) => {
                tracing::warn!("Health check ping failed: {}", e);
                "Unavailable"
            }
        }
    };

    let memory_usage = sysinfo::get_current_pid()
        .ok()
        .and_then(|pid| sys.process(pid))
        .map_or("Unknown".to_string(), |p|
            format!("{:.2} MB", p.memory() as f64 / 1024.0 / 1024.0)
        );

    HealthCheckResponse {
        status: "healthy".to_string(),
        uptime: human_uptime.to_string(),
        timestamp: now_utc.to_rfc3339(),
        start_at: START_TIME.to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        memory_usage,
        database: db_status.to_string(),
        system: system_info,
    }
}

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(build_health_response(&state).await)
}
