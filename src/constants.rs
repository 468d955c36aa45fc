use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

/// Set on first access; `main` forces it at startup.
pub static START_TIME: Lazy<DateTime<Utc>> = Lazy::new(Utc::now);

/// Used when neither the config nor the connection string names a database.
pub const DEFAULT_DATABASE_NAME: &str = "portfolio";
