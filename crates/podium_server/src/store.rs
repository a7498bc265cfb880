//! SQLite-backed event tables.

use chrono::Utc;
use podium_error::{ServerError, ServerErrorKind};
use rusqlite::{Connection, params};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, instrument};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS analytics_events (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event TEXT,
    session_id TEXT,
    payload TEXT NOT NULL,
    received_at TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS time_savings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    session_id TEXT,
    payload TEXT NOT NULL,
    received_at TEXT NOT NULL
);";

/// Append-only tables for the two kinds of usage record.
///
/// Bodies are stored verbatim as JSON text. `event` and `session_id` are
/// copied into their own columns when present so they can be queried.
#[derive(Debug)]
pub struct AnalyticsStore {
    conn: Mutex<Connection>,
}

impl AnalyticsStore {
    /// Open (or create) the database at `path`.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ServerError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                ServerError::new(ServerErrorKind::DatabaseInit(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        let conn = Connection::open(path)
            .map_err(|e| ServerError::new(ServerErrorKind::DatabaseInit(e.to_string())))?;
        info!("Opened analytics database");
        Self::init(conn)
    }

    /// Database that lives only as long as the process.
    pub fn in_memory() -> Result<Self, ServerError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| ServerError::new(ServerErrorKind::DatabaseInit(e.to_string())))?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self, ServerError> {
        conn.execute_batch(SCHEMA)
            .map_err(|e| ServerError::new(ServerErrorKind::DatabaseInit(e.to_string())))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a usage event. Returns its row id.
    #[instrument(skip(self, body), fields(fields = body.len()))]
    pub fn record_event(&self, body: &Map<String, Value>) -> Result<i64, ServerError> {
        let payload = encode(body)?;
        let conn = self.conn();
        conn.execute(
            "INSERT INTO analytics_events (event, session_id, payload, received_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                text_field(body, "event"),
                text_field(body, "session_id"),
                payload,
                Utc::now().to_rfc3339()
            ],
        )
        .map_err(|e| ServerError::new(ServerErrorKind::Query(e.to_string())))?;

        let id = conn.last_insert_rowid();
        debug!(id, "Stored analytics event");
        Ok(id)
    }

    /// Append a time-savings record. Returns its row id.
    #[instrument(skip(self, body), fields(fields = body.len()))]
    pub fn record_time_savings(&self, body: &Map<String, Value>) -> Result<i64, ServerError> {
        let payload = encode(body)?;
        let conn = self.conn();
        conn.execute(
            "INSERT INTO time_savings (session_id, payload, received_at) VALUES (?1, ?2, ?3)",
            params![text_field(body, "session_id"), payload, Utc::now().to_rfc3339()],
        )
        .map_err(|e| ServerError::new(ServerErrorKind::Query(e.to_string())))?;

        let id = conn.last_insert_rowid();
        debug!(id, "Stored time savings");
        Ok(id)
    }

    /// Stored events, oldest first, as the bodies that were posted.
    pub fn events(&self) -> Result<Vec<Value>, ServerError> {
        self.payloads("SELECT payload FROM analytics_events ORDER BY id")
    }

    /// Stored time-savings records, oldest first.
    pub fn time_savings(&self) -> Result<Vec<Value>, ServerError> {
        self.payloads("SELECT payload FROM time_savings ORDER BY id")
    }

    fn payloads(&self, sql: &str) -> Result<Vec<Value>, ServerError> {
        let query_error = |e: rusqlite::Error| ServerError::new(ServerErrorKind::Query(e.to_string()));

        let conn = self.conn();
        let mut statement = conn.prepare(sql).map_err(query_error)?;
        let rows = statement
            .query_map([], |row| row.get::<_, String>(0))
            .map_err(query_error)?;

        let payloads = rows
            .map(|row| {
                let payload = row.map_err(query_error)?;
                serde_json::from_str(&payload)
                    .map_err(|e| ServerError::new(ServerErrorKind::Query(e.to_string())))
            })
            .collect();
        payloads
    }
}

fn encode(body: &Map<String, Value>) -> Result<String, ServerError> {
    serde_json::to_string(body)
        .map_err(|e| ServerError::new(ServerErrorKind::InvalidPayload(e.to_string())))
}

fn text_field<'a>(body: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    body.get(field).and_then(Value::as_str)
}
