//! Per-operation query tracing.
//!
//! A trace logs `QUERY_BEGIN` when a facade operation starts and
//! `QUERY_COMPLETE` or `QUERY_FAILED` when it resolves, tagged with a
//! fresh operation id so the lines of one call correlate.

use std::time::Instant;

use uuid::Uuid;

use crate::query::QueryError;

use super::{log_event, Event};

/// An in-flight facade operation
pub struct QueryTrace {
    id: Uuid,
    operation: &'static str,
    entity: &'static str,
    started: Instant,
}

impl QueryTrace {
    /// Starts a trace and logs the begin event
    pub fn begin(operation: &'static str, entity: &'static str) -> Self {
        let id = Uuid::new_v4();
        log_event(
            Event::QueryBegin,
            &[
                ("entity", entity),
                ("id", &id.to_string()),
                ("operation", operation),
            ],
        );
        Self {
            id,
            operation,
            entity,
            started: Instant::now(),
        }
    }

    /// Logs successful completion with the produced row count
    pub fn finished(self, rows: u64) {
        log_event(
            Event::QueryExecuted,
            &[
                ("elapsed_ms", &self.started.elapsed().as_millis().to_string()),
                ("entity", self.entity),
                ("id", &self.id.to_string()),
                ("operation", self.operation),
                ("rows", &rows.to_string()),
            ],
        );
    }

    /// Logs failure with the error kind and message
    pub fn failed(self, error: &QueryError) {
        log_event(
            Event::QueryFailed,
            &[
                ("elapsed_ms", &self.started.elapsed().as_millis().to_string()),
                ("entity", self.entity),
                ("id", &self.id.to_string()),
                ("kind", error.kind().as_str()),
                ("message", &error.to_string()),
                ("operation", self.operation),
            ],
        );
    }
}
