//! Session abstraction: the unit of work queries execute against.
//!
//! A session is caller-owned; this layer borrows it per call and never
//! manages its lifecycle, timeouts, or transactions. Statements arrive
//! fully composed; the session only executes them.

mod errors;
mod memory;

pub use errors::SessionError;
pub use memory::MemorySession;

use crate::query::{CountStatement, SelectStatement};

/// A raw row as returned by the store
pub type Row = serde_json::Value;

/// An open unit of work against the store
pub trait Session {
    /// Executes a selection, returning matching rows in statement order
    fn fetch(&self, statement: &SelectStatement) -> Result<Vec<Row>, SessionError>;

    /// Executes a count-only statement without materializing row data
    fn count(&self, statement: &CountStatement) -> Result<u64, SessionError>;

    /// Reports whether at least one row matches
    fn exists(&self, statement: &CountStatement) -> Result<bool, SessionError> {
        Ok(self.count(statement)? > 0)
    }
}
