//! Persistence-specific error helpers

use crate::persistence::{PersistenceError, PersistenceResult};

/// Attach context to a decode failure
pub trait PersistenceErrorContext<T> {
    fn persistence_context(self, context: &str) -> PersistenceResult<T>;
}

impl<T, E> PersistenceErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn persistence_context(self, context: &str) -> PersistenceResult<T> {
        self.map_err(|e| PersistenceError::DeserializationError(format!("{}: {}", context, e)))
    }
}

/// Create a corrupted data error
pub fn corrupted_data(reason: impl Into<String>) -> PersistenceError {
    PersistenceError::CorruptedData(reason.into())
}
