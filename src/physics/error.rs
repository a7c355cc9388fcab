//! Physics subsystem errors
//!
//! The simulation step itself never fails; these cover lookups made by
//! callers against a space.

use super::space::EntityId;

pub type PhysicsResult<T> = Result<T, PhysicsError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhysicsError {
    #[error("no element with id {0} in this space")]
    UnknownEntity(EntityId),
}
