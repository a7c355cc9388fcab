//! Environment-aware rigid bodies
//!
//! - `dynamics`: the solver capability an element body drives
//! - `element_body`: the body itself, its setters and dirty tracking
//! - `drag`: the quadratic fluid drag model
//! - `space`: fixed-timestep stepping of many elements

pub mod aabb;
pub mod debug;
pub mod dirty;
pub mod drag;
pub mod dynamics;
pub mod element_body;
pub mod error;
pub mod shape;
pub mod space;
pub mod transform;

pub use aabb::AABB;
pub use debug::{DebugLayer, DebuggableBody};
pub use dirty::DirtyFlag;
pub use drag::{compute_drag, DragInput, DragResponse};
pub use dynamics::{DynamicsBody, SimpleBody};
pub use element_body::{BodyProperties, ElementRigidBody, PhysicsElement};
pub use error::{PhysicsError, PhysicsResult};
pub use shape::CollisionShape;
pub use space::{EntityId, PhysicsSpace};
pub use transform::Isometry;

pub use crate::constants::physics_constants::{FIXED_TIMESTEP, MIN_DRAG_FORCE};
