use glam::Vec3;

use crate::constants::body_defaults::OUTLINE_COLOR;

/// Which debug-render pass draws a body. Element bodies all draw in the
/// entity pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DebugLayer {
    Entity,
}

/// Descriptive data for debug renderers; no effect on simulation
pub trait DebuggableBody {
    fn outline_color(&self) -> Vec3;
    fn debug_layer(&self) -> DebugLayer;
}

/// Outline color shared by every element body
pub const ELEMENT_OUTLINE_COLOR: Vec3 = Vec3::from_array(OUTLINE_COLOR);
