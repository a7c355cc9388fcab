use crate::physics::Isometry;

/// Interpolation frame for one body
///
/// Holds the transform at the previous and the current physics step so a
/// renderer can draw anywhere in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    previous: Isometry,
    current: Isometry,
}

impl Frame {
    /// A frame at rest at `transform`
    pub fn new(transform: Isometry) -> Self {
        Self {
            previous: transform,
            current: transform,
        }
    }

    /// Shift the current transform into the past and record a new one
    pub fn push(&mut self, transform: Isometry) {
        self.previous = self.current;
        self.current = transform;
    }

    pub fn previous(&self) -> Isometry {
        self.previous
    }

    pub fn current(&self) -> Isometry {
        self.current
    }

    /// Transform at `alpha` between the two steps, clamped to [0, 1]
    pub fn interpolate(&self, alpha: f32) -> Isometry {
        self.previous.lerp_slerp(&self.current, alpha.clamp(0.0, 1.0))
    }
}
