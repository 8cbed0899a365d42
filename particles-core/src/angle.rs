use glam::DVec2;
use std::f64::consts::PI;

/// An angle stored in radians, convertible to and from degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    pub fn from_radians(radians: f64) -> Self {
        Self { radians }
    }

    pub fn from_degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * (PI / 180.0),
        }
    }

    pub fn radians(&self) -> f64 {
        self.radians
    }

    pub fn degrees(&self) -> f64 {
        self.radians * (180.0 / PI)
    }

    /// Unit vector pointing along this angle in screen space (Y grows downward).
    ///
    /// Angles are measured counter-clockwise as seen on screen, so 90° points
    /// up `(0, -1)` and 270° points down `(0, 1)`.
    pub fn unit_vector(&self) -> DVec2 {
        DVec2::new(self.radians.cos(), -self.radians.sin())
    }
}
