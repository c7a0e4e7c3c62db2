//! Spiral position functions.
//!
//! A [`SpiralFunction`] maps a node's insertion index to polar/height
//! coordinates. Implementations must be pure: the graph calls them exactly
//! once per insertion and relies on the same index always producing the same
//! position.

use super::types::SpiralPosition;

/// Maps an insertion index to a position on the spiral.
///
/// Closures of the form `Fn(usize) -> SpiralPosition` implement this trait,
/// so custom layouts need no named type:
///
/// ```rust
/// use hurricane_core::graph::{SpiralFunction, SpiralPosition};
///
/// let flat = |i: usize| SpiralPosition::new(i as f64, 0.0, 0.0);
/// assert_eq!(flat.position(3).r, 3.0);
/// ```
pub trait SpiralFunction: Send + Sync {
    /// Returns the position of the node inserted at `index`.
    fn position(&self, index: usize) -> SpiralPosition;

    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> SpiralFunction for F
where
    F: Fn(usize) -> SpiralPosition + Send + Sync,
{
    fn position(&self, index: usize) -> SpiralPosition {
        self(index)
    }
}

// Reason: insertion indices stay far below 2^52, where the conversion is exact.
#[allow(clippy::cast_precision_loss)]
#[inline]
fn index_f64(index: usize) -> f64 {
    index as f64
}

/// Uniformly expanding spiral: every component grows linearly with the index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearSpiral {
    radius_step: f64,
    angle_step: f64,
    height_step: f64,
}

impl LinearSpiral {
    /// Creates a linear spiral with per-index radius, angle and height steps.
    #[must_use]
    pub const fn new(radius_step: f64, angle_step: f64, height_step: f64) -> Self {
        Self {
            radius_step,
            angle_step,
            height_step,
        }
    }
}

impl SpiralFunction for LinearSpiral {
    fn position(&self, index: usize) -> SpiralPosition {
        let i = index_f64(index);
        SpiralPosition::new(i * self.radius_step, i * self.angle_step, i * self.height_step)
    }

    fn name(&self) -> &'static str {
        "linear"
    }
}

/// Logarithmic spiral: `θ = i·b`, `r = a·e^(b·θ)`.
///
/// With `b > 0` both the angle and the radius strictly increase with the
/// index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogarithmicSpiral {
    a: f64,
    b: f64,
    height_step: f64,
}

impl LogarithmicSpiral {
    /// Creates a logarithmic spiral with scale `a`, growth `b` and height step.
    #[must_use]
    pub const fn new(a: f64, b: f64, height_step: f64) -> Self {
        Self { a, b, height_step }
    }
}

impl SpiralFunction for LogarithmicSpiral {
    fn position(&self, index: usize) -> SpiralPosition {
        let i = index_f64(index);
        let theta = i * self.b;
        SpiralPosition::new(self.a * (self.b * theta).exp(), theta, i * self.height_step)
    }

    fn name(&self) -> &'static str {
        "logarithmic"
    }
}

/// Archimedean spiral: `θ = i·b`, `r = a + b·θ`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArchimedeanSpiral {
    a: f64,
    b: f64,
    height_step: f64,
}

impl ArchimedeanSpiral {
    /// Creates an Archimedean spiral with offset `a`, pitch `b` and height step.
    #[must_use]
    pub const fn new(a: f64, b: f64, height_step: f64) -> Self {
        Self { a, b, height_step }
    }
}

impl SpiralFunction for ArchimedeanSpiral {
    fn position(&self, index: usize) -> SpiralPosition {
        let i = index_f64(index);
        let theta = i * self.b;
        SpiralPosition::new(self.a + self.b * theta, theta, i * self.height_step)
    }

    fn name(&self) -> &'static str {
        "archimedean"
    }
}
