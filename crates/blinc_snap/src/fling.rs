//! Fling deceleration model
//!
//! Predicts where a fling comes to rest without simulating it frame by
//! frame. The travel distance follows the spline deceleration curve used by
//! platform scrollers: it grows super-linearly with the release velocity and
//! scales with the physical size of a pixel, so the same flick travels the
//! same number of inches on any screen.
//!
//! # Example
//!
//! ```rust
//! use blinc_snap::fling::{FlingBounds, FlingPhysics};
//!
//! let physics = FlingPhysics::new(160.0);
//! let fling = physics.fling((0, 0), (4000, 0), FlingBounds::symmetric(300));
//! assert_eq!(fling.final_x, 300);
//! assert_eq!(fling.final_y, 0);
//! ```

/// Standard gravity (m/s²)
const GRAVITY_EARTH: f64 = 9.806_65;

/// Inches per meter
const INCHES_PER_METER: f64 = 39.37;

/// Empirical tuning applied on top of the physical coefficient
const PHYSICAL_TUNING: f64 = 0.84;

/// Tension where the spline switches from acceleration to deceleration
const INFLEXION: f64 = 0.35;

/// Default scroll friction of platform scrollers
pub const DEFAULT_SCROLL_FRICTION: f32 = 0.015;

fn deceleration_rate() -> f64 {
    0.78_f64.ln() / 0.9_f64.ln()
}

/// Inclusive bounds for the resting position of a fling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlingBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl FlingBounds {
    /// Same `[-max, max]` range on both axes
    pub fn symmetric(max: i32) -> Self {
        let max = max.saturating_abs();
        Self {
            min_x: -max,
            max_x: max,
            min_y: -max,
            max_y: max,
        }
    }

    /// No bounds
    pub fn unbounded() -> Self {
        Self {
            min_x: i32::MIN,
            max_x: i32::MAX,
            min_y: i32::MIN,
            max_y: i32::MAX,
        }
    }
}

impl Default for FlingBounds {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Predicted end of a fling
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FlingResult {
    /// Resting x position
    pub final_x: i32,
    /// Resting y position
    pub final_y: i32,
    /// Time to come to rest (milliseconds)
    pub duration_ms: u32,
}

/// Spline-based fling deceleration for a given screen density
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingPhysics {
    /// Scroll friction (default: 0.015)
    pub friction: f32,
    /// Screen density in dots per inch
    pub density_dpi: f32,
}

impl FlingPhysics {
    /// Create physics for a screen density with default friction
    pub fn new(density_dpi: f32) -> Self {
        Self {
            friction: DEFAULT_SCROLL_FRICTION,
            density_dpi,
        }
    }

    /// Set the scroll friction
    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    fn physical_coeff(&self) -> f64 {
        GRAVITY_EARTH * INCHES_PER_METER * f64::from(self.density_dpi) * PHYSICAL_TUNING
    }

    fn spline_deceleration(&self, velocity: f64) -> f64 {
        (INFLEXION * velocity.abs() / (f64::from(self.friction) * self.physical_coeff())).ln()
    }

    /// Distance in pixels a fling at `velocity` (px/s) travels before resting
    pub fn fling_distance(&self, velocity: f64) -> f64 {
        if velocity == 0.0 || self.friction <= 0.0 || self.density_dpi <= 0.0 {
            return 0.0;
        }
        let rate = deceleration_rate();
        let l = self.spline_deceleration(velocity);
        f64::from(self.friction) * self.physical_coeff() * (rate / (rate - 1.0) * l).exp()
    }

    /// Time in milliseconds a fling at `velocity` (px/s) takes to rest
    pub fn fling_duration_ms(&self, velocity: f64) -> u32 {
        if velocity == 0.0 || self.friction <= 0.0 || self.density_dpi <= 0.0 {
            return 0;
        }
        let rate = deceleration_rate();
        let l = self.spline_deceleration(velocity);
        (1000.0 * (l / (rate - 1.0)).exp()) as u32
    }

    /// Predict the resting position of a fling starting at `start`
    ///
    /// The distance is split along the velocity vector, then each axis is
    /// clamped to `bounds` independently.
    pub fn fling(
        &self,
        start: (i32, i32),
        velocity: (i32, i32),
        bounds: FlingBounds,
    ) -> FlingResult {
        let (vx, vy) = (f64::from(velocity.0), f64::from(velocity.1));
        let speed = vx.hypot(vy);

        let total = self.fling_distance(speed);
        let (coeff_x, coeff_y) = if speed == 0.0 {
            (1.0, 1.0)
        } else {
            (vx / speed, vy / speed)
        };

        let final_x = offset(start.0, total * coeff_x).clamp(bounds.min_x, bounds.max_x);
        let final_y = offset(start.1, total * coeff_y).clamp(bounds.min_y, bounds.max_y);

        FlingResult {
            final_x,
            final_y,
            duration_ms: self.fling_duration_ms(speed),
        }
    }
}

/// Round half up, then saturate into i32
fn offset(start: i32, distance: f64) -> i32 {
    let end = f64::from(start) + (distance + 0.5).floor();
    end.clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32
}
