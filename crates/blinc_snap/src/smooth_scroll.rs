//! Smooth-scroll timing
//!
//! When a smooth scroll reaches its target child, the remaining snap
//! distance is animated with a decelerating curve. The duration comes from a
//! configured speed expressed in milliseconds per inch, so it is the same
//! physical speed on every screen density.

use crate::host::DEFAULT_DENSITY_DPI;

/// Default smooth-scroll speed (milliseconds per inch)
pub const DEFAULT_MS_PER_INCH: f32 = 100.0;

/// Fraction of the linear scroll time a decelerating scroll covers
const DECELERATION_TARGET_FACTOR: f32 = 0.3356;

/// Converts scroll distances into animation durations
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothScrollTiming {
    /// Scroll speed (milliseconds per inch)
    pub ms_per_inch: f32,
    /// Screen density in dots per inch
    pub density_dpi: f32,
}

impl Default for SmoothScrollTiming {
    fn default() -> Self {
        Self::new(DEFAULT_MS_PER_INCH, DEFAULT_DENSITY_DPI)
    }
}

impl SmoothScrollTiming {
    pub fn new(ms_per_inch: f32, density_dpi: f32) -> Self {
        Self {
            ms_per_inch,
            density_dpi,
        }
    }

    /// Milliseconds spent per pixel
    pub fn speed_per_pixel(&self) -> f32 {
        if self.density_dpi <= 0.0 {
            return 0.0;
        }
        self.ms_per_inch / self.density_dpi
    }

    /// Time to scroll `distance` pixels at constant speed
    pub fn time_for_scrolling(&self, distance: i32) -> u32 {
        (distance.unsigned_abs() as f32 * self.speed_per_pixel()).ceil() as u32
    }

    /// Time to scroll `distance` pixels while decelerating to rest
    pub fn time_for_deceleration(&self, distance: i32) -> u32 {
        (self.time_for_scrolling(distance) as f32 / DECELERATION_TARGET_FACTOR).ceil() as u32
    }
}

/// Decelerating interpolation: fast start, slow finish
pub fn decelerate(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Final correction a smooth scroll animates once its target is laid out
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SmoothScrollAction {
    pub dx: i32,
    pub dy: i32,
    /// Animation length (milliseconds)
    pub duration_ms: u32,
}

impl SmoothScrollAction {
    /// Offset from the animation start after `elapsed_ms`
    pub fn offset_at(&self, elapsed_ms: u32) -> (i32, i32) {
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            return (self.dx, self.dy);
        }
        let progress = decelerate(elapsed_ms as f32 / self.duration_ms as f32);
        (
            (self.dx as f32 * progress).round() as i32,
            (self.dy as f32 * progress).round() as i32,
        )
    }

    /// Returns true once the animation has run its full duration
    pub fn is_finished(&self, elapsed_ms: u32) -> bool {
        elapsed_ms >= self.duration_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_per_pixel() {
        let timing = SmoothScrollTiming::new(100.0, 160.0);
        assert_eq!(timing.speed_per_pixel(), 0.625);
    }

    #[test]
    fn test_time_for_scrolling_rounds_up() {
        let timing = SmoothScrollTiming::new(100.0, 160.0);

        assert_eq!(timing.time_for_scrolling(0), 0);
        assert_eq!(timing.time_for_scrolling(40), 25);
        assert_eq!(timing.time_for_scrolling(-40), 25);
        // 62.5ms
        assert_eq!(timing.time_for_scrolling(100), 63);
    }

    #[test]
    fn test_time_for_deceleration() {
        let timing = SmoothScrollTiming::new(100.0, 160.0);

        // 25 / 0.3356 = 74.49
        assert_eq!(timing.time_for_deceleration(40), 75);
        // 63 / 0.3356 = 187.72
        assert_eq!(timing.time_for_deceleration(100), 188);
        assert_eq!(timing.time_for_deceleration(0), 0);
    }

    #[test]
    fn test_slower_speed_takes_longer() {
        let fast = SmoothScrollTiming::new(25.0, 320.0);
        let slow = SmoothScrollTiming::new(200.0, 320.0);
        assert!(slow.time_for_deceleration(300) > fast.time_for_deceleration(300));
    }

    #[test]
    fn test_decelerate_curve() {
        assert_eq!(decelerate(0.0), 0.0);
        assert_eq!(decelerate(1.0), 1.0);
        assert_eq!(decelerate(0.5), 0.75);
        assert_eq!(decelerate(2.0), 1.0);
    }

    #[test]
    fn test_action_offsets() {
        let action = SmoothScrollAction {
            dx: -80,
            dy: 0,
            duration_ms: 100,
        };

        assert_eq!(action.offset_at(0), (0, 0));
        assert_eq!(action.offset_at(50), (-60, 0));
        assert_eq!(action.offset_at(100), (-80, 0));
        assert_eq!(action.offset_at(500), (-80, 0));
        assert!(!action.is_finished(99));
        assert!(action.is_finished(100));
    }
}
