//! Pointer-to-row hit testing.
//!
//! The rendering engine owns layout, so it also answers which row lies under
//! a point. Results are only a suggestion: callers still check them against
//! the live item count.

use winit::dpi::{PhysicalPosition, PhysicalSize};

/// Visible area of a list, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Size of the visible area
    pub size: PhysicalSize<u32>,
    /// Pixels scrolled past the top of the first row
    pub scroll_offset: f64,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            size: PhysicalSize::new(width, height),
            scroll_offset: 0.0,
        }
    }

    /// Whether `point` (relative to the viewport's top-left) is inside it.
    pub fn contains(&self, point: PhysicalPosition<f64>) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < f64::from(self.size.width)
            && point.y < f64::from(self.size.height)
    }
}

/// Maps a point in the viewport to a row index.
pub trait HitTester {
    fn row_at(&self, point: PhysicalPosition<f64>, viewport: &Viewport) -> Option<usize>;
}

/// Hit tester for lists whose rows all share one height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformRowHitTester {
    /// Row height in physical pixels
    pub row_height: f64,
}

impl HitTester for UniformRowHitTester {
    fn row_at(&self, point: PhysicalPosition<f64>, viewport: &Viewport) -> Option<usize> {
        if self.row_height <= 0.0 || !viewport.contains(point) {
            return None;
        }
        let row = ((point.y + viewport.scroll_offset) / self.row_height).floor();
        if row < 0.0 {
            return None;
        }
        Some(row as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_rows() {
        let tester = UniformRowHitTester { row_height: 20.0 };
        let viewport = Viewport::new(200, 100);
        assert_eq!(tester.row_at(PhysicalPosition::new(5.0, 0.0), &viewport), Some(0));
        assert_eq!(tester.row_at(PhysicalPosition::new(5.0, 59.9), &viewport), Some(2));
    }

    #[test]
    fn test_scroll_offset_shifts_rows() {
        let tester = UniformRowHitTester { row_height: 20.0 };
        let viewport = Viewport {
            scroll_offset: 40.0,
            ..Viewport::new(200, 100)
        };
        assert_eq!(tester.row_at(PhysicalPosition::new(5.0, 1.0), &viewport), Some(2));
    }

    #[test]
    fn test_outside_viewport() {
        let tester = UniformRowHitTester { row_height: 20.0 };
        let viewport = Viewport::new(200, 100);
        assert_eq!(tester.row_at(PhysicalPosition::new(-1.0, 5.0), &viewport), None);
        assert_eq!(tester.row_at(PhysicalPosition::new(5.0, 100.0), &viewport), None);
    }

    #[test]
    fn test_degenerate_row_height() {
        let tester = UniformRowHitTester { row_height: 0.0 };
        let viewport = Viewport::new(200, 100);
        assert_eq!(tester.row_at(PhysicalPosition::new(5.0, 5.0), &viewport), None);
    }
}
