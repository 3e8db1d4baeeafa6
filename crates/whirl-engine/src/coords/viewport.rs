/// Viewport size in logical pixels.
///
/// Renderers treat this as the coordinate basis for the per-frame projection;
/// the aspect ratio is re-derived from it every frame, so window resizes need
/// no additional handling.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    /// Width-over-height aspect ratio.
    ///
    /// An invalid viewport yields 1.0 rather than NaN/inf so a degenerate
    /// frame (e.g. mid-resize) still produces a finite projection matrix.
    #[inline]
    pub fn aspect(self) -> f32 {
        if self.is_valid() {
            self.width / self.height
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspect_of_valid_viewport() {
        assert_eq!(Viewport::new(1600.0, 800.0).aspect(), 2.0);
    }

    #[test]
    fn aspect_of_degenerate_viewport_is_finite() {
        assert_eq!(Viewport::new(800.0, 0.0).aspect(), 1.0);
        assert_eq!(Viewport::new(0.0, 600.0).aspect(), 1.0);
    }

    #[test]
    fn validity() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
        assert!(!Viewport::new(-1.0, 1.0).is_valid());
        assert!(!Viewport::new(f32::NAN, 1.0).is_valid());
    }
}
