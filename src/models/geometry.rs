//! Surface-space geometry shared by layout, hit-testing and surface sync

use serde::{Deserialize, Serialize};

/// Displayed (CSS pixel) size of the drawing surface
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A pointer position in surface-local logical pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfacePoint {
    pub x: f64,
    pub y: f64,
}

impl SurfacePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Convert a client-space coordinate using the surface's bounding rect origin
    pub fn from_client(client_x: f64, client_y: f64, rect_left: f64, rect_top: f64) -> Self {
        Self {
            x: client_x - rect_left,
            y: client_y - rect_top,
        }
    }
}

/// Device pixel ratio, with anything unusable treated as 1
pub fn effective_pixel_ratio(dpr: f64) -> f64 {
    if dpr.is_finite() && dpr > 0.0 {
        dpr
    } else {
        1.0
    }
}

/// Backing buffer dimensions for a displayed size at a pixel ratio
pub fn backing_dimensions(size: SurfaceSize, dpr: f64) -> (u32, u32) {
    let dpr = effective_pixel_ratio(dpr);
    let scale = |v: f64| (v.max(0.0) * dpr).round() as u32;
    (scale(size.width), scale(size.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backing_dimensions_scale_by_dpr() {
        let size = SurfaceSize::new(300.0, 600.0);
        assert_eq!(backing_dimensions(size, 1.0), (300, 600));
        assert_eq!(backing_dimensions(size, 2.0), (600, 1200));
        assert_eq!(backing_dimensions(size, 1.5), (450, 900));
    }

    #[test]
    fn test_invalid_dpr_falls_back_to_one() {
        let size = SurfaceSize::new(100.0, 50.0);
        assert_eq!(backing_dimensions(size, 0.0), (100, 50));
        assert_eq!(backing_dimensions(size, f64::NAN), (100, 50));
        assert_eq!(backing_dimensions(size, -2.0), (100, 50));
    }

    #[test]
    fn test_from_client_subtracts_rect_origin() {
        let p = SurfacePoint::from_client(140.0, 95.0, 40.0, 15.0);
        assert_eq!(p, SurfacePoint::new(100.0, 80.0));
    }
}
