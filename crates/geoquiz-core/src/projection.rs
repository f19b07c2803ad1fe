// crates/geoquiz-core/src/projection.rs

//! Geographic -> drawing-surface coordinates.
//!
//! Plain linear (equirectangular) mapping of the mode's bounds onto the
//! surface: longitude runs left to right, latitude top (north) to bottom.
//! Nothing is clipped; a city outside the bounds lands outside the
//! surface and callers decide whether to draw it.

use crate::error::{QuizError, Result};
use crate::model::Bounds;
use serde::Serialize;

/// Pixel size of the drawing surface at the moment of projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    pub fn new(width: f64, height: f64) -> Self {
        SurfaceSize { width, height }
    }
}

/// A position on the drawing surface, origin top-left, y growing down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

/// Project `(lat, lon)` inside `bounds` onto a surface of `surface` size.
///
/// Returns [`QuizError::DegenerateBounds`] when the bounds span zero
/// degrees on either axis.
///
/// # Examples
///
/// ```rust
/// use geoquiz_core::model::Bounds;
/// use geoquiz_core::projection::{project, SurfaceSize};
///
/// let p = project(0.0, 0.0, &Bounds::WORLD, SurfaceSize::new(360.0, 180.0)).unwrap();
/// assert_eq!((p.x, p.y), (180.0, 90.0));
/// ```
pub fn project(lat: f64, lon: f64, bounds: &Bounds, surface: SurfaceSize) -> Result<PlanarPoint> {
    if bounds.is_degenerate() {
        return Err(QuizError::DegenerateBounds(format!(
            "lat {}..{}, lon {}..{}",
            bounds.min_lat, bounds.max_lat, bounds.min_lon, bounds.max_lon
        )));
    }

    let x = (lon - bounds.min_lon) / bounds.lon_span() * surface.width;
    let y = (bounds.max_lat - lat) / bounds.lat_span() * surface.height;
    Ok(PlanarPoint { x, y })
}
