// crates/geoquiz-core/src/marker.rs

//! Map markers for accepted cities.

use crate::error::Result;
use crate::model::{Bounds, CityRecord};
use crate::projection::{project, PlanarPoint, SurfaceSize};
use serde::Serialize;

/// Populations at or below this draw the smallest marker.
pub const MIN_POP: f64 = 100.0;
/// Populations at or above this draw the largest marker.
pub const MAX_POP: f64 = 20_000_000.0;
pub const MIN_RADIUS: f64 = 3.0;
pub const MAX_RADIUS: f64 = 12.0;

pub const CAPITAL_FILL: &str = "#FFD700";
pub const CITY_FILL: &str = "#4285F4";
const STROKE: &str = "#222";
const STROKE_WIDTH: f64 = 0.6;
const OPACITY: f64 = 0.85;

/// Marker radius in pixels: linear in population between the calibration
/// constants, clamped at both ends. Absent population draws the minimum.
pub fn marker_radius(population: Option<u64>) -> f64 {
    let pop = population.map_or(MIN_POP, |p| (p as f64).max(MIN_POP));
    let t = ((pop - MIN_POP) / (MAX_POP - MIN_POP)).clamp(0.0, 1.0);
    MIN_RADIUS + (MAX_RADIUS - MIN_RADIUS) * t
}

/// `1234567` -> `"1,234,567"`.
pub fn format_population(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A styled circle placed at a city's projected position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub point: PlanarPoint,
    pub radius: f64,
    pub fill: &'static str,
    pub title: String,
}

impl Marker {
    /// Project `city` and style its marker. Fails only on degenerate bounds.
    pub fn for_city(city: &CityRecord, bounds: &Bounds, surface: SurfaceSize) -> Result<Self> {
        let point = project(city.latitude, city.longitude, bounds, surface)?;
        Ok(Marker {
            point,
            radius: marker_radius(city.population),
            fill: if city.national_capital { CAPITAL_FILL } else { CITY_FILL },
            title: tooltip(city),
        })
    }

    /// SVG `<circle>` with a `<title>` tooltip.
    pub fn to_svg(&self) -> String {
        format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="{:.1}" fill="{}" stroke="{}" stroke-width="{}" opacity="{}"><title>{}</title></circle>"#,
            self.point.x,
            self.point.y,
            self.radius,
            self.fill,
            STROKE,
            STROKE_WIDTH,
            OPACITY,
            escape_xml(&self.title)
        )
    }
}

fn tooltip(city: &CityRecord) -> String {
    let population = city
        .population
        .map_or_else(|| "Unknown".to_owned(), format_population);
    format!(
        "{}, {}, {} ({})",
        city.name,
        city.state().unwrap_or(""),
        city.country,
        population
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// All markers drawn so far, renderable as a standalone SVG overlay.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn to_svg(&self, surface: SurfaceSize) -> String {
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = surface.width,
            h = surface.height
        );
        for marker in &self.markers {
            svg.push('\n');
            svg.push_str(&marker.to_svg());
        }
        svg.push_str("\n</svg>\n");
        svg
    }
}
