//! Projection example for geoquiz-rs
//!
//! Shows where a few cities land on surfaces of different sizes and writes
//! the resulting marker layer as SVG to stdout.

use geoquiz_core::prelude::*;

fn main() -> Result<()> {
    let europe = Bounds::new(34.5, 71.5, -25.0, 45.0);
    let cities = [
        CityRecord::new("Lisbon", "Portugal", 38.72, -9.14)
            .with_population(545_000)
            .national_capital(),
        CityRecord::new("Helsinki", "Finland", 60.17, 24.94)
            .with_population(658_000)
            .national_capital(),
        CityRecord::new("Reykjavík", "Iceland", 64.15, -21.94).with_population(135_000),
    ];

    for surface in [SurfaceSize::new(700.0, 370.0), SurfaceSize::new(1400.0, 740.0)] {
        println!("--- {} x {} ---", surface.width, surface.height);
        for city in &cities {
            let p = project(city.latitude, city.longitude, &europe, surface)?;
            println!("{:<10} x={:>7.1} y={:>6.1}", city.name, p.x, p.y);
        }
    }

    // Degenerate bounds cannot be projected onto.
    let flat = Bounds::new(10.0, 10.0, 0.0, 20.0);
    if let Err(e) = project(10.0, 5.0, &flat, SurfaceSize::new(100.0, 100.0)) {
        println!("\nflat bounds: {e}");
    }

    let surface = SurfaceSize::new(700.0, 370.0);
    let mut layer = MarkerLayer::new();
    for city in &cities {
        layer.push(Marker::for_city(city, &europe, surface)?);
    }
    println!("\n{}", layer.to_svg(surface));

    Ok(())
}
