use std::fmt::Write;

use crate::aircraft::AircraftCatalog;
use crate::routing::{BaselineKind, OptimizedPath};

/// Presentation style for turning an [`OptimizedPath`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathRenderMode {
    /// Header line plus one line per leg.
    #[default]
    Detailed,
    /// Single line per path.
    Compact,
}

/// Render one optimized path.
pub fn render_path(path: &OptimizedPath, mode: PathRenderMode) -> String {
    match mode {
        PathRenderMode::Detailed => render_detailed(path),
        PathRenderMode::Compact => render_compact(path, None),
    }
}

/// Render ranked alternatives, numbering them from 1.
pub fn render_alternatives(paths: &[OptimizedPath], mode: PathRenderMode) -> String {
    let mut buffer = String::new();
    if paths.is_empty() {
        let _ = writeln!(buffer, "No paths found.");
        return buffer;
    }

    for (index, path) in paths.iter().enumerate() {
        match mode {
            PathRenderMode::Compact => buffer.push_str(&render_compact(path, Some(index + 1))),
            PathRenderMode::Detailed => {
                if index > 0 {
                    buffer.push('\n');
                }
                let _ = writeln!(buffer, "#{}", index + 1);
                buffer.push_str(&render_detailed(path));
            }
        }
    }
    buffer
}

/// Tabulate the aircraft catalog, sorted by model.
pub fn render_aircraft(catalog: &AircraftCatalog) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "{:<20} {:<12} {:>10} {:>10} {:>10}",
        "Model", "Maker", "kg/km", "km/h", "range km"
    );
    for aircraft in catalog.aircraft_sorted() {
        let range = aircraft
            .max_range_km
            .map(|range| format!("{range:.0}"))
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            buffer,
            "{:<20} {:<12} {:>10.2} {:>10.0} {:>10}",
            aircraft.model,
            aircraft.manufacturer,
            aircraft.fuel_burn_kg_per_km,
            aircraft.cruise_speed_kmh,
            range
        );
    }
    buffer
}

fn render_detailed(path: &OptimizedPath) -> String {
    let mut buffer = String::new();
    let _ = writeln!(
        buffer,
        "Route: {} -> {} ({} legs, {}, mode: {})",
        path.origin,
        path.destination,
        path.leg_count(),
        path.aircraft,
        path.mode
    );
    let _ = writeln!(buffer, "Path: {}", path.waypoints.join(" -> "));
    for (index, leg) in path.legs.iter().enumerate() {
        let _ = writeln!(
            buffer,
            "{:>3}: {} -> {}  {:>8.0} km  {:>7.2} h  {:>9.0} kg fuel  {:>9.0} kg CO2",
            index + 1,
            leg.from,
            leg.to,
            leg.distance_km,
            leg.flight_time_hours,
            leg.fuel_kg,
            leg.co2_kg
        );
    }
    let _ = writeln!(
        buffer,
        "Total: {:.0} km, {:.2} h, {:.0} kg fuel, {:.3} t CO2, cost {:.4}",
        path.total_distance_km,
        path.total_flight_time_hours,
        path.total_fuel_kg,
        path.total_co2_tonnes(),
        path.total_cost
    );
    let baseline = match path.baseline.kind {
        BaselineKind::DirectRoute => "direct route",
        BaselineKind::GreatCircle => "great-circle flight",
    };
    let _ = writeln!(
        buffer,
        "CO2 savings: {:.1}% vs {} ({:.0} km)",
        path.savings_pct, baseline, path.baseline.distance_km
    );
    buffer
}

fn render_compact(path: &OptimizedPath, rank: Option<usize>) -> String {
    let prefix = rank.map(|rank| format!("{rank}. ")).unwrap_or_default();
    format!(
        "{}{} | {:.0} km | {:.2} h | {:.3} t CO2 | {:.1}% saved | cost {:.4}\n",
        prefix,
        path.waypoints.join(" -> "),
        path.total_distance_km,
        path.total_flight_time_hours,
        path.total_co2_tonnes(),
        path.savings_pct,
        path.total_cost
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aircraft::Aircraft;
    use crate::cost::OptimizationMode;
    use crate::routing::{Baseline, PathLeg};

    fn sample() -> OptimizedPath {
        let leg = |from: &str, to: &str| PathLeg {
            from: from.to_string(),
            to: to.to_string(),
            distance_km: 500.0,
            fuel_kg: 1725.0,
            co2_kg: 5451.0,
            flight_time_hours: 0.5556,
            cost: 1.374,
        };
        OptimizedPath {
            origin: "AAA".into(),
            destination: "CCC".into(),
            aircraft: "Test Jet".into(),
            mode: OptimizationMode::Eco,
            waypoints: vec!["AAA".into(), "BBB".into(), "CCC".into()],
            legs: vec![leg("AAA", "BBB"), leg("BBB", "CCC")],
            total_distance_km: 1000.0,
            total_flight_time_hours: 1.1112,
            total_fuel_kg: 3450.0,
            total_co2_kg: 10902.0,
            total_cost: 2.748,
            savings_pct: 33.3,
            baseline: Baseline {
                kind: BaselineKind::DirectRoute,
                distance_km: 1500.0,
                co2_kg: 16353.0,
            },
            expansions: 2,
        }
    }

    #[test]
    fn detailed_lists_every_leg() {
        let text = render_path(&sample(), PathRenderMode::Detailed);
        assert!(text.starts_with("Route: AAA -> CCC (2 legs, Test Jet, mode: eco)"));
        assert!(text.contains("Path: AAA -> BBB -> CCC"));
        assert!(text.contains("  1: AAA -> BBB"));
        assert!(text.contains("  2: BBB -> CCC"));
        assert!(text.contains("CO2 savings: 33.3% vs direct route (1500 km)"));
    }

    #[test]
    fn compact_alternatives_are_numbered() {
        let paths = vec![sample(), sample()];
        let text = render_alternatives(&paths, PathRenderMode::Compact);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("1. AAA -> BBB -> CCC"));
        assert!(lines[1].starts_with("2. "));
    }

    #[test]
    fn aircraft_table_shows_missing_range() {
        let catalog = AircraftCatalog::from_records(vec![
            Aircraft::new("Test Jet", "Acme", 3.0, 900.0),
            Aircraft::new("Long Hauler", "Acme", 2.5, 910.0).with_max_range(15000.0),
        ])
        .expect("valid catalog");
        let text = render_aircraft(&catalog);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Long Hauler"));
        assert!(lines[1].trim_end().ends_with("15000"));
        assert!(lines[2].trim_end().ends_with('-'));
    }
}
