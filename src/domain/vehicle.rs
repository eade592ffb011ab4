// Vehicle domain models
use serde::Serialize;

/// A named fixed site (loading point, depot) a vehicle is based at.
#[derive(Debug, Clone, Serialize)]
pub struct Site {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPosition {
    /// Build a position rounded to 4 decimal places (~11m resolution),
    /// the precision the display expects for coordinates.
    pub fn rounded(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: round4(latitude),
            longitude: round4(longitude),
        }
    }
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

#[derive(Debug, Clone, Serialize)]
pub struct Vehicle {
    pub id: String,
    pub label: String,
    pub driver_name: String,
    pub cargo_kind: String,
    pub home: Site,
    pub payload_tons: f64,
    pub speed_kmh: u32,
    pub position: GeoPosition,
}

impl Vehicle {
    /// A freshly registered vehicle: stationary, parked at its home site.
    pub fn at_home(
        id: String,
        label: String,
        driver_name: String,
        cargo_kind: String,
        home: Site,
        payload_tons: f64,
    ) -> Self {
        let position = GeoPosition::rounded(home.latitude, home.longitude);
        Self {
            id,
            label,
            driver_name,
            cargo_kind,
            home,
            payload_tons,
            speed_kmh: 0,
            position,
        }
    }
}

/// One telemetry reading for one vehicle at one simulation tick.
/// Ephemeral: consumed by the registry and alert monitor, never stored.
#[derive(Debug, Clone)]
pub struct TelemetrySample {
    pub vehicle_id: String,
    pub speed_kmh: u32,
    pub position: GeoPosition,
    pub tick: u64,
}
