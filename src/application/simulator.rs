// Telemetry simulator - Synthetic stand-in for a real sensor feed.
// Swapping this component for real ingestion leaves the rest of the
// pipeline (registry, monitor, aggregator) unchanged.
use crate::domain::vehicle::{GeoPosition, TelemetrySample};
use crate::application::registry::VehicleRegistry;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Speed range in km/h, inclusive lower bound, exclusive upper bound.
const SPEED_RANGE_KMH: std::ops::Range<u32> = 20..70;
/// Maximum per-tick coordinate drift in degrees, each axis independently.
const MAX_DRIFT_DEG: f64 = 0.005;

pub struct TelemetrySimulator {
    rng: StdRng,
    tick: u64,
}

impl TelemetrySimulator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            tick: 0,
        }
    }

    /// Deterministic simulator for tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            tick: 0,
        }
    }

    /// Draw one sample per vehicle, in registration order. Speed is uniform
    /// in [20, 70); each coordinate drifts by uniform(-0.005, 0.005) from
    /// the vehicle's current position (a random walk, not a jitter around
    /// the home site), rounded to 4 decimal places.
    pub fn advance(&mut self, registry: &VehicleRegistry) -> Vec<TelemetrySample> {
        self.tick += 1;
        let tick = self.tick;

        registry
            .vehicles()
            .iter()
            .map(|vehicle| {
                let speed_kmh = self.rng.gen_range(SPEED_RANGE_KMH);
                let latitude =
                    vehicle.position.latitude + self.rng.gen_range(-MAX_DRIFT_DEG..MAX_DRIFT_DEG);
                let longitude =
                    vehicle.position.longitude + self.rng.gen_range(-MAX_DRIFT_DEG..MAX_DRIFT_DEG);

                TelemetrySample {
                    vehicle_id: vehicle.id.clone(),
                    speed_kmh,
                    position: GeoPosition::rounded(latitude, longitude),
                    tick,
                }
            })
            .collect()
    }
}

impl Default for TelemetrySimulator {
    fn default() -> Self {
        Self::new()
    }
}
