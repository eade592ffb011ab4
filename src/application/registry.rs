// Vehicle registry - Authoritative table of fleet identity and current telemetry
use crate::domain::vehicle::{TelemetrySample, Vehicle};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A sample referenced a vehicle that was never registered. This is a
    /// programming or config error, fatal to that sample only.
    #[error("unknown vehicle id '{0}'")]
    UnknownVehicle(String),
}

/// Owns the fixed set of tracked vehicles. Iteration order is registration
/// order, stable for the process lifetime.
#[derive(Debug)]
pub struct VehicleRegistry {
    vehicles: Vec<Vehicle>,
}

impl VehicleRegistry {
    pub fn new(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    /// Replace a vehicle's speed and position in place. Identity fields are
    /// never touched by samples.
    pub fn apply_sample(&mut self, sample: &TelemetrySample) -> Result<(), RegistryError> {
        let vehicle = self
            .vehicles
            .iter_mut()
            .find(|v| v.id == sample.vehicle_id)
            .ok_or_else(|| RegistryError::UnknownVehicle(sample.vehicle_id.clone()))?;

        vehicle.speed_kmh = sample.speed_kmh;
        vehicle.position = sample.position;
        Ok(())
    }

    /// Current state of every vehicle, in registration order.
    pub fn snapshot(&self) -> Vec<Vehicle> {
        self.vehicles.clone()
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{GeoPosition, Site};

    fn test_vehicle(id: &str, label: &str) -> Vehicle {
        Vehicle::at_home(
            id.to_string(),
            label.to_string(),
            "Test Driver".to_string(),
            "Coal".to_string(),
            Site {
                name: "Dhanbad".to_string(),
                latitude: 23.7998,
                longitude: 86.4305,
            },
            100.0,
        )
    }

    fn sample_for(id: &str, speed_kmh: u32) -> TelemetrySample {
        TelemetrySample {
            vehicle_id: id.to_string(),
            speed_kmh,
            position: GeoPosition::rounded(23.8001, 86.4310),
            tick: 1,
        }
    }

    #[test]
    fn test_apply_sample_replaces_telemetry() {
        let mut registry = VehicleRegistry::new(vec![test_vehicle("t1", "Truck 1")]);
        registry.apply_sample(&sample_for("t1", 42)).unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot[0].speed_kmh, 42);
        assert_eq!(snapshot[0].position.latitude, 23.8001);
    }

    #[test]
    fn test_apply_sample_unknown_vehicle() {
        let mut registry = VehicleRegistry::new(vec![test_vehicle("t1", "Truck 1")]);
        let err = registry.apply_sample(&sample_for("ghost", 42)).unwrap_err();
        assert_eq!(err, RegistryError::UnknownVehicle("ghost".to_string()));
    }

    #[test]
    fn test_identity_fields_invariant_under_samples() {
        let mut registry = VehicleRegistry::new(vec![
            test_vehicle("t1", "Truck 1"),
            test_vehicle("t2", "Truck 2"),
        ]);
        registry.apply_sample(&sample_for("t2", 55)).unwrap();

        let snapshot = registry.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1].id, "t2");
        assert_eq!(snapshot[1].label, "Truck 2");
        assert_eq!(snapshot[1].driver_name, "Test Driver");
        assert_eq!(snapshot[1].cargo_kind, "Coal");
    }

    #[test]
    fn test_snapshot_preserves_registration_order() {
        let registry = VehicleRegistry::new(vec![
            test_vehicle("b", "Truck B"),
            test_vehicle("a", "Truck A"),
            test_vehicle("c", "Truck C"),
        ]);
        let ids: Vec<_> = registry.snapshot().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
