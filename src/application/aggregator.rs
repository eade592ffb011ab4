// Time-series aggregator - Pure projections from a fleet snapshot to
// chart-ready series. Owns no state; the output replaces the previous
// series wholesale each tick (live gauge, not rolling history).
use crate::domain::chart::{ChartPoint, PayloadPoint};
use crate::domain::vehicle::Vehicle;

/// One speed point per vehicle, in registration order.
pub fn speed_series(snapshot: &[Vehicle]) -> Vec<ChartPoint> {
    snapshot
        .iter()
        .map(|v| ChartPoint {
            label: v.label.clone(),
            speed: v.speed_kmh,
        })
        .collect()
}

/// One payload point per vehicle, in registration order. Payload is a
/// static vehicle attribute, so this series never changes across ticks.
pub fn payload_series(snapshot: &[Vehicle]) -> Vec<PayloadPoint> {
    snapshot
        .iter()
        .map(|v| PayloadPoint {
            label: v.label.clone(),
            payload_tons: v.payload_tons,
        })
        .collect()
}
