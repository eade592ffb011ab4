// Fleet service - Tick orchestration for the telemetry pipeline.
// One tick = simulate -> apply to registry -> alert monitor -> publish
// board, as a single logical step. Readers only ever see a board that was
// published after the whole step completed.
use crate::application::aggregator;
use crate::application::alert_monitor::AlertMonitor;
use crate::application::registry::VehicleRegistry;
use crate::application::simulator::TelemetrySimulator;
use crate::domain::alert::Alert;
use crate::domain::chart::ChartPoint;
use crate::domain::vehicle::{TelemetrySample, Vehicle};
use std::time::Duration;
use tokio::sync::{Mutex, RwLock, watch};
use tokio::time::MissedTickBehavior;

/// The published view of the fleet after a tick: snapshot plus the
/// chart series derived from it. Cloned out to HTTP handlers.
#[derive(Debug, Clone, Default)]
pub struct FleetBoard {
    pub tick: u64,
    pub vehicles: Vec<Vehicle>,
    pub speed_series: Vec<ChartPoint>,
}

/// Registry and simulator advance together and only ever from the tick
/// step, so they live behind one writer lock.
struct TickWriter {
    registry: VehicleRegistry,
    simulator: TelemetrySimulator,
}

pub struct FleetService {
    writer: Mutex<TickWriter>,
    board: RwLock<FleetBoard>,
    monitor: AlertMonitor,
}

impl FleetService {
    pub fn new(
        vehicles: Vec<Vehicle>,
        simulator: TelemetrySimulator,
        speed_limit_kmh: u32,
        alert_lifetime: Duration,
    ) -> Self {
        let registry = VehicleRegistry::new(vehicles);
        let snapshot = registry.snapshot();
        let board = FleetBoard {
            tick: 0,
            speed_series: aggregator::speed_series(&snapshot),
            vehicles: snapshot,
        };

        Self {
            writer: Mutex::new(TickWriter { registry, simulator }),
            board: RwLock::new(board),
            monitor: AlertMonitor::new(speed_limit_kmh, alert_lifetime),
        }
    }

    /// Run one simulation tick end to end.
    pub async fn advance_tick(&self) {
        let mut guard = self.writer.lock().await;
        let writer = &mut *guard;
        let samples = writer.simulator.advance(&writer.registry);
        self.apply_and_publish(writer, samples).await;
    }

    /// Apply externally produced samples as one tick. This is the seam a
    /// real ingestion feed would use in place of the simulator.
    pub async fn step_with_samples(&self, samples: Vec<TelemetrySample>) {
        let mut guard = self.writer.lock().await;
        self.apply_and_publish(&mut guard, samples).await;
    }

    async fn apply_and_publish(&self, writer: &mut TickWriter, samples: Vec<TelemetrySample>) {
        let tick = samples.first().map(|s| s.tick).unwrap_or_default();

        for sample in &samples {
            if let Err(err) = writer.registry.apply_sample(sample) {
                // Fatal to this sample only; the tick continues for the rest.
                tracing::error!(%err, tick, "dropping telemetry sample");
            }
        }

        let snapshot = writer.registry.snapshot();
        self.monitor.observe(&snapshot);

        let speed_series = aggregator::speed_series(&snapshot);
        let mut board = self.board.write().await;
        *board = FleetBoard {
            tick,
            vehicles: snapshot,
            speed_series,
        };
        tracing::debug!(tick, vehicles = board.vehicles.len(), "published fleet board");
    }

    pub async fn board(&self) -> FleetBoard {
        self.board.read().await.clone()
    }

    pub fn current_alert(&self) -> Option<Alert> {
        self.monitor.current()
    }

    /// Drive the fixed-interval tick loop until shutdown is signalled.
    /// Stopping cancels the interval and the monitor's pending clear, so no
    /// scheduled work is left dangling.
    pub async fn run(&self, tick_interval: Duration, mut shutdown: watch::Receiver<bool>) {
        let mut ticker = tokio::time::interval(tick_interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // The first interval tick fires immediately; consume it so the
        // seeded board (speeds 0) is visible for one full period.
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => self.advance_tick().await,
                changed = shutdown.changed() => {
                    if changed.is_err() || *shutdown.borrow() {
                        break;
                    }
                }
            }
        }

        self.monitor.shutdown();
        tracing::info!("fleet tick loop stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::vehicle::{GeoPosition, Site};
    use std::sync::Arc;

    const LIFETIME: Duration = Duration::from_millis(3000);

    fn seed_fleet() -> Vec<Vehicle> {
        [("truck-a", "Truck A"), ("truck-b", "Truck B"), ("truck-c", "Truck C")]
            .into_iter()
            .map(|(id, label)| {
                Vehicle::at_home(
                    id.to_string(),
                    label.to_string(),
                    "Driver".to_string(),
                    "Coal".to_string(),
                    Site {
                        name: "Dhanbad".to_string(),
                        latitude: 23.7998,
                        longitude: 86.4305,
                    },
                    120.0,
                )
            })
            .collect()
    }

    fn sample(id: &str, speed_kmh: u32, tick: u64) -> TelemetrySample {
        TelemetrySample {
            vehicle_id: id.to_string(),
            speed_kmh,
            position: GeoPosition::rounded(23.8000, 86.4300),
            tick,
        }
    }

    fn service() -> FleetService {
        FleetService::new(seed_fleet(), TelemetrySimulator::seeded(11), 50, LIFETIME)
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_board_has_zero_speeds() {
        let service = service();
        let board = service.board().await;

        assert_eq!(board.tick, 0);
        assert_eq!(board.speed_series.len(), 3);
        assert!(board.speed_series.iter().all(|p| p.speed == 0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_forced_tick_raises_alert_and_updates_chart() {
        let service = service();
        service
            .step_with_samples(vec![
                sample("truck-a", 30, 1),
                sample("truck-b", 62, 1),
                sample("truck-c", 45, 1),
            ])
            .await;

        let alert = service.current_alert().expect("Truck B should be alerting");
        assert_eq!(alert.vehicle_id, "truck-b");
        assert_eq!(alert.label, "Truck B");
        assert_eq!(alert.speed_kmh, 62);

        let board = service.board().await;
        assert_eq!(board.tick, 1);
        assert_eq!(board.speed_series.len(), 3);
        assert_eq!(board.speed_series[1].label, "Truck B");
        assert_eq!(board.speed_series[1].speed, 62);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_vehicle_sample_does_not_halt_the_tick() {
        let service = service();
        service
            .step_with_samples(vec![sample("ghost", 99, 1), sample("truck-a", 33, 1)])
            .await;

        let board = service.board().await;
        assert_eq!(board.vehicles.len(), 3);
        assert_eq!(board.vehicles[0].speed_kmh, 33);
        // The ghost sample raised nothing either.
        assert!(service.current_alert().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_advance_tick_preserves_identity_and_speed_range() {
        let service = service();
        service.advance_tick().await;
        service.advance_tick().await;

        let board = service.board().await;
        assert_eq!(board.tick, 2);
        let ids: Vec<_> = board.vehicles.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["truck-a", "truck-b", "truck-c"]);
        for vehicle in &board.vehicles {
            assert!((20..70).contains(&vehicle.speed_kmh));
        }
        for (point, vehicle) in board.speed_series.iter().zip(&board.vehicles) {
            assert_eq!(point.label, vehicle.label);
            assert_eq!(point.speed, vehicle.speed_kmh);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_loop_ticks_on_interval_and_stops_on_shutdown() {
        let service = Arc::new(service());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let runner = {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service.run(Duration::from_millis(3000), shutdown_rx).await;
            })
        };

        // Nothing before the first period elapses.
        tokio::time::sleep(Duration::from_millis(2900)).await;
        assert_eq!(service.board().await.tick, 0);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(service.board().await.tick, 1);

        shutdown_tx.send(true).unwrap();
        runner.await.unwrap();

        // No further ticks after shutdown.
        let tick = service.board().await.tick;
        tokio::time::sleep(Duration::from_millis(9000)).await;
        assert_eq!(service.board().await.tick, tick);
    }
}
