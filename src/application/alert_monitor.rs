// Alert monitor - Speed violation state machine (Idle -> Active -> Idle)
use crate::domain::alert::Alert;
use crate::domain::vehicle::Vehicle;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Watches post-tick fleet state and keeps at most one alert alive.
/// Raising supersedes whatever is showing; every raise cancels the
/// previous pending clear before scheduling its own, so a stale timer can
/// never take down a newer alert.
pub struct AlertMonitor {
    speed_limit_kmh: u32,
    lifetime: Duration,
    state: Arc<Mutex<MonitorState>>,
}

#[derive(Default)]
struct MonitorState {
    active: Option<Alert>,
    // Bumped on every raise; a clear only lands if its generation still matches.
    generation: u64,
    pending_clear: Option<JoinHandle<()>>,
}

impl AlertMonitor {
    pub fn new(speed_limit_kmh: u32, lifetime: Duration) -> Self {
        Self {
            speed_limit_kmh,
            lifetime,
            state: Arc::new(Mutex::new(MonitorState::default())),
        }
    }

    /// Inspect one tick's post-update snapshot. If several vehicles are over
    /// the limit, the last one in registration order wins (single-alert,
    /// last-write-wins policy).
    pub fn observe(&self, snapshot: &[Vehicle]) {
        let violator = snapshot
            .iter()
            .rfind(|v| v.speed_kmh > self.speed_limit_kmh);

        if let Some(vehicle) = violator {
            self.raise(Alert::new(
                vehicle.id.clone(),
                vehicle.label.clone(),
                vehicle.speed_kmh,
            ));
        }
    }

    fn raise(&self, alert: Alert) {
        let mut state = self.state.lock().unwrap();
        state.generation += 1;
        let generation = state.generation;

        if let Some(pending) = state.pending_clear.take() {
            pending.abort();
        }

        tracing::info!(
            vehicle = %alert.vehicle_id,
            speed_kmh = alert.speed_kmh,
            "speed limit exceeded, raising alert"
        );
        state.active = Some(alert);

        let shared = Arc::clone(&self.state);
        let lifetime = self.lifetime;
        state.pending_clear = Some(tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            let mut state = shared.lock().unwrap();
            if state.generation == generation {
                tracing::debug!("alert lifetime elapsed, clearing");
                state.active = None;
                state.pending_clear = None;
            }
        }));
    }

    /// The currently showing alert, if any.
    pub fn current(&self) -> Option<Alert> {
        self.state.lock().unwrap().active.clone()
    }

    /// Cancel any pending clear so no scheduled work outlives the system.
    pub fn shutdown(&self) {
        let mut state = self.state.lock().unwrap();
        if let Some(pending) = state.pending_clear.take() {
            pending.abort();
        }
    }
}
