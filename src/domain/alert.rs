// Speed violation alert domain model
use chrono::{DateTime, Utc};
use serde::Serialize;

/// A transient speed-limit violation. At most one is active at a time;
/// a newer raise supersedes whatever was showing.
#[derive(Debug, Clone, Serialize)]
pub struct Alert {
    pub vehicle_id: String,
    pub label: String,
    pub speed_kmh: u32,
    pub raised_at: DateTime<Utc>,
}

impl Alert {
    pub fn new(vehicle_id: String, label: String, speed_kmh: u32) -> Self {
        Self {
            vehicle_id,
            label,
            speed_kmh,
            raised_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_serializes_for_the_alert_feed() {
        let alert = Alert::new("truck-2".to_string(), "Truck 2".to_string(), 62);
        let json = serde_json::to_value(&alert).unwrap();

        assert_eq!(json["vehicle_id"], "truck-2");
        assert_eq!(json["label"], "Truck 2");
        assert_eq!(json["speed_kmh"], 62);
        // raised_at rides along as an RFC 3339 timestamp string.
        let raised_at = json["raised_at"].as_str().unwrap();
        assert!(raised_at.parse::<DateTime<Utc>>().is_ok());
    }
}
