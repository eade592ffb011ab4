// Chart-ready series models consumed by the dashboard sink
use serde::Serialize;

/// One bar/point of the live speed chart. The series is rebuilt wholesale
/// every tick; it is the latest snapshot, not a rolling history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub speed: u32,
}

/// One bar of the static payload-by-vehicle chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayloadPoint {
    pub label: String,
    pub payload_tons: f64,
}

/// One point of the hourly temperature series (time-of-day, °C).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyPoint {
    pub time: String,
    pub temperature: f64,
}

/// One point of the daily average temperature series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyPoint {
    pub date: String,
    pub temperature: f64,
}
